//! Esquema Diesel (escrito a mano). Reemplazable con `diesel print-schema`.

diesel::table! {
    poses (id) {
        id -> Integer,
        name -> Text,
        chakra -> Text,
        difficulty -> Text,
    }
}

diesel::table! {
    flows (id) {
        id -> Integer,
        chakra -> Text,
        duration -> Integer,
        difficulty -> Text,
    }
}

diesel::table! {
    flow_poses (id) {
        id -> Integer,
        flow_id -> Integer,
        pose_id -> Integer,
    }
}

diesel::joinable!(flow_poses -> flows (flow_id));
diesel::joinable!(flow_poses -> poses (pose_id));

diesel::allow_tables_to_appear_in_same_query!(
    flows,
    flow_poses,
    poses,
);
