//! Tablas de ancho fijo para listados de flows y poses.
use yoga_domain::{Flow, Pose};

pub const FLOW_HEADER: &str = " id | chakra        | duration | difficulty ";
pub const POSE_HEADER: &str = " id | name                           | chakra        | difficulty ";

pub fn flow_row(flow: &Flow) -> String {
    format!("{:>3} | {:<13} | {:>8} | {}",
            flow.id(),
            flow.chakra().as_str(),
            flow.duration_minutes(),
            flow.difficulty())
}

pub fn pose_row(pose: &Pose) -> String {
    format!("{:>3} | {:<30} | {:<13} | {}",
            pose.id(),
            pose.name(),
            pose.chakra().as_str(),
            pose.difficulty())
}

/// Encabezado y una fila por flow; `None` si no hay nada que listar.
pub fn flow_table(flows: &[Flow]) -> Option<Vec<String>> {
    if flows.is_empty() {
        return None;
    }
    let mut lines = vec![String::new(), FLOW_HEADER.to_string(), String::new()];
    lines.extend(flows.iter().map(flow_row));
    lines.push(String::new());
    Some(lines)
}

pub fn pose_table(poses: &[Pose]) -> Option<Vec<String>> {
    if poses.is_empty() {
        return None;
    }
    let mut lines = vec![String::new(), POSE_HEADER.to_string(), String::new()];
    lines.extend(poses.iter().map(pose_row));
    lines.push(String::new());
    Some(lines)
}
