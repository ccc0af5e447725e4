//! Relación many-to-many flow <-> pose (poses curadas por plantilla).

use diesel::prelude::*;
use log::debug;
use yoga_domain::{Flow, Pose};

use super::{with_retry, ConnectionProvider};
use crate::error::PersistenceError;
use crate::models::{into_domain, FlowRow, NewFlowPoseRow, PoseRow};
use crate::schema::{flow_poses, flows, poses};

pub struct SqliteFlowPoseRepository<P: ConnectionProvider> {
    pub provider: P,
}

impl<P: ConnectionProvider> SqliteFlowPoseRepository<P> {
    pub fn new(provider: P) -> Self { Self { provider } }

    /// Vincula una pose a un flow. Falla con `UniqueViolation` si ya estaba
    /// vinculada y con `ForeignKeyViolation` si alguno de los ids no existe.
    pub fn link(&self, flow_id: i32, pose_id: i32) -> Result<(), PersistenceError> {
        let row = NewFlowPoseRow { flow_id, pose_id };
        with_retry(|| {
            let mut conn = self.provider.connection()?;
            diesel::insert_into(flow_poses::table).values(&row)
                                                  .execute(&mut conn)
                                                  .map_err(PersistenceError::from)
        })?;
        debug!("flow_poses:link flow_id={flow_id} pose_id={pose_id}");
        Ok(())
    }

    /// `false` si el vínculo no existía.
    pub fn unlink(&self, flow_id: i32, pose_id: i32) -> Result<bool, PersistenceError> {
        let affected = with_retry(|| {
                           let mut conn = self.provider.connection()?;
                           diesel::delete(flow_poses::table.filter(flow_poses::flow_id.eq(flow_id))
                                                           .filter(flow_poses::pose_id.eq(pose_id)))
                               .execute(&mut conn)
                               .map_err(PersistenceError::from)
                       })?;
        Ok(affected > 0)
    }

    pub fn poses_for_flow(&self, flow_id: i32) -> Result<Vec<Pose>, PersistenceError> {
        let rows: Vec<PoseRow> = with_retry(|| {
                                     let mut conn = self.provider.connection()?;
                                     flow_poses::table.inner_join(poses::table)
                                                      .filter(flow_poses::flow_id.eq(flow_id))
                                                      .order(poses::id.asc())
                                                      .select(PoseRow::as_select())
                                                      .load(&mut conn)
                                                      .map_err(PersistenceError::from)
                                 })?;
        into_domain(rows)
    }

    pub fn flows_for_pose(&self, pose_id: i32) -> Result<Vec<Flow>, PersistenceError> {
        let rows: Vec<FlowRow> = with_retry(|| {
                                     let mut conn = self.provider.connection()?;
                                     flow_poses::table.inner_join(flows::table)
                                                      .filter(flow_poses::pose_id.eq(pose_id))
                                                      .order(flows::id.asc())
                                                      .select(FlowRow::as_select())
                                                      .load(&mut conn)
                                                      .map_err(PersistenceError::from)
                                 })?;
        into_domain(rows)
    }

    pub fn count(&self) -> Result<i64, PersistenceError> {
        with_retry(|| {
            let mut conn = self.provider.connection()?;
            flow_poses::table.count().get_result(&mut conn).map_err(PersistenceError::from)
        })
    }
}
