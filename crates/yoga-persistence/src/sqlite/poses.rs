//! Repositorio de poses.

use diesel::prelude::*;
use diesel::sql_types::Integer;
use log::debug;
use yoga_core::{PoseLookup, SessionError};
use yoga_domain::{Chakra, NewPose, Pose, PoseUpdate};

use super::{with_retry, ConnectionProvider};
use crate::error::PersistenceError;
use crate::models::{into_domain, NewPoseRow, PoseChangeset, PoseRow};
use crate::schema::poses;

pub struct SqlitePoseRepository<P: ConnectionProvider> {
    pub provider: P,
}

impl<P: ConnectionProvider> SqlitePoseRepository<P> {
    pub fn new(provider: P) -> Self { Self { provider } }

    /// Inserta la pose y la devuelve con su id asignado.
    pub fn create(&self, new: &NewPose) -> Result<Pose, PersistenceError> {
        let row = NewPoseRow::from(new);
        let id = with_retry(|| {
                     let mut conn = self.provider.connection()?;
                     conn.transaction(|tx| {
                             diesel::insert_into(poses::table).values(&row).execute(tx)?;
                             diesel::select(diesel::dsl::sql::<Integer>("last_insert_rowid()"))
                                 .get_result::<i32>(tx)
                                 .map_err(PersistenceError::from)
                         })
                 })?;
        debug!("poses:create id={id} name={:?} chakra={}", new.name(), new.chakra());
        Ok(Pose::new(id, new.name(), new.chakra(), new.difficulty()))
    }

    pub fn get_all(&self) -> Result<Vec<Pose>, PersistenceError> {
        let rows: Vec<PoseRow> = with_retry(|| {
                                     let mut conn = self.provider.connection()?;
                                     poses::table.order(poses::id.asc())
                                                 .select(PoseRow::as_select())
                                                 .load(&mut conn)
                                                 .map_err(PersistenceError::from)
                                 })?;
        into_domain(rows)
    }

    pub fn find_by_id(&self, id: i32) -> Result<Option<Pose>, PersistenceError> {
        let row: Option<PoseRow> = with_retry(|| {
                                       let mut conn = self.provider.connection()?;
                                       poses::table.find(id)
                                                   .select(PoseRow::as_select())
                                                   .first(&mut conn)
                                                   .optional()
                                                   .map_err(PersistenceError::from)
                                   })?;
        row.map(Pose::try_from).transpose()
    }

    /// Poses de un chakra, ordenadas por id.
    pub fn list_by_chakra(&self, chakra: Chakra) -> Result<Vec<Pose>, PersistenceError> {
        let rows: Vec<PoseRow> = with_retry(|| {
                                     let mut conn = self.provider.connection()?;
                                     poses::table.filter(poses::chakra.eq(chakra.as_str()))
                                                 .order(poses::id.asc())
                                                 .select(PoseRow::as_select())
                                                 .load(&mut conn)
                                                 .map_err(PersistenceError::from)
                                 })?;
        debug!("poses:list_by_chakra chakra={chakra} count={}", rows.len());
        into_domain(rows)
    }

    /// Actualización parcial.
    ///
    /// - `Ok(None)`: la actualización no traía cambios; no se toca la base.
    /// - `Ok(Some(pose))`: pose ya actualizada.
    /// - `Err(NotFound)`: no existe el id.
    pub fn update(&self, id: i32, update: &PoseUpdate) -> Result<Option<Pose>, PersistenceError> {
        if update.is_empty() {
            debug!("poses:update id={id} no changes");
            return Ok(None);
        }
        let changes = PoseChangeset::from(update);
        let row: PoseRow = with_retry(|| {
                               let mut conn = self.provider.connection()?;
                               conn.transaction(|tx| {
                                       let affected = diesel::update(poses::table.find(id)).set(&changes).execute(tx)?;
                                       if affected == 0 {
                                           return Err(PersistenceError::NotFound);
                                       }
                                       poses::table.find(id)
                                                   .select(PoseRow::as_select())
                                                   .first(tx)
                                                   .map_err(PersistenceError::from)
                                   })
                           })?;
        debug!("poses:update id={id} done");
        Pose::try_from(row).map(Some)
    }

    /// Borra la pose (y en cascada sus vínculos con flows). `false` si no existía.
    pub fn delete(&self, id: i32) -> Result<bool, PersistenceError> {
        let affected = with_retry(|| {
                           let mut conn = self.provider.connection()?;
                           diesel::delete(poses::table.find(id)).execute(&mut conn)
                                                                .map_err(PersistenceError::from)
                       })?;
        debug!("poses:delete id={id} affected={affected}");
        Ok(affected > 0)
    }

    pub fn count(&self) -> Result<i64, PersistenceError> {
        with_retry(|| {
            let mut conn = self.provider.connection()?;
            poses::table.count().get_result(&mut conn).map_err(PersistenceError::from)
        })
    }
}

impl<P: ConnectionProvider> PoseLookup for SqlitePoseRepository<P> {
    fn list_poses_by_chakra(&self, chakra: Chakra) -> Result<Vec<Pose>, SessionError> {
        self.list_by_chakra(chakra).map_err(SessionError::from)
    }
}
