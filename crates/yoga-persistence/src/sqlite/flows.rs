//! Repositorio de plantillas de flow.

use diesel::prelude::*;
use diesel::sql_types::Integer;
use log::debug;
use yoga_domain::{Chakra, Difficulty, Flow, NewFlow};

use super::{with_retry, ConnectionProvider};
use crate::error::PersistenceError;
use crate::models::{into_domain, FlowRow, NewFlowRow};
use crate::schema::flows;

pub struct SqliteFlowRepository<P: ConnectionProvider> {
    pub provider: P,
}

impl<P: ConnectionProvider> SqliteFlowRepository<P> {
    pub fn new(provider: P) -> Self { Self { provider } }

    pub fn create(&self, new: &NewFlow) -> Result<Flow, PersistenceError> {
        let row = NewFlowRow::from(new);
        let id = with_retry(|| {
                     let mut conn = self.provider.connection()?;
                     conn.transaction(|tx| {
                             diesel::insert_into(flows::table).values(&row).execute(tx)?;
                             diesel::select(diesel::dsl::sql::<Integer>("last_insert_rowid()"))
                                 .get_result::<i32>(tx)
                                 .map_err(PersistenceError::from)
                         })
                 })?;
        debug!("flows:create id={id} chakra={} duration={}", new.chakra(), new.duration_minutes());
        Ok(Flow::new(id, new.chakra(), new.duration_minutes(), new.difficulty()))
    }

    /// Borra la plantilla (y en cascada sus vínculos). `false` si no existía.
    pub fn delete(&self, id: i32) -> Result<bool, PersistenceError> {
        let affected = with_retry(|| {
                           let mut conn = self.provider.connection()?;
                           diesel::delete(flows::table.find(id)).execute(&mut conn)
                                                                .map_err(PersistenceError::from)
                       })?;
        debug!("flows:delete id={id} affected={affected}");
        Ok(affected > 0)
    }

    pub fn find_by_id(&self, id: i32) -> Result<Option<Flow>, PersistenceError> {
        let row: Option<FlowRow> = with_retry(|| {
                                       let mut conn = self.provider.connection()?;
                                       flows::table.find(id)
                                                   .select(FlowRow::as_select())
                                                   .first(&mut conn)
                                                   .optional()
                                                   .map_err(PersistenceError::from)
                                   })?;
        row.map(Flow::try_from).transpose()
    }

    pub fn get_all(&self) -> Result<Vec<Flow>, PersistenceError> {
        let rows: Vec<FlowRow> = with_retry(|| {
                                     let mut conn = self.provider.connection()?;
                                     flows::table.order(flows::id.asc())
                                                 .select(FlowRow::as_select())
                                                 .load(&mut conn)
                                                 .map_err(PersistenceError::from)
                                 })?;
        into_domain(rows)
    }

    pub fn filter_by_chakra(&self, chakra: Chakra) -> Result<Vec<Flow>, PersistenceError> {
        let rows: Vec<FlowRow> = with_retry(|| {
                                     let mut conn = self.provider.connection()?;
                                     flows::table.filter(flows::chakra.eq(chakra.as_str()))
                                                 .order(flows::id.asc())
                                                 .select(FlowRow::as_select())
                                                 .load(&mut conn)
                                                 .map_err(PersistenceError::from)
                                 })?;
        into_domain(rows)
    }

    /// Filtro por duración exacta en minutos.
    pub fn filter_by_duration(&self, minutes: u32) -> Result<Vec<Flow>, PersistenceError> {
        let Ok(minutes) = i32::try_from(minutes) else {
            return Ok(Vec::new());
        };
        let rows: Vec<FlowRow> = with_retry(|| {
                                     let mut conn = self.provider.connection()?;
                                     flows::table.filter(flows::duration.eq(minutes))
                                                 .order(flows::id.asc())
                                                 .select(FlowRow::as_select())
                                                 .load(&mut conn)
                                                 .map_err(PersistenceError::from)
                                 })?;
        into_domain(rows)
    }

    pub fn filter_by_difficulty(&self, difficulty: Difficulty) -> Result<Vec<Flow>, PersistenceError> {
        let rows: Vec<FlowRow> = with_retry(|| {
                                     let mut conn = self.provider.connection()?;
                                     flows::table.filter(flows::difficulty.eq(difficulty.as_str()))
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
            flows::table.count().get_result(&mut conn).map_err(PersistenceError::from)
        })
    }
}
