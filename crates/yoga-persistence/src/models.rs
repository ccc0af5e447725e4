//! Filas Diesel y su mapeo a tipos de dominio.
//!
//! Chakra y dificultad se guardan como texto canónico ("Third Eye",
//! "Intermediate"); al leer se vuelven a parsear y una fila inválida se
//! reporta como `PersistenceError::Corrupt`.

use diesel::prelude::*;
use yoga_domain::{Flow, NewFlow, NewPose, Pose, PoseUpdate};

use crate::error::PersistenceError;
use crate::schema::{flow_poses, flows, poses};

/// Fila mapeada de la tabla `poses`.
#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = poses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PoseRow {
    pub id: i32,
    pub name: String,
    pub chakra: String,
    pub difficulty: String,
}

impl TryFrom<PoseRow> for Pose {
    type Error = PersistenceError;

    fn try_from(row: PoseRow) -> Result<Self, Self::Error> {
        Ok(Pose::new(row.id, row.name, row.chakra.parse()?, row.difficulty.parse()?))
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = poses)]
pub struct NewPoseRow<'a> {
    pub name: &'a str,
    pub chakra: &'a str,
    pub difficulty: &'a str,
}

impl<'a> From<&'a NewPose> for NewPoseRow<'a> {
    fn from(p: &'a NewPose) -> Self {
        NewPoseRow { name: p.name(),
                     chakra: p.chakra().as_str(),
                     difficulty: p.difficulty().as_str() }
    }
}

/// Cambios parciales; los `None` no se tocan.
#[derive(AsChangeset, Debug)]
#[diesel(table_name = poses)]
pub struct PoseChangeset<'a> {
    pub name: Option<&'a str>,
    pub chakra: Option<&'a str>,
    pub difficulty: Option<&'a str>,
}

impl<'a> From<&'a PoseUpdate> for PoseChangeset<'a> {
    fn from(u: &'a PoseUpdate) -> Self {
        PoseChangeset { name: u.name.as_deref(),
                        chakra: u.chakra.map(|c| c.as_str()),
                        difficulty: u.difficulty.map(|d| d.as_str()) }
    }
}

/// Fila mapeada de la tabla `flows`. `duration` en minutos.
#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = flows)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FlowRow {
    pub id: i32,
    pub chakra: String,
    pub duration: i32,
    pub difficulty: String,
}

impl TryFrom<FlowRow> for Flow {
    type Error = PersistenceError;

    fn try_from(row: FlowRow) -> Result<Self, Self::Error> {
        let minutes = u32::try_from(row.duration).map_err(|_| {
                          yoga_domain::DomainError::InvalidDuration(row.duration.to_string())
                      })?;
        Ok(Flow::new(row.id, row.chakra.parse()?, minutes, row.difficulty.parse()?))
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = flows)]
pub struct NewFlowRow<'a> {
    pub chakra: &'a str,
    pub duration: i32,
    pub difficulty: &'a str,
}

impl<'a> From<&'a NewFlow> for NewFlowRow<'a> {
    fn from(f: &'a NewFlow) -> Self {
        // ALLOWED_DURATIONS garantiza que entra en i32.
        NewFlowRow { chakra: f.chakra().as_str(),
                     duration: f.duration_minutes() as i32,
                     difficulty: f.difficulty().as_str() }
    }
}

/// Vínculo nuevo de la relación `flow_poses`.
#[derive(Insertable, Debug, Clone, Copy)]
#[diesel(table_name = flow_poses)]
pub struct NewFlowPoseRow {
    pub flow_id: i32,
    pub pose_id: i32,
}

/// Convierte un lote de filas, cortando en la primera inválida.
pub fn into_domain<R, T>(rows: Vec<R>) -> Result<Vec<T>, PersistenceError>
    where T: TryFrom<R, Error = PersistenceError>
{
    rows.into_iter().map(T::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use yoga_domain::{Chakra, Difficulty};

    #[test]
    fn pose_row_round_trips_canonical_labels() {
        let row = PoseRow { id: 1,
                            name: "Bridge Pose".into(),
                            chakra: "Third Eye".into(),
                            difficulty: "Intermediate".into() };
        let pose = Pose::try_from(row).unwrap();
        assert_eq!(pose.chakra(), Chakra::ThirdEye);
        assert_eq!(pose.difficulty(), Difficulty::Intermediate);
    }

    #[test]
    fn invalid_stored_text_is_corrupt() {
        let row = FlowRow { id: 1,
                            chakra: "Root".into(),
                            duration: 30,
                            difficulty: "Hard".into() };
        assert!(matches!(Flow::try_from(row), Err(PersistenceError::Corrupt(_))));
        let negative = FlowRow { id: 2,
                                 chakra: "Root".into(),
                                 duration: -5,
                                 difficulty: "Easy".into() };
        assert!(matches!(Flow::try_from(negative), Err(PersistenceError::Corrupt(_))));
    }

    #[test]
    fn changeset_only_carries_present_fields() {
        let upd = PoseUpdate { difficulty: Some(Difficulty::Advanced),
                               ..Default::default() };
        let cs = PoseChangeset::from(&upd);
        assert_eq!(cs.name, None);
        assert_eq!(cs.chakra, None);
        assert_eq!(cs.difficulty, Some("Advanced"));
    }
}
