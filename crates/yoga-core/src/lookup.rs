//! Capacidad de consulta de poses que el generador consume.

use yoga_domain::{Chakra, Pose};

use crate::errors::SessionError;

/// Provee las poses de un chakra. El backend SQLite la implementa sobre su
/// repositorio; `InMemoryPoseLookup` cubre tests y ejecuciones sin base.
pub trait PoseLookup {
    fn list_poses_by_chakra(&self, chakra: Chakra) -> Result<Vec<Pose>, SessionError>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryPoseLookup {
    pub poses: Vec<Pose>,
}

impl InMemoryPoseLookup {
    pub fn new(poses: Vec<Pose>) -> Self { Self { poses } }
}

impl PoseLookup for InMemoryPoseLookup {
    fn list_poses_by_chakra(&self, chakra: Chakra) -> Result<Vec<Pose>, SessionError> {
        Ok(self.poses.iter().filter(|p| p.chakra() == chakra).cloned().collect())
    }
}

impl<L: PoseLookup + ?Sized> PoseLookup for &L {
    fn list_poses_by_chakra(&self, chakra: Chakra) -> Result<Vec<Pose>, SessionError> {
        (**self).list_poses_by_chakra(chakra)
    }
}
