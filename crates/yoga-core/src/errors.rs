//! Errores del generador de sesiones.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum SessionError {
    /// El pool del chakra pedido no alcanza el mínimo. Incluye chakras
    /// desconocidos y tablas vacías. No se reintenta: hay que elegir otro flow.
    #[error("there are not enough poses matching the chakra '{chakra}' (found {found}, need at least {required})")]
    InsufficientPoses { chakra: String, found: usize, required: usize },
    /// Falla del colaborador que provee las poses.
    #[error("pose lookup failed: {0}")]
    Lookup(String),
}

impl SessionError {
    pub fn is_insufficient_poses(&self) -> bool {
        matches!(self, SessionError::InsufficientPoses { .. })
    }
}
