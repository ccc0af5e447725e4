use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use yoga_domain::Chakra;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionOutcome {
    Completed,
    Cancelled,
}

/// Resumen de una sesión ejecutada. No se persiste; lo consume la capa de
/// presentación para el cierre y para el log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    pub session_id: Uuid,
    pub chakra: Chakra,
    pub target_seconds: u64,
    /// Valor final del acumulador (costo por pose * poses ejecutadas).
    pub elapsed_seconds: u64,
    /// Nombres de las poses en el orden en que se practicaron.
    pub poses: Vec<String>,
    /// Fases completadas hasta su tick 0.
    pub phases_completed: usize,
    pub outcome: SessionOutcome,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl SessionReport {
    pub fn is_completed(&self) -> bool { self.outcome == SessionOutcome::Completed }
}
