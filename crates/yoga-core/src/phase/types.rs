use serde::{Deserialize, Serialize};
use std::fmt;
use yoga_domain::Pose;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    Breath,
    Pose,
    Rest,
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        PhaseKind::Breath => "Breath",
                        PhaseKind::Pose => "Pose",
                        PhaseKind::Rest => "Rest",
                    })
    }
}

/// Un paso discreto y temporizado de la sesión.
///
/// - `index`: posición 0-based dentro de la sesión.
/// - `label`: texto a mostrar al iniciar la fase.
/// - `countdown_seconds`: ticks de la cuenta regresiva (desde N hasta 0).
/// - `pose`: sólo para fases `Pose`; la pose elegida del pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseEvent {
    pub index: usize,
    pub kind: PhaseKind,
    pub label: String,
    pub countdown_seconds: u64,
    pub pose: Option<Pose>,
}

impl PhaseEvent {
    /// Texto de la línea de cuenta regresiva para el tick `remaining`.
    pub fn remaining_line(&self, remaining: u64) -> String {
        match (&self.kind, &self.pose) {
            (PhaseKind::Pose, Some(p)) => format!("{} time remaining: {remaining} seconds ", p.name()),
            (PhaseKind::Breath, _) => format!("Breathe... {remaining} seconds "),
            _ => format!("Time remaining: {remaining} seconds "),
        }
    }
}
