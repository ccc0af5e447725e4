use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{DEFAULT_BREATH_SECONDS, DEFAULT_POSE_SECONDS, DEFAULT_REST_SECONDS, DEFAULT_TICK_MILLIS,
                       DEFAULT_TRANSITION_SECONDS};

/// Tiempos de cada tipo de fase, en unidades de tiempo (segundos por defecto).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTiming {
    pub breath_seconds: u64,
    pub pose_seconds: u64,
    pub transition_seconds: u64,
    pub rest_seconds: u64,
    /// Duración real de una unidad; sólo la usa el pacer.
    pub tick_millis: u64,
}

impl Default for SessionTiming {
    fn default() -> Self {
        Self { breath_seconds: DEFAULT_BREATH_SECONDS,
               pose_seconds: DEFAULT_POSE_SECONDS,
               transition_seconds: DEFAULT_TRANSITION_SECONDS,
               rest_seconds: DEFAULT_REST_SECONDS,
               tick_millis: DEFAULT_TICK_MILLIS }
    }
}

impl SessionTiming {
    /// Costo que cada pose suma al acumulador: pose + pausa de transición.
    /// Satura en `u64::MAX`; los valores vienen del entorno sin tope.
    pub fn per_pose_cost(&self) -> u64 { self.pose_seconds.saturating_add(self.transition_seconds) }

    pub fn tick(&self) -> Duration { Duration::from_millis(self.tick_millis) }
}
