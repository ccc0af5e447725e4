//! Constantes del generador.

/// Mínimo de poses del chakra pedido para poder arrancar una sesión.
pub const MIN_POSES_PER_SESSION: usize = 3;

/// Cuenta regresiva de cada respiración de apertura (inhala / exhala).
pub const DEFAULT_BREATH_SECONDS: u64 = 5;
/// Tiempo sostenido de cada pose.
pub const DEFAULT_POSE_SECONDS: u64 = 60;
/// Pausa entre poses; forma parte del costo por pose.
pub const DEFAULT_TRANSITION_SECONDS: u64 = 10;
/// Savasana de cierre.
pub const DEFAULT_REST_SECONDS: u64 = 60;
/// Duración real de una unidad de tiempo.
pub const DEFAULT_TICK_MILLIS: u64 = 1000;

pub const SAVASANA_LABEL: &str = "Savasana: A time to honor our bodies, minds, and spirits with well-deserved rest.";
pub const COMPLETION_MESSAGE: &str = "You have completed your practice!!";
pub const CLOSING_WORD: &str = "Namaste";
