//! Inicialización del subscriber de tracing para el binario.
//!
//! Las librerías del workspace emiten por la fachada `log`; el subscriber
//! instala el puente `tracing-log` y escribe en stderr para no pisar la
//! cuenta regresiva que se dibuja en stdout.
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_TRACING: Once = Once::new();

/// Instala el subscriber global una única vez. Directivas inválidas caen
/// al filtro por defecto.
pub fn init_tracing(filter: &str) {
    INIT_TRACING.call_once(|| {
                    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| {
                                                               EnvFilter::new(crate::config::DEFAULT_LOG_FILTER)
                                                           });
                    let _ = tracing_subscriber::fmt().with_env_filter(filter)
                                                     .with_target(true)
                                                     .with_writer(std::io::stderr)
                                                     .try_init();
                    log::debug!("logging:init done");
                });
}
