use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Bandera de cancelación compartida con el handler de señales.
/// El runner la consulta antes de cada tick.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self { Self::default() }

    pub fn cancel(&self) { self.0.store(true, Ordering::SeqCst); }

    pub fn is_cancelled(&self) -> bool { self.0.load(Ordering::SeqCst) }

    /// Rearma la bandera para la próxima sesión.
    pub fn reset(&self) { self.0.store(false, Ordering::SeqCst); }
}
