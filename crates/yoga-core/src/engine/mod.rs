//! Ejecución en tiempo real de una sesión.
//!
//! `SessionRunner` consume las fases de una `Session` en orden, bloqueando en
//! cada tick de la cuenta regresiva a través de un `Pacer` y notificando a un
//! `PhaseSink` (la consola, o un registro en memoria en tests).

mod cancel;
mod pacer;
mod runner;
mod sink;

pub use cancel::CancelFlag;
pub use pacer::{InstantPacer, Pacer, ThreadPacer};
pub use runner::SessionRunner;
pub use sink::{PhaseSink, RecordingSink, SinkRecord};
