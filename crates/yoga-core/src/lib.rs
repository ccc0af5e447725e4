//! yoga-core: generador de sesiones de práctica.
//!
//! Dado un chakra y una duración objetivo, arma una sesión efímera con las
//! poses de ese chakra y la recorre como una secuencia fija de fases con
//! cuenta regresiva: dos respiraciones de apertura, poses sin repetición
//! hasta cubrir la duración (o agotar el pool) y un Savasana de cierre.
//!
//! Módulos:
//! - `session`: pool de candidatas, tiempos y el iterador de fases (`Session`).
//! - `phase`: tipos de fase y la cuenta regresiva.
//! - `engine`: ejecución en tiempo real (`SessionRunner`, `Pacer`, `PhaseSink`).
//! - `lookup`: capacidad externa de consulta de poses por chakra.
pub mod constants;
pub mod engine;
pub mod errors;
pub mod lookup;
pub mod phase;
pub mod session;

pub use engine::{CancelFlag, InstantPacer, Pacer, PhaseSink, RecordingSink, SessionRunner, SinkRecord, ThreadPacer};
pub use errors::SessionError;
pub use lookup::{InMemoryPoseLookup, PoseLookup};
pub use phase::{Countdown, PhaseEvent, PhaseKind};
pub use session::{CandidatePool, Session, SessionOutcome, SessionReport, SessionTiming};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Punto de entrada de generación con tiempos de producción y RNG del sistema.
///
/// Falla con `SessionError::InsufficientPoses` antes de producir cualquier
/// fase si el chakra tiene menos de `MIN_POSES_PER_SESSION` poses.
pub fn generate_flow<L>(lookup: &L, chakra: &str, duration_minutes: u32) -> Result<Session<StdRng>, SessionError>
    where L: PoseLookup + ?Sized
{
    generate_flow_with(lookup,
                       chakra,
                       duration_minutes,
                       SessionTiming::default(),
                       StdRng::from_entropy())
}

/// Variante con tiempos y RNG inyectados (tests, modo rápido).
pub fn generate_flow_with<L, R>(lookup: &L,
                                chakra: &str,
                                duration_minutes: u32,
                                timing: SessionTiming,
                                rng: R)
                                -> Result<Session<R>, SessionError>
    where L: PoseLookup + ?Sized,
          R: rand::Rng
{
    Session::prepare(lookup, chakra, u64::from(duration_minutes) * 60, timing, rng)
}
