mod countdown;
mod types;

pub use countdown::Countdown;
pub use types::{PhaseEvent, PhaseKind};
