mod plan;
mod pool;
mod report;
mod timing;

pub use plan::Session;
pub use pool::CandidatePool;
pub use report::{SessionOutcome, SessionReport};
pub use timing::SessionTiming;
