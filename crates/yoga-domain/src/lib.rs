// yoga-domain library entry point
pub mod chakra;
pub mod difficulty;
pub mod error;
pub mod flow;
pub mod pose;

pub use chakra::Chakra;
pub use difficulty::Difficulty;
pub use error::DomainError;
pub use flow::{Flow, NewFlow, ALLOWED_DURATIONS};
pub use pose::{NewPose, Pose, PoseUpdate};
