use thiserror::Error;
use yoga_core::SessionError;
use yoga_domain::DomainError;
use yoga_persistence::PersistenceError;

/// Código de salida estándar para SIGINT.
pub const EXIT_INTERRUPTED: u8 = 130;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Persistence(#[from] PersistenceError),
    #[error("{0}")]
    Session(#[from] SessionError),
    #[error("{0}")]
    Domain(#[from] DomainError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("signal handler error: {0}")]
    Signal(#[from] ctrlc::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("Flow not found: {0}")]
    FlowNotFound(i32),
    /// Se cerró la entrada estándar (EOF) mientras se esperaba una respuesta.
    #[error("input closed")]
    InputClosed,
    #[error("interrupted")]
    Interrupted,
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Interrupted => EXIT_INTERRUPTED,
            Self::InvalidArgs(_) => 2,
            _ => 1,
        }
    }
}
