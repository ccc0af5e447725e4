use thiserror::Error;

/// Errores de validación del dominio (entradas de usuario o filas corruptas).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown chakra '{0}' (expected Root, Sacral, Solar Plexus, Heart, Throat, Third Eye or Crown)")]
    InvalidChakra(String),
    #[error("unknown difficulty '{0}' (expected Easy, Intermediate or Advanced)")]
    InvalidDifficulty(String),
    #[error("invalid duration '{0}' (expected 10, 20, 30, 40, 50 or 60 minutes)")]
    InvalidDuration(String),
    #[error("{0}")]
    Validation(String),
}
