//! Errores de persistencia.
//! Mapea errores de Diesel / conexión a variantes semánticas del dominio de persistencia.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;
use yoga_core::SessionError;
use yoga_domain::DomainError;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("unique violation: {0}")]
    UniqueViolation(String),
    #[error("check violation: {0}")]
    CheckViolation(String),
    #[error("foreign key violation: {0}")]
    ForeignKeyViolation(String),
    #[error("not found")]
    NotFound,
    #[error("database busy: {0}")]
    Busy(String),
    #[error("transient IO / connection pool error: {0}")]
    TransientIo(String),
    /// Fila con texto que no corresponde a un valor de dominio válido.
    #[error("corrupt row: {0}")]
    Corrupt(#[from] DomainError),
    /// `seed_all` sobre una base con datos y sin reset.
    #[error("database already contains {0} poses; reset before seeding again")]
    AlreadySeeded(i64),
    #[error("unknown database error: {0}")]
    Unknown(String),
}

impl From<DieselError> for PersistenceError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => Self::NotFound,
            DieselError::DatabaseError(kind, info) => {
                let msg = info.message().to_string();
                match kind {
                    DatabaseErrorKind::UniqueViolation => Self::UniqueViolation(msg),
                    DatabaseErrorKind::CheckViolation => Self::CheckViolation(msg),
                    DatabaseErrorKind::ForeignKeyViolation => Self::ForeignKeyViolation(msg),
                    // SQLite reporta el lock como error genérico; se detecta por texto.
                    _ if is_busy_message(&msg) => Self::Busy(msg),
                    _ => classify_constraint_message(msg, kind),
                }
            }
            DieselError::DeserializationError(e) => Self::Unknown(format!("deser: {e}")),
            DieselError::SerializationError(e) => Self::Unknown(format!("ser: {e}")),
            DieselError::AlreadyInTransaction => Self::Unknown("already in transaction".into()),
            DieselError::RollbackErrorOnCommit { rollback_error, commit_error } => {
                Self::Unknown(format!("rollback={rollback_error}; commit={commit_error}"))
            }
            DieselError::BrokenTransactionManager => Self::TransientIo("broken transaction manager".into()),
            DieselError::QueryBuilderError(e) => Self::Unknown(format!("query builder: {e}")),
            DieselError::InvalidCString(e) => Self::Unknown(format!("invalid cstring: {e}")),
            DieselError::RollbackTransaction => Self::Unknown("rollback transaction".into()),
            DieselError::NotInTransaction => Self::Unknown("not in transaction".into()),
            other => Self::Unknown(format!("unhandled diesel error: {other:?}")),
        }
    }
}

/// Algunas versiones reportan las violaciones de constraint sin código extendido.
fn classify_constraint_message(msg: String, kind: DatabaseErrorKind) -> PersistenceError {
    let m = msg.to_lowercase();
    if m.contains("check constraint") {
        PersistenceError::CheckViolation(msg)
    } else if m.contains("foreign key constraint") {
        PersistenceError::ForeignKeyViolation(msg)
    } else if m.contains("unique constraint") {
        PersistenceError::UniqueViolation(msg)
    } else {
        PersistenceError::Unknown(format!("db error kind {kind:?}: {msg}"))
    }
}

fn is_busy_message(msg: &str) -> bool {
    let m = msg.to_lowercase();
    m.contains("database is locked") || m.contains("database table is locked") || m.contains("busy")
}

/// El generador sólo distingue "no hay poses suficientes" de "falló la consulta".
impl From<PersistenceError> for SessionError {
    fn from(err: PersistenceError) -> Self { SessionError::Lookup(err.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_semantic_variant() {
        assert!(matches!(PersistenceError::from(DieselError::NotFound), PersistenceError::NotFound));
    }

    #[test]
    fn corrupt_rows_wrap_domain_errors() {
        let err: PersistenceError = DomainError::InvalidChakra("Spleen".into()).into();
        assert!(err.to_string().starts_with("corrupt row: unknown chakra 'Spleen'"));
    }

    #[test]
    fn lookup_error_keeps_message() {
        let err: SessionError = PersistenceError::Busy("database is locked".into()).into();
        assert_eq!(err, SessionError::Lookup("database busy: database is locked".into()));
    }
}
