//! Wrapper para correr migraciones embebidas.
//!
//! Las migraciones viven en `migrations/` dentro de este crate y se embeben
//! en el binario; al construir el pool se ejecutan una vez.

use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::debug;

use crate::error::PersistenceError;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub fn run_pending_migrations(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let applied = conn.run_pending_migrations(MIGRATIONS)
                      .map_err(|e| PersistenceError::Unknown(format!("migration error: {e}")))?;
    debug!("migrations:applied count={}", applied.len());
    Ok(())
}

/// Revierte todas las migraciones (DROP de las tablas) y las vuelve a
/// aplicar. Deja las tablas vacías.
pub fn reset_schema(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let reverted = conn.revert_all_migrations(MIGRATIONS)
                       .map_err(|e| PersistenceError::Unknown(format!("migration revert error: {e}")))?;
    debug!("migrations:reverted count={}", reverted.len());
    run_pending_migrations(conn)
}
