//! Implementaciones SQLite (Diesel) de los repositorios.
//!
//! Objetivo general del módulo:
//! - Reemplazar el handle global de base de datos por un proveedor de
//!   conexiones explícito (`ConnectionProvider`), inyectado en cada
//!   repositorio.
//! - Adquisición acotada: cada operación hace checkout de una conexión del
//!   pool y la devuelve al terminar (Drop de `PooledConnection`), también en
//!   los caminos de error.
//! - Reintento con backoff corto ante `database is locked`.

mod flow_poses;
mod flows;
mod poses;

pub use flow_poses::SqliteFlowPoseRepository;
pub use flows::SqliteFlowRepository;
pub use poses::SqlitePoseRepository;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection};
use diesel::sqlite::SqliteConnection;
use log::{debug, warn};

use crate::config::DbConfig;
use crate::error::PersistenceError;
use crate::migrations::run_pending_migrations;

/// Alias de tipo para el pool r2d2 de conexiones SQLite.
///
/// Notas operativas:
/// - Cada conexión nueva activa `foreign_keys` y `busy_timeout`.
/// - Al construirlo, se corre automáticamente el set de migraciones pendientes
///   (una sola vez).
pub type SqlitePool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub type PooledSqlite = r2d2::PooledConnection<ConnectionManager<SqliteConnection>>;

/// Proveedor abstracto de conexiones.
///
/// Este trait permite:
/// - Inyectar un pool real (producción/tests de integración).
/// - Compartir un mismo pool entre repositorios (`&P` también es proveedor).
///
/// Contrato:
/// - Debe devolver una conexión válida o `PersistenceError::TransientIo`.
pub trait ConnectionProvider {
    fn connection(&self) -> Result<PooledSqlite, PersistenceError>;
}

/// Implementación concreta de `ConnectionProvider` respaldada por un `SqlitePool`.
#[derive(Clone)]
pub struct PoolProvider {
    pub pool: SqlitePool,
}

impl PoolProvider {
    pub fn new(pool: SqlitePool) -> Self { Self { pool } }
}

impl ConnectionProvider for PoolProvider {
    fn connection(&self) -> Result<PooledSqlite, PersistenceError> {
        self.pool
            .get()
            .map_err(|e| PersistenceError::TransientIo(format!("pool error: {e}")))
    }
}

impl<P: ConnectionProvider + ?Sized> ConnectionProvider for &P {
    fn connection(&self) -> Result<PooledSqlite, PersistenceError> { (**self).connection() }
}

/// PRAGMAs por conexión: SQLite no persiste `foreign_keys` ni `busy_timeout`.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas {
    busy_timeout_ms: u32,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(&format!("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
                                    self.busy_timeout_ms))
            .map_err(r2d2::Error::QueryError)
    }
}

/// Determina si un error es transitorio (recomendado reintentar con backoff).
fn is_retryable(e: &PersistenceError) -> bool {
    matches!(e, PersistenceError::Busy(_) | PersistenceError::TransientIo(_))
}

/// Retry simple con backoff lineal muy pequeño (hasta 3 reintentos).
///
/// Política:
/// - Intentos: 1 + 3 reintentos.
/// - Backoff: 15ms, 30ms, 45ms.
/// - Logs: se emite `warn!` por intento.
pub(crate) fn with_retry<F, T>(mut f: F) -> Result<T, PersistenceError>
    where F: FnMut() -> Result<T, PersistenceError>
{
    let mut attempts = 0;
    loop {
        match f() {
            Err(e) if is_retryable(&e) && attempts < 3 => {
                let delay_ms = 15 * ((attempts + 1) as u64);
                warn!("retryable error (attempt {}): {:?} -> sleeping {}ms",
                      attempts + 1,
                      e,
                      delay_ms);
                std::thread::sleep(std::time::Duration::from_millis(delay_ms));
                attempts += 1;
            }
            r => return r,
        }
    }
}

/// Construye un pool SQLite r2d2 para `database_url`.
///
/// Comportamiento:
/// - `max_size` 0 se ajusta a 1; `:memory:` usa siempre 1.
/// - Ejecuta migraciones inmediatamente tras el primer `get()`.
/// - Devuelve `PersistenceError::TransientIo` ante errores del pool/manager.
pub fn build_pool(database_url: &str, max_size: u32, busy_timeout_ms: u32) -> Result<SqlitePool, PersistenceError> {
    // Cada conexión a `:memory:` es una base distinta: se fuerza una sola.
    let max_size = if database_url == ":memory:" { 1 } else { max_size.max(1) };
    debug!("build_pool url={database_url} max_size={max_size}");
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = r2d2::Pool::builder().max_size(max_size)
                                    .connection_customizer(Box::new(SqlitePragmas { busy_timeout_ms }))
                                    .build(manager)
                                    .map_err(|e| PersistenceError::TransientIo(format!("pool build: {e}")))?;
    {
        let mut conn = pool.get()
                           .map_err(|e| PersistenceError::TransientIo(format!("pool get for migrations: {e}")))?;
        run_pending_migrations(&mut conn)?;
    }
    Ok(pool)
}

/// Construye el pool a partir de una `DbConfig`.
pub fn build_pool_from_config(cfg: &DbConfig) -> Result<SqlitePool, PersistenceError> {
    build_pool(&cfg.url, cfg.max_connections, cfg.busy_timeout_ms)
}
