//! yoga-persistence
//!
//! Backend SQLite (Diesel + r2d2) para poses, flows y la relación flow↔pose.
//! Reemplaza el handle global de la versión anterior por un proveedor de
//! conexiones explícito: cada operación toma una conexión del pool y la
//! devuelve al salir, por cualquier camino.
//!
//! Módulos:
//! - `sqlite`: pool, proveedor de conexiones y repositorios.
//! - `migrations`: runner embebido de migraciones Diesel.
//! - `config`: carga de configuración desde .env.
//! - `schema`: tablas Diesel declaradas para compilar queries.
//! - `models`: filas Diesel y su conversión a tipos de dominio.
//! - `seed`: datos iniciales (49 poses, 7 flows) y reset de tablas.

pub mod config;
pub mod error;
pub mod migrations;
pub mod models;
pub mod schema;
pub mod seed;
pub mod sqlite;

pub use config::init_dotenv;
pub use error::PersistenceError;
pub use sqlite::{build_pool, ConnectionProvider, PoolProvider, SqliteFlowPoseRepository,
                 SqliteFlowRepository, SqlitePool, SqlitePoseRepository};
