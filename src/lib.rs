//! yogaflow: práctica de yoga en la terminal.
//!
//! Une el catálogo SQLite (`yoga-persistence`) con el generador de sesiones
//! (`yoga-core`) detrás de un menú interactivo y de subcomandos `clap`.
//!
//! Módulos:
//! - `app`: contexto compartido (pool, tiempos, Ctrl-C) y ejecución de una práctica.
//! - `menu`: menús interactivos y tablas de listado.
//! - `commands` / `cli`: subcomandos no interactivos.
//! - `render`: dibujo de fases y cuenta regresiva en consola.
//! - `config`, `logging`, `signals`, `errors`: infraestructura.
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod logging;
pub mod menu;
pub mod render;
pub mod signals;

pub use app::{AppContext, Pacing};
pub use config::{AppConfig, CONFIG};
pub use errors::AppError;
