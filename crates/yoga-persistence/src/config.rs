//! Carga de configuración de conexión desde variables de entorno.
//! Usa convención `DATABASE_URL` y parámetros opcionales de pool.

use dotenvy::dotenv;
use once_cell::sync::Lazy;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Archivo por defecto, relativo al directorio de trabajo.
pub const DEFAULT_DATABASE_URL: &str = "yoga.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// Ruta del archivo SQLite (o `:memory:`).
    pub url: String,
    pub max_connections: u32,
    pub busy_timeout_ms: u32,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self { url: DEFAULT_DATABASE_URL.to_string(),
               max_connections: 4,
               busy_timeout_ms: 5000 }
    }
}

impl DbConfig {
    /// Construye la configuración a partir de una función de consulta.
    /// Valores ausentes, vacíos o que no parsean caen al default.
    pub fn from_vars<F>(get: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let defaults = Self::default();
        let url = get("DATABASE_URL").filter(|v| !v.trim().is_empty())
                                     .unwrap_or(defaults.url);
        let max_connections = get("DATABASE_MAX_CONNECTIONS").and_then(|v| v.trim().parse().ok())
                                                             .unwrap_or(defaults.max_connections);
        let busy_timeout_ms = get("DATABASE_BUSY_TIMEOUT_MS").and_then(|v| v.trim().parse().ok())
                                                             .unwrap_or(defaults.busy_timeout_ms);
        Self { url,
               max_connections,
               busy_timeout_ms }
    }

    /// Reemplaza la URL (p.ej. desde `--database`).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() { Lazy::force(&DOTENV_LOADED); }
