//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) una sola vez y expone una estructura
//! inmutable (`CONFIG`) con la base de datos, los tiempos de sesión y el
//! filtro de logging.
use once_cell::sync::Lazy;
use std::env;
use yoga_core::SessionTiming;
use yoga_persistence::config::DbConfig;

/// Filtro de logging cuando `YOGAFLOW_LOG` no está definido.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Parámetros de conexión SQLite.
    pub database: DbConfig,
    /// Duración de cada tipo de fase y de la unidad de tiempo.
    pub timing: SessionTiming,
    /// Directiva `EnvFilter` para el subscriber de tracing.
    pub log_filter: String,
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

impl AppConfig {
    /// Lee el entorno del proceso (previa carga de `.env`).
    pub fn from_env() -> Self {
        yoga_persistence::init_dotenv();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Construye la configuración a partir de una función de consulta.
    /// Valores ausentes o que no parsean caen al default.
    pub fn from_vars<F>(get: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let database = DbConfig::from_vars(&get);

        let t = SessionTiming::default();
        let timing = SessionTiming { breath_seconds: parsed(&get, "YOGAFLOW_BREATH_SECONDS").unwrap_or(t.breath_seconds),
                                     pose_seconds: parsed(&get, "YOGAFLOW_POSE_SECONDS").unwrap_or(t.pose_seconds),
                                     transition_seconds: parsed(&get, "YOGAFLOW_TRANSITION_SECONDS")
                                         .unwrap_or(t.transition_seconds),
                                     rest_seconds: parsed(&get, "YOGAFLOW_REST_SECONDS").unwrap_or(t.rest_seconds),
                                     tick_millis: parsed(&get, "YOGAFLOW_TICK_MILLIS").unwrap_or(t.tick_millis) };

        let log_filter = get("YOGAFLOW_LOG").filter(|v| !v.trim().is_empty())
                                            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Self { database,
               timing,
               log_filter }
    }

    /// Aplica `--database` sobre lo leído del entorno.
    pub fn with_database_url(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url {
            self.database = self.database.with_url(url);
        }
        self
    }
}

fn parsed<F, T>(get: &F, key: &str) -> Option<T>
    where F: Fn(&str) -> Option<String>,
          T: std::str::FromStr
{
    get(key).and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let cfg = AppConfig::from_vars(|_| None);
        assert_eq!(cfg.database, DbConfig::default());
        assert_eq!(cfg.timing, SessionTiming::default());
        assert_eq!(cfg.log_filter, "warn");
    }

    #[test]
    fn timing_overrides_are_read() {
        let cfg = AppConfig::from_vars(lookup(&[("YOGAFLOW_POSE_SECONDS", "3"),
                                                ("YOGAFLOW_TRANSITION_SECONDS", "1"),
                                                ("YOGAFLOW_TICK_MILLIS", " 10 "),
                                                ("YOGAFLOW_LOG", "debug")]));
        assert_eq!(cfg.timing.pose_seconds, 3);
        assert_eq!(cfg.timing.per_pose_cost(), 4);
        assert_eq!(cfg.timing.tick_millis, 10);
        assert_eq!(cfg.timing.breath_seconds, 5);
        assert_eq!(cfg.log_filter, "debug");
    }

    #[test]
    fn unparsable_values_fall_back() {
        let cfg = AppConfig::from_vars(lookup(&[("DATABASE_MAX_CONNECTIONS", "many"),
                                                ("YOGAFLOW_REST_SECONDS", "-5")]));
        assert_eq!(cfg.database.max_connections, 4);
        assert_eq!(cfg.timing.rest_seconds, 60);
    }

    #[test]
    fn database_flag_overrides_env() {
        let cfg = AppConfig::from_vars(lookup(&[("DATABASE_URL", "env.db")])).with_database_url(Some("flag.db"));
        assert_eq!(cfg.database.url, "flag.db");
        let cfg = AppConfig::from_vars(lookup(&[("DATABASE_URL", "env.db")])).with_database_url(None);
        assert_eq!(cfg.database.url, "env.db");
    }
}
