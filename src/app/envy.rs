use serde::Deserialize;

/// Process configuration, read once from the environment at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    #[serde(default = "default_app_name")]
    pub app_name: String,
    pub port: Option<u16>,

    #[serde(default = "default_database_url")]
    pub database_url: String,
    pub database_max_connections: Option<u32>,

    /// Exposes internal error details in responses and raises the default log level.
    #[serde(default)]
    pub debug: bool,

    pub rate_limit_per_second: Option<u64>,
    pub body_limit_bytes: Option<usize>,
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_app_name() -> String {
    "Wallet Management API".to_string()
}

fn default_database_url() -> String {
    "sqlite://wallet.db".to_string()
}

impl Default for Envy {
    fn default() -> Self {
        Self {
            app_env: default_app_env(),
            app_name: default_app_name(),
            port: None,
            database_url: default_database_url(),
            database_max_connections: None,
            debug: false,
            rate_limit_per_second: None,
            body_limit_bytes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variables_fall_back_to_defaults() {
        let vars: Vec<(String, String)> = Vec::new();
        let envy = envy::from_iter::<_, Envy>(vars).unwrap();

        assert_eq!(envy.app_env, "development");
        assert_eq!(envy.database_url, "sqlite://wallet.db");
        assert!(!envy.debug);
        assert!(envy.port.is_none());
    }

    #[test]
    fn reads_typed_values() {
        let vars = vec![
            ("PORT".to_string(), "9000".to_string()),
            ("DEBUG".to_string(), "true".to_string()),
            ("DATABASE_URL".to_string(), "sqlite::memory:".to_string()),
            ("RATE_LIMIT_PER_SECOND".to_string(), "20".to_string()),
        ];
        let envy = envy::from_iter::<_, Envy>(vars).unwrap();

        assert_eq!(envy.port, Some(9000));
        assert!(envy.debug);
        assert_eq!(envy.database_url, "sqlite::memory:");
        assert_eq!(envy.rate_limit_per_second, Some(20));
    }
}
