//! Server configuration from environment variables.

use crate::error::ConfigError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://cafes.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_API_KEY: &str = "TopSecretAPIKey";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: String,
    /// Shared secret for deletes. From `CAFE_API_KEY`.
    pub delete_api_key: String,
    pub max_connections: u32,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; unset variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let delete_api_key = lookup("CAFE_API_KEY").unwrap_or_else(|| DEFAULT_API_KEY.into());
        if delete_api_key.is_empty() {
            return Err(ConfigError::Invalid {
                name: "CAFE_API_KEY",
                reason: "must not be empty".into(),
            });
        }
        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "DATABASE_MAX_CONNECTIONS",
                        reason: format!("expected a positive integer, got '{}'", raw),
                    })
                }
            },
        };
        Ok(Self {
            database_url,
            bind_addr,
            delete_api_key,
            max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.delete_api_key, DEFAULT_API_KEY);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn overrides_from_source() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("CAFE_API_KEY", "s3cret"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
        ]))
        .unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.delete_api_key, "s3cret");
        assert_eq!(config.max_connections, 2);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(ServerConfig::from_lookup(lookup(&[("CAFE_API_KEY", "")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("DATABASE_MAX_CONNECTIONS", "zero")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("DATABASE_MAX_CONNECTIONS", "0")])).is_err());
    }
}
