//! Environment configuration for the feed service.

use std::env;

/// Database URL used when `DATABASE_URL` is not set. The `rwc` mode creates
/// the file on first boot so a fresh checkout can start without setup.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:carefinder.db?mode=rwc";

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default upper bound on pooled database connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Runtime configuration read from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Provider directory database URL.
    pub database_url: String,
    /// HTTP listen port.
    pub port: u16,
    /// Connection pool bound; requests beyond it queue for a connection.
    pub max_connections: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            port: DEFAULT_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl ServiceConfig {
    /// Read configuration from the environment.
    ///
    /// - `DATABASE_URL` - provider database (default `sqlite:carefinder.db?mode=rwc`)
    /// - `SERVICE_PORT` - HTTP port (default 8080)
    /// - `DB_MAX_CONNECTIONS` - pool bound (default 5)
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            port: env::var("SERVICE_PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.port),
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.max_connections),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }
}
