//! Server configuration.

use std::env;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Database URL.
    pub database_url: String,
    /// JWT secret.
    pub jwt_secret: String,
    /// JWT expiration in hours.
    pub jwt_expiration_hours: u64,
    /// Whether to seed the initial item catalog when the store is empty.
    pub seed_catalog: bool,
    /// Log level.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt_secret = env::var("ENXOVAL_JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("ENXOVAL_JWT_SECRET is required"))?;

        Ok(Self {
            host: env::var("ENXOVAL_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("ENXOVAL_SERVER_PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .unwrap_or(3001),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:enxoval.db?mode=rwc".to_string()),
            jwt_secret,
            jwt_expiration_hours: env::var("ENXOVAL_JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "168".to_string())
                .parse()
                .unwrap_or(168),
            seed_catalog: env::var("ENXOVAL_SEED")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(true),
            log_level: env::var("ENXOVAL_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_required_and_defaults() {
        // SAFETY: Tests run serially or in isolation
        unsafe {
            env::remove_var("ENXOVAL_JWT_SECRET");
        }
        assert!(Config::from_env().is_err());

        // SAFETY: Tests run serially or in isolation
        unsafe {
            env::set_var("ENXOVAL_JWT_SECRET", "test-secret");
            env::remove_var("ENXOVAL_SERVER_PORT");
            env::remove_var("ENXOVAL_SEED");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 3001);
        assert_eq!(config.jwt_expiration_hours, 168);
        assert!(config.seed_catalog);
    }
}
