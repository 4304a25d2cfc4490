//! Startup configuration, read once from the environment in `main` and passed
//! into the store bootstrap. Core components never look up env vars themselves.

use std::env;
use std::time::Duration;

use sqlx::postgres::PgConnectOptions;

use crate::error::ConfigError;

const DEFAULT_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_MAX_LIFETIME_SECS: u64 = 300;
const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 60;

/// Database connection settings plus pool tuning. The tuning values are
/// operational knobs, not part of the request-handling contract.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub max_lifetime: Duration,
    pub idle_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_port: u16,
    pub db: DbConfig,
}

impl DbConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: require_var("DB_HOST")?,
            port: parse_var("DB_PORT")?,
            username: require_var("DB_USERNAME")?,
            password: require_var("DB_PASSWORD")?,
            name: require_var("DB_NAME")?,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            max_lifetime: Duration::from_secs(DEFAULT_MAX_LIFETIME_SECS),
            idle_timeout: Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS),
        })
    }

    /// Options for the service database. Built field by field, so credentials
    /// need no URL escaping.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.name)
    }

    /// Options for the maintenance `postgres` database, used only to create the
    /// service database when it does not exist yet.
    pub fn admin_connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database("postgres")
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            listen_port: parse_var("PORT")?,
            db: DbConfig::from_env()?,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

fn parse_var<T: std::str::FromStr>(name: &'static str) -> Result<T, ConfigError> {
    let raw = require_var(name)?;
    raw.parse()
        .map_err(|_| ConfigError::InvalidVar(name, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env manipulation stays inside one test so parallel tests never race on
    // the same variables.
    #[test]
    fn from_env_reads_and_validates_settings() {
        env::set_var("DB_HOST", "localhost");
        env::set_var("DB_PORT", "5432");
        env::set_var("DB_USERNAME", "app");
        env::set_var("DB_PASSWORD", "p@ss word");
        env::set_var("DB_NAME", "users_db");
        env::set_var("PORT", "8080");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.listen_port, 8080);
        assert_eq!(config.db.host, "localhost");
        assert_eq!(config.db.port, 5432);
        assert_eq!(config.db.name, "users_db");
        assert_eq!(config.db.max_connections, 100);
        assert_eq!(config.db.max_lifetime, Duration::from_secs(300));
        assert_eq!(config.db.idle_timeout, Duration::from_secs(60));

        env::set_var("DB_PORT", "not-a-port");
        let err = DbConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar("DB_PORT", _)));

        env::remove_var("DB_HOST");
        let err = DbConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("DB_HOST")));
    }
}
