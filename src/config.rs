use std::path::PathBuf;

use club_persistence_mariadb::{DatabaseConfig, DatabaseError};
use thiserror::Error;

const DEFAULT_SECRET_KEY: &str = "change_me";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("database configuration: {0}")]
    Database(#[from] DatabaseError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogConfig {
    /// Rolling log file. Only stderr is used when unset.
    pub file_path: Option<String>,
    pub archive_pattern: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub secret_key: String,
    pub bind_addr: String,
    pub static_dir: PathBuf,
    pub database: DatabaseConfig,
    pub log: LogConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database = DatabaseConfig::from_lookup(&lookup)?;

        let file_path = lookup("LOG_FILE_PATH").filter(|v| !v.is_empty());
        let archive_pattern = lookup("LOG_ARCHIVE_PATTERN").unwrap_or_else(|| {
            format!("{}.{{}}.gz", file_path.as_deref().unwrap_or("club-server.log"))
        });

        Ok(Self {
            secret_key: lookup("FLASK_SECRET_KEY")
                .unwrap_or_else(|| DEFAULT_SECRET_KEY.to_string()),
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            static_dir: PathBuf::from(
                lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            ),
            database,
            log: LogConfig {
                file_path,
                archive_pattern,
            },
        })
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<&str, &str> = vars.iter().copied().collect();
        Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.secret_key, "change_me");
        assert!(config.uses_default_secret());
        assert_eq!(config.bind_addr, "127.0.0.1:5000");
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.database.database, "devi");
        assert_eq!(config.log.file_path, None);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("FLASK_SECRET_KEY", "s3cret"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("STATIC_DIR", "/srv/club/static"),
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "3307"),
            ("LOG_FILE_PATH", "/var/log/club.log"),
        ])
        .unwrap();
        assert!(!config.uses_default_secret());
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.static_dir, PathBuf::from("/srv/club/static"));
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 3307);
        assert_eq!(config.log.file_path.as_deref(), Some("/var/log/club.log"));
        assert_eq!(config.log.archive_pattern, "/var/log/club.log.{}.gz");
    }

    #[test]
    fn test_explicit_archive_pattern() {
        let config = config_from(&[
            ("LOG_FILE_PATH", "club.log"),
            ("LOG_ARCHIVE_PATTERN", "archive/club.{}.log.gz"),
        ])
        .unwrap();
        assert_eq!(config.log.archive_pattern, "archive/club.{}.log.gz");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(matches!(
            config_from(&[("DB_PORT", "not-a-port")]),
            Err(ConfigError::Database(_))
        ));
    }
}
