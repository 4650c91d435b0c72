use sqlx::{
    MySql, Pool,
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
};

use crate::{DatabaseError, DatabaseResult};

/// Connections lent out at once. Further requests queue until one is
/// returned.
pub const MAX_CONNECTIONS: u32 = 5;

const DEFAULT_PORT: u16 = 3306;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DatabaseConfig {
    /// Reads `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD` and `DB_NAME`.
    pub fn from_env() -> DatabaseResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DatabaseResult<Self> {
        let port = match lookup("DB_PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|_| DatabaseError::Config(format!("invalid DB_PORT: {}", port)))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
            port,
            user: lookup("DB_USER").unwrap_or_else(|| "root".to_string()),
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            database: lookup("DB_NAME").unwrap_or_else(|| "devi".to_string()),
        })
    }
}

/// Builds the shared pool without connecting. An unreachable server shows
/// up as a failed acquisition on the first request that needs it.
pub fn create_db_pool(config: &DatabaseConfig) -> Pool<MySql> {
    let conn_options = MySqlConnectOptions::new()
        .username(&config.user)
        .password(&config.password)
        .host(&config.host)
        .port(config.port)
        .database(&config.database);

    MySqlPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_lazy_with(conn_options)
}
