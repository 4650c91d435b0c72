use club_server_domain::ServiceError;
use thiserror::Error;

pub mod admins;
pub mod contacts;
pub mod players;
pub mod pool;
pub mod query;
pub mod registrations;
pub mod row;
pub mod schema;

pub use pool::{DatabaseConfig, create_db_pool};
pub use query::QueryHelper;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("database unavailable: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),

    #[error("column `{0}` missing from result row")]
    MissingColumn(String),

    #[error("column `{column}` holds {found}, expected {expected}")]
    UnexpectedType {
        column: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid database configuration: {0}")]
    Config(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;

impl From<DatabaseError> for ServiceError {
    fn from(e: DatabaseError) -> Self {
        ServiceError::Internal(e.to_string())
    }
}
