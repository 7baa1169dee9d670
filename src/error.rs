//! Error types for borealis-db

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Invalid connection URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("File system error")]
    FsError(#[from] std::io::Error),

    #[error("Logging setup error: {0}")]
    LoggingError(String),
}

pub type Result<T> = std::result::Result<T, DbError>;
