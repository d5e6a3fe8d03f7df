use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriTabulaError {
    #[error("Error from postgres: `{0}`")]
    PostgresError(#[from] tokio_postgres::Error),

    #[error("Error from postgres: `{query}` when executing query: `{source}`")]
    PostgresErrorWithQuery {
        query: String,
        #[source]
        source: tokio_postgres::Error,
    },

    #[error("Invalid number of results returned from query. Expected `{expected}`, got `{actual}`")]
    InvalidNumberOfResults {
        actual: usize,
        expected: usize,
    },

    #[error("Postgres version {0} is not supported. Only 12 and above is supported")]
    UnsupportedPostgresVersion(i32),

    #[error("Invalid response when asking postgres for its version")]
    InvalidPostgresVersionResponse,

    #[error("Failed to read column metadata: {reason}")]
    Extraction {
        reason: String,
    },

    #[error("Cannot render table '{table}': {reason}")]
    Render {
        table: String,
        reason: String,
    },

    #[error("Invalid configuration in '{path}': {reason}")]
    Config {
        path: PathBuf,
        reason: String,
    },

    #[error("Failed to save document to '{path}': `{source}`")]
    Persist {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("io error: `{0}`")]
    IoError(#[from] std::io::Error),
}

pub type Result<T = ()> = std::result::Result<T, TriTabulaError>;
