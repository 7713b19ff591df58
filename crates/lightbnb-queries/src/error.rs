//! Error types for query operations.

use rusqlite::ErrorCode;

/// Errors that can occur while running a query.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// A single-row lookup matched nothing.
    #[error("not found: {0}")]
    NotFound(String),

    /// A unique, foreign-key, check, or not-null constraint rejected a write.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// No usable connection: the pool timed out, or the database file is
    /// busy, locked, or cannot be opened.
    #[error("database unavailable: {0}")]
    ConnectivityFault(String),

    /// Any other statement failure.
    #[error("database error: {0}")]
    Database(rusqlite::Error),

    /// The blocking worker running the query panicked or was cancelled.
    #[error("query task failed: {0}")]
    TaskJoin(String),

    /// A seed fixture file could not be read.
    #[error("failed to read fixture {path}: {source}")]
    FixtureRead {
        path: String,
        source: std::io::Error,
    },

    /// A seed fixture file is not valid JSON for its record type.
    #[error("failed to parse fixture {path}: {source}")]
    FixtureParse {
        path: String,
        source: serde_json::Error,
    },
}

impl QueryError {
    /// Short stable label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::ConstraintViolation(_) => "constraint_violation",
            Self::ConnectivityFault(_) => "connectivity_fault",
            Self::Database(_) => "database",
            Self::TaskJoin(_) => "task_join",
            Self::FixtureRead { .. } | Self::FixtureParse { .. } => "fixture",
        }
    }
}

impl From<rusqlite::Error> for QueryError {
    fn from(err: rusqlite::Error) -> Self {
        match err.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => Self::ConstraintViolation(err.to_string()),
            Some(
                ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::CannotOpen
                | ErrorCode::NotADatabase
                | ErrorCode::SystemIoFailure,
            ) => Self::ConnectivityFault(err.to_string()),
            _ => Self::Database(err),
        }
    }
}

impl From<r2d2::Error> for QueryError {
    fn from(err: r2d2::Error) -> Self {
        Self::ConnectivityFault(err.to_string())
    }
}

impl From<tokio::task::JoinError> for QueryError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::TaskJoin(err.to_string())
    }
}
