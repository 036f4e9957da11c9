use thiserror::Error;

/// The custom error type for the data-access layer.
///
/// Database failures pass through untouched; callers that care about a specific
/// failure class use the `is_*` helpers instead of matching on driver internals.
#[derive(Debug, Error)]
pub enum Error {
    /// An error originating from the sqlx library.
    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// A type alias for `Result<T, Error>` to simplify function signatures.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The underlying database error, if any.
    pub fn as_database_error(&self) -> Option<&(dyn sqlx::error::DatabaseError + 'static)> {
        match self {
            Error::Sqlx(sqlx::Error::Database(db_err)) => Some(&**db_err),
            _ => None,
        }
    }

    /// A unique constraint rejected the write (e.g. a duplicate email).
    pub fn is_unique_violation(&self) -> bool {
        self.as_database_error()
            .is_some_and(|db_err| db_err.is_unique_violation())
    }

    /// A foreign key rejected the write (e.g. a post for a missing owner).
    pub fn is_foreign_key_violation(&self) -> bool {
        self.as_database_error()
            .is_some_and(|db_err| db_err.is_foreign_key_violation())
    }

    /// The database could not be reached, refused the session, or no connection
    /// became available.
    ///
    /// Server-side refusals arrive as database errors; they are recognised by SQLSTATE
    /// class: `08` (connection exception), `28` (invalid authorization) and `3D`
    /// (unknown database).
    pub fn is_connectivity(&self) -> bool {
        match self {
            Error::Sqlx(
                sqlx::Error::Io(_)
                | sqlx::Error::Tls(_)
                | sqlx::Error::Protocol(_)
                | sqlx::Error::PoolTimedOut
                | sqlx::Error::PoolClosed
                | sqlx::Error::WorkerCrashed,
            ) => true,
            Error::Sqlx(sqlx::Error::Database(db_err)) => db_err
                .code()
                .is_some_and(|code| is_connection_sqlstate(&code)),
            _ => false,
        }
    }
}

fn is_connection_sqlstate(code: &str) -> bool {
    ["08", "28", "3D"]
        .iter()
        .any(|class| code.starts_with(class))
}
