use thiserror::Error;

/// Convenient result alias for the CareFinder library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// The query normalization and formatting stages are total functions, so the
/// only failure source in this crate is the data store.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper for database errors (pool, connection, and query failures).
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
