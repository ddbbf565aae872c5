use thiserror::Error;

/// Errors raised while loading the catalog, settings or storage.
///
/// None of these ever reach the end user as a message: the UI degrades
/// instead (empty catalog, empty shortlist, default settings).
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("could not determine user data directory")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, Error>;
