use thiserror::Error;

/// Errors from workspace generation and update.
///
/// Fatal-class conditions in the update pipeline (missing metadata, seed not
/// found, validation failure) are reported as structured failure reports,
/// not as this error; `UpdateError` covers genuine failures such as I/O
/// problems during the mutation phase.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// Seed resolution or loading failed during workspace initialization.
    #[error(transparent)]
    Seed(#[from] sprout_seed::SeedError),

    /// Metadata could not be serialized.
    #[error("failed to encode metadata: {0}")]
    Meta(#[from] serde_json::Error),

    /// I/O failure while reading or writing workspace files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for update operations.
pub type UpdateResult<T> = Result<T, UpdateError>;
