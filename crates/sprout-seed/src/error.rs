use thiserror::Error;

/// Errors from seed resolution and loading.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed could not be found by name or path.
    #[error("seed '{0}' not found; searched the seeds directory and as a direct path")]
    NotFound(String),

    /// The seed file exists but is empty.
    #[error("seed file is empty: {0}")]
    Empty(String),

    /// The seed file is not syntactically valid YAML.
    #[error("invalid YAML syntax: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The seed parsed but fails the structural schema.
    #[error("seed validation failed for {path}: {}", .errors.join("; "))]
    Validation { path: String, errors: Vec<String> },

    /// I/O error while reading the seed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for seed operations.
pub type SeedResult<T> = Result<T, SeedError>;
