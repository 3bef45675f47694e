use std::io;

/// Errors that can occur while discovering and caching just targets
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unknown project type '{0}'")]
    UnknownProjectType(String),

    #[error("No target named '{0}'")]
    NoSuchTarget(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for multijust operations
pub type Result<T> = std::result::Result<T, Error>;
