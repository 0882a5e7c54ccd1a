use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Top-level error type for the CLI
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Analysis service error: {0}")]
    Analyst(#[from] crate::analyst::AnalystError),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading or saving configuration files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    ParsingFailed(String),

    #[error("failed to serialize configuration: {0}")]
    SerializationFailed(String),
}
