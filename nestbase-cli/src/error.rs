//! Error types for the CLI.

use thiserror::Error;

use nestbase::error::{ConfigError, GeneratorError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error raised by the generation pipeline.
    #[error(transparent)]
    Generate(#[from] GeneratorError),

    /// Error loading the configuration file.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// A command precondition was not met.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// The configuration error behind this error, if any.
    pub fn as_config(&self) -> Option<&ConfigError> {
        match self {
            CliError::Config(err) | CliError::Generate(GeneratorError::Config(err)) => Some(err),
            _ => None,
        }
    }
}
