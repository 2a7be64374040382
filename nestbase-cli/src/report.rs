//! Top-level error reporting.
//!
//! Configuration errors are answered with the option usage and the input
//! that was received. Path errors get a short notice. Anything else is
//! reported in full as unexpected.

use nestbase::config;
use nestbase::error::{ConfigError, GeneratorError};

use crate::error::CliError;

/// How an error is presented to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Malformed configuration: the error, the usage block and the input.
    Usage {
        message: String,
        usage: String,
        input: String,
    },
    /// A sibling generator's path could not be determined.
    InvalidPath { detail: String },
    /// Anything else.
    Unexpected { detail: String },
}

impl Report {
    /// Classify an error.
    pub fn from_error(error: &CliError) -> Self {
        if let Some(ConfigError::InvalidValue { input, .. }) = error.as_config() {
            return Report::Usage {
                message: error.to_string(),
                usage: config::usage(),
                input: serde_json::to_string(input).unwrap_or_default(),
            };
        }

        match error {
            CliError::Generate(GeneratorError::Path(err)) => Report::InvalidPath {
                detail: err.to_string(),
            },
            _ => Report::Unexpected {
                detail: error.to_string(),
            },
        }
    }

    /// Lines to print, without styling.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Report::Usage {
                message,
                usage,
                input,
            } => vec![
                message.clone(),
                usage.clone(),
                format!("Your Input : {}", input),
            ],
            Report::InvalidPath { detail } => {
                vec!["path not valid in generator".to_string(), detail.clone()]
            }
            Report::Unexpected { detail } => {
                vec!["unexpected error occurred".to_string(), detail.clone()]
            }
        }
    }
}
