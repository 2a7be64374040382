//! Error types for the generator.
//!
//! This module defines all error types used throughout the generation
//! pipeline, providing detailed error messages with context for debugging.

use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigValue;

/// Result type alias for generator operations.
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Main error type for generator operations.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Error reading the input document.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Malformed generator configuration.
    #[error("Invalid generator configuration: {0}")]
    Config(#[from] ConfigError),

    /// A required sibling-generator path could not be determined.
    #[error("Path resolution failed: {0}")]
    Path(#[from] PathError),

    /// A model could not be rendered.
    #[error("Failed to render model: {0}")]
    Render(#[from] RenderError),

    /// A placeholder import could not be resolved.
    #[error("Failed to resolve imports: {0}")]
    Resolve(#[from] ResolveError),

    /// Error writing output files.
    #[error("Failed to write output: {0}")]
    Write(#[from] WriteError),
}

/// Error reading or decoding the DMMF input document.
#[derive(Debug, Error)]
pub enum InputError {
    /// IO error reading the document.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid generator-options JSON.
    #[error("Invalid DMMF document {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Error in the generator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An option value could not be coerced to its expected kind.
    #[error("Invalid configuration value for '{key}': expected {expected}, got '{value}'")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
        /// The complete configuration map as received, for usage reports.
        input: BTreeMap<String, ConfigValue>,
    },

    /// Invalid TOML syntax in a configuration file.
    #[error("Invalid TOML in {path}: {message}")]
    InvalidToml { path: PathBuf, message: String },

    /// IO error reading a configuration file.
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error locating a path owned by a sibling generator.
#[derive(Debug, Error)]
pub enum PathError {
    /// No schema-client location can be determined.
    #[error("Cannot determine the client module location: {reason}")]
    ClientNotFound { reason: String },
}

/// Error rendering a model descriptor.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The model has no fields to render.
    #[error("Model '{model}' has no fields")]
    NoFields { model: String },
}

/// Error resolving placeholder imports to relative paths.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A placeholder names a model that has no output file.
    #[error("{file} imports unknown model '{model}'")]
    UnknownModel { file: PathBuf, model: String },
}

/// Error from the formatting collaborator.
///
/// Never surfaced by the generator: a failed format falls back to the
/// unformatted text.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The formatter process could not be started or fed.
    #[error("Failed to run formatter '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The formatter rejected the input.
    #[error("Formatter exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    /// The formatter produced non-UTF-8 output.
    #[error("Formatter produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Error writing output files.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create directory.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("Failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Create an invalid TOML error.
    pub fn invalid_toml(path: PathBuf, message: impl Into<String>) -> Self {
        Self::InvalidToml {
            path,
            message: message.into(),
        }
    }
}

impl PathError {
    /// Create a client-not-found error.
    pub fn client_not_found(reason: impl Into<String>) -> Self {
        Self::ClientNotFound {
            reason: reason.into(),
        }
    }
}
