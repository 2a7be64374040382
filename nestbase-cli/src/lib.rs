//! # nestbase-cli
//!
//! CLI library for the `nestbase` generator.
//!
//! - [`config`] - Configuration file loading and layering
//! - [`manifest`] - Generator manifest
//! - [`report`] - Top-level error reporting
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod manifest;
pub mod report;

pub use config::{CliArgs, Config, ConfigManager};
pub use error::{CliError, CliResult};
pub use manifest::Manifest;
pub use report::Report;
