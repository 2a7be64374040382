//! Source formatting.
//!
//! Formatting is delegated to an external tool. Failures are never fatal:
//! [`format_or_fallback`] logs them and keeps the unformatted text.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::FormatError;

/// Formats generated source text.
pub trait Formatter {
    /// Format `source`, which will be written to `path`.
    fn format(&self, path: &Path, source: &str) -> Result<String, FormatError>;
}

/// Leaves text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Formatter for Passthrough {
    fn format(&self, _path: &Path, source: &str) -> Result<String, FormatError> {
        Ok(source.to_string())
    }
}

/// Runs `prettier` over stdin.
///
/// `--stdin-filepath` lets prettier pick the parser and resolve the
/// project's configuration from the target path.
#[derive(Debug, Clone)]
pub struct Prettier {
    program: String,
}

impl Default for Prettier {
    fn default() -> Self {
        Self::new("prettier")
    }
}

impl Prettier {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Formatter for Prettier {
    fn format(&self, path: &Path, source: &str) -> Result<String, FormatError> {
        let spawn_error = |source| FormatError::Spawn {
            program: self.program.clone(),
            source,
        };

        let mut child = Command::new(&self.program)
            .arg("--stdin-filepath")
            .arg(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(source.as_bytes()).map_err(spawn_error)?;
        }

        let output = child.wait_with_output().map_err(spawn_error)?;
        if !output.status.success() {
            return Err(FormatError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}

/// Formatter output, or the untouched source when formatting failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    pub text: String,
    pub formatted: bool,
}

/// Format `source`, falling back to the input when the formatter fails.
pub fn format_or_fallback(formatter: &dyn Formatter, path: &Path, source: &str) -> Formatted {
    match formatter.format(path, source) {
        Ok(text) => Formatted {
            text,
            formatted: true,
        },
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "formatting failed, keeping unformatted output"
            );
            Formatted {
                text: source.to_string(),
                formatted: false,
            }
        }
    }
}
