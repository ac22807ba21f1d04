// ABOUTME: Error types for the core helper functions.
// ABOUTME: Provides CoreError enum with Io, Template, and Date variants.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur in the fallible core helpers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A filesystem operation failed.
    #[error("{op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Template values could not be turned into substitutions.
    #[error("template values: {0}")]
    Template(String),

    /// A date string did not match the expected format.
    #[error("invalid date {input:?} for format {format:?}")]
    Date { input: String, format: String },
}

impl CoreError {
    /// Creates an Io error tagged with the operation and the path involved.
    pub fn io(op: &'static str, path: impl AsRef<Path>, source: io::Error) -> Self {
        CoreError::Io {
            op,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a Template error from any displayable cause.
    pub fn template(err: impl fmt::Display) -> Self {
        CoreError::Template(err.to_string())
    }

    /// Creates a Date error.
    pub fn date(input: impl Into<String>, format: impl Into<String>) -> Self {
        CoreError::Date {
            input: input.into(),
            format: format.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
