//! Crate-level error types.

use std::fmt;

/// Errors produced by the pathview crate.
#[derive(Debug)]
pub enum PathviewError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Malformed task file (missing bounds, bad tokens).
    TaskParse(String),
    /// Malformed path file (short lines, non-finite fields).
    PathParse(String),
    /// Malformed model file (bad vertex or face records).
    ModelParse(String),
    /// A pose sequence with no poses; playback has no valid answer.
    EmptyPath,
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for PathviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::TaskParse(msg) => write!(f, "task parse error: {msg}"),
            Self::PathParse(msg) => write!(f, "path parse error: {msg}"),
            Self::ModelParse(msg) => write!(f, "model parse error: {msg}"),
            Self::EmptyPath => write!(f, "path contains no poses"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for PathviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PathviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
