//! Error types for model loading.
//!
//! Parsing distinguishes an *absent* section (not an error, just empty
//! buffers) from *corrupt* input, which is reported through [`ParseError`].
//! [`LoadError`] adds the failures of obtaining the model text in the first
//! place, so a missing file never looks like a garbled one.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for loading operations
pub type Result<T> = std::result::Result<T, LoadError>;

/// Corrupt model text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("malformed number {literal:?}: {reason}")]
    MalformedNumber { literal: String, reason: String },

    #[error("coordinate list holds {count} values, not a multiple of 3")]
    IncompleteVertex { count: usize },
}

/// Failure to produce a model from some source.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Config error: {0}")]
    Config(String),
}
