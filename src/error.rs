//! Error types for trueno-circle operations.
//!
//! Numerical conditions are deliberately absent here: a non-positive radius
//! produces an empty circle and fixed-point overflow wraps silently. Only
//! resource shapes, configuration and I/O can fail.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-circle operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (writing reports, reading config files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid dimensions for a bitmap.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Benchmark configuration rejected by validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be parsed.
    #[error("Config parse error: {0}")]
    Config(String),
}
