//! Error types for raster I/O.
//!
//! Provides unified error handling for the text codec, the conventional
//! format boundary and extension routing.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input does not carry a recognized format signature, or the path
    /// extension maps to no codec.
    #[error("unrecognized format: {0}")]
    UnrecognizedFormat(String),

    /// The input ended before the declared pixel data was complete.
    #[error("truncated input: expected {expected} tokens, found {found}")]
    TruncatedInput {
        /// Number of integer tokens the header promised.
        expected: usize,
        /// Number of integer tokens actually present.
        found: usize,
    },

    /// Decoding error.
    #[error("decode error: {0}")]
    Decode(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    Encode(String),

    /// Error raised by the underlying raster.
    #[error(transparent)]
    Image(#[from] rastr_core::Error),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
