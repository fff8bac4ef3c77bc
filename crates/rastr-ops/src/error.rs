//! Error types for image transformations.

use thiserror::Error;

/// Error type for transformation operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Kernel shape does not fit the transformation family.
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// No transformation is registered under the given name.
    #[error("unknown transformation: {0:?}")]
    UnknownTransformation(String),

    /// Invalid or missing parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error raised by the underlying raster.
    #[error(transparent)]
    Image(#[from] rastr_core::Error),
}

/// Result type for transformation operations.
pub type OpsResult<T> = Result<T, OpsError>;
