//! Unified error type for genimages.

use thiserror::Error;

/// Errors that can occur while generating images.
#[derive(Debug, Error)]
pub enum GenError {
    /// An I/O error occurred (directory creation, write, rename).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The JPEG encoder rejected the raster.
    #[error("Encode error: {0}")]
    Encode(#[from] image::ImageError),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
