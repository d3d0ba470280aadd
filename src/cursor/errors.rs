//! Custom error types for cursor measurement

use std::fmt;
use std::io;

/// Cursor-specific error types
#[derive(Debug)]
pub enum CursorError {
    /// I/O error
    IoError(io::Error),
    /// Image decoding error
    ImageError(image::ImageError),
    /// Pixel count does not match the declared dimensions
    BufferSizeMismatch { expected: usize, actual: usize },
    /// Settings file could not be parsed
    InvalidSettings(String),
    /// Invalid command-line value
    InvalidArgument(String),
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorError::IoError(e) => write!(f, "I/O error: {}", e),
            CursorError::ImageError(e) => write!(f, "Image error: {}", e),
            CursorError::BufferSizeMismatch { expected, actual } => write!(
                f,
                "Pixel buffer size mismatch: expected {} pixels, got {}",
                expected, actual
            ),
            CursorError::InvalidSettings(msg) => write!(f, "Invalid settings: {}", msg),
            CursorError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for CursorError {}

impl From<io::Error> for CursorError {
    fn from(error: io::Error) -> Self {
        CursorError::IoError(error)
    }
}

impl From<image::ImageError> for CursorError {
    fn from(error: image::ImageError) -> Self {
        CursorError::ImageError(error)
    }
}

/// Result type for cursor operations
pub type CursorResult<T> = Result<T, CursorError>;
