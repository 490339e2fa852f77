//! Error types for background removal operations

use thiserror::Error;

/// Result type alias for background removal operations
pub type Result<T> = std::result::Result<T, BgStripError>;

/// Closed set of failure kinds for the removal pipeline
///
/// Every failure an operation can hit maps onto exactly one of these
/// variants, so callers can react to the stage that failed instead of
/// parsing an opaque message string.
#[derive(Error, Debug)]
pub enum BgStripError {
    /// Input/output errors (file not found, missing parent directory, permission denied)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input image could not be decoded (corrupt data, unsupported format)
    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// Segmentation backend failure
    #[error("Segmentation error: {0}")]
    Segmentation(String),

    /// PNG encoding or final write failure
    #[error("Encode error: {0}")]
    Encode(String),
}

impl BgStripError {
    /// Create a new segmentation error
    pub fn segmentation<S: Into<String>>(msg: S) -> Self {
        Self::Segmentation(msg.into())
    }

    /// Create a new encode error
    pub fn encode<S: Into<String>>(msg: S) -> Self {
        Self::Encode(msg.into())
    }

    /// Create a file I/O error with operation context
    pub fn file_io_error<P: AsRef<std::path::Path>>(
        operation: &str,
        path: P,
        error: std::io::Error,
    ) -> Self {
        let path_display = path.as_ref().display();
        Self::Io(std::io::Error::new(
            error.kind(),
            format!("Failed to {operation} '{path_display}': {error}"),
        ))
    }

    /// Create an image decode error with path and format context
    pub fn decode_error<P: AsRef<std::path::Path>>(path: P, error: image::ImageError) -> Self {
        let path_display = path.as_ref().display();
        let extension = path
            .as_ref()
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown");

        Self::Decode(image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!(
                "Failed to decode image '{path_display}' (extension: {extension}): {error}. Supported formats: PNG, JPEG, TIFF"
            ),
        )))
    }
}
