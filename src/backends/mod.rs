//! Segmentation backend implementations
//!
//! The pipeline consumes segmentation as a black box behind the
//! [`SegmentationBackend`] trait, so the bundled classical backend can be
//! swapped for a model-based one without touching the calling logic.

use crate::{error::Result, types::SegmentationMask};
use image::DynamicImage;

pub mod contrast;

// Test doubles for pipeline testing
#[cfg(test)]
pub mod test_utils;

pub use self::contrast::ContrastBackend;

/// Trait for foreground/background segmentation backends
pub trait SegmentationBackend {
    /// Compute an alpha mask isolating the foreground subject
    ///
    /// The returned mask is expected to match the input dimensions; the
    /// processor resizes it when a backend works at a different resolution.
    ///
    /// # Errors
    /// - Degenerate input the backend cannot score (zero-sized image)
    /// - Backend-specific inference failures
    fn segment(&self, image: &DynamicImage) -> Result<SegmentationMask>;

    /// Human-readable backend name for logging
    fn name(&self) -> &str;
}
