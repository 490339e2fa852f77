#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::uninlined_format_args)]

//! # bgstrip
//!
//! Single-image background removal: load a raster image, run it through a
//! segmentation backend, apply the resulting alpha mask, and write the
//! transparent result as PNG.
//!
//! The segmentation capability sits behind the
//! [`SegmentationBackend`](backends::SegmentationBackend) trait. The bundled
//! [`ContrastBackend`](backends::ContrastBackend) is a deterministic
//! classical segmenter; a model-based backend can be slotted in without
//! touching the pipeline.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bgstrip::remove_background;
//!
//! # fn example() -> bgstrip::Result<()> {
//! let result = remove_background("input.jpg", "output.png")?;
//! println!("wrote {}x{} PNG", result.dimensions().0, result.dimensions().1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom backend
//!
//! ```rust,no_run
//! use bgstrip::{BackgroundRemovalProcessor, backends::ContrastBackend};
//!
//! # fn example() -> bgstrip::Result<()> {
//! let backend = ContrastBackend::with_ramp(0.1, 0.5)?;
//! let processor = BackgroundRemovalProcessor::with_backend(Box::new(backend));
//! processor.remove_background("input.png".as_ref(), "output.png".as_ref())?;
//! # Ok(())
//! # }
//! ```

pub mod backends;
pub mod error;
pub mod processor;
pub mod services;
pub mod types;

use std::path::Path;

// Public API exports
pub use backends::{ContrastBackend, SegmentationBackend};
pub use error::{BgStripError, Result};
pub use processor::BackgroundRemovalProcessor;
pub use services::ImageIoService;
pub use types::{MaskStatistics, ProcessingTimings, RemovalResult, SegmentationMask};

/// Remove the background from the image at `input_path` and write the result
/// as PNG to `output_path`
///
/// Uses the default [`ContrastBackend`]. The output parent directory must
/// already exist; the write is atomic, so a failure leaves nothing at
/// `output_path`.
pub fn remove_background<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
) -> Result<RemovalResult> {
    BackgroundRemovalProcessor::new().remove_background(input_path.as_ref(), output_path.as_ref())
}

/// Remove the background from an already-decoded image
///
/// In-memory variant of [`remove_background`] for callers that decode their
/// own input or post-process the result before saving.
pub fn remove_background_from_image(image: &image::DynamicImage) -> Result<RemovalResult> {
    BackgroundRemovalProcessor::new().process_image(image)
}
