//! Background removal pipeline
//!
//! `BackgroundRemovalProcessor` drives the single linear operation this crate
//! performs: decode, segment, apply the alpha mask, encode as PNG. The whole
//! pipeline is synchronous and runs to completion on the calling thread.

use crate::{
    backends::{ContrastBackend, SegmentationBackend},
    error::Result,
    services::ImageIoService,
    types::{ProcessingTimings, RemovalResult},
};
use image::DynamicImage;
use instant::Instant;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Pipeline for removing the background from a single image
pub struct BackgroundRemovalProcessor {
    backend: Box<dyn SegmentationBackend>,
}

impl BackgroundRemovalProcessor {
    /// Create a processor with the default contrast backend
    #[must_use]
    pub fn new() -> Self {
        Self::with_backend(Box::new(ContrastBackend::new()))
    }

    /// Create a processor with a custom segmentation backend
    #[must_use]
    pub fn with_backend(backend: Box<dyn SegmentationBackend>) -> Self {
        Self { backend }
    }

    /// Name of the backend this processor uses
    #[must_use]
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Remove the background from an in-memory image
    ///
    /// The result has the same dimensions as the input; foreground pixels
    /// keep their color and background pixels gain transparency.
    pub fn process_image(&self, image: &DynamicImage) -> Result<RemovalResult> {
        let total_start = Instant::now();
        let width = image.width();
        let height = image.height();

        let segmentation_start = Instant::now();
        let mask = self.backend.segment(image)?;
        let segmentation_ms = segmentation_start.elapsed().as_millis() as u64;
        debug!(
            backend = self.backend.name(),
            segmentation_ms, "segmentation complete"
        );

        let postprocess_start = Instant::now();
        let mask = if mask.dimensions == (width, height) {
            mask
        } else {
            debug!(
                mask_dimensions = ?mask.dimensions,
                image_dimensions = ?(width, height),
                "resizing mask to input dimensions"
            );
            mask.resize(width, height)?
        };

        let mut output = image.to_rgba8();
        mask.apply_to_image(&mut output)?;
        let postprocess_ms = postprocess_start.elapsed().as_millis() as u64;

        let timings = ProcessingTimings {
            decode_ms: 0,
            segmentation_ms,
            postprocess_ms,
            encode_ms: None,
            total_ms: total_start.elapsed().as_millis() as u64,
        };

        Ok(RemovalResult::new(output, mask, (width, height), timings))
    }

    /// Remove the background from the image at `input_path` and write the
    /// result as PNG to `output_path`
    ///
    /// The output parent directory must already exist. The write is atomic:
    /// a failure at any stage leaves nothing at `output_path`.
    #[instrument(skip(self), fields(backend = self.backend.name()))]
    pub fn remove_background(&self, input_path: &Path, output_path: &Path) -> Result<RemovalResult> {
        let total_start = Instant::now();

        let decode_start = Instant::now();
        let image = ImageIoService::load_image(input_path)?;
        let decode_ms = decode_start.elapsed().as_millis() as u64;
        debug!(decode_ms, "input image decoded");

        let mut result = self.process_image(&image)?;

        let encode_start = Instant::now();
        ImageIoService::save_png_atomic(&result.image, output_path)?;
        let encode_ms = encode_start.elapsed().as_millis() as u64;

        result.timings.decode_ms = decode_ms;
        result.timings.encode_ms = Some(encode_ms);
        result.timings.total_ms = total_start.elapsed().as_millis() as u64;

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            total_ms = result.timings.total_ms,
            "background removed"
        );

        Ok(result)
    }
}

impl Default for BackgroundRemovalProcessor {
    fn default() -> Self {
        Self::new()
    }
}
