//! Core types for background removal operations

use crate::error::{BgStripError, Result};
use image::{GrayImage, RgbaImage};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Grayscale alpha mask produced by a segmentation backend
///
/// Values are per-pixel opacity: 255 is fully foreground, 0 is fully
/// background. Stored in raster order (row-major, top-left origin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentationMask {
    /// Mask data as grayscale values (0-255)
    pub data: Vec<u8>,

    /// Mask dimensions (width, height)
    pub dimensions: (u32, u32),
}

impl SegmentationMask {
    /// Create a new segmentation mask
    #[must_use]
    pub fn new(data: Vec<u8>, dimensions: (u32, u32)) -> Self {
        Self { data, dimensions }
    }

    /// Create a mask from a grayscale image
    #[must_use]
    pub fn from_image(image: &GrayImage) -> Self {
        let (width, height) = image.dimensions();
        Self::new(image.as_raw().clone(), (width, height))
    }

    /// Convert the mask to a grayscale image
    pub fn to_image(&self) -> Result<GrayImage> {
        let (width, height) = self.dimensions;
        GrayImage::from_raw(width, height, self.data.clone()).ok_or_else(|| {
            BgStripError::segmentation("mask data length does not match its dimensions")
        })
    }

    /// Apply the mask to an RGBA image by overwriting its alpha channel
    ///
    /// # Errors
    /// Returns a segmentation error when image and mask dimensions differ.
    pub fn apply_to_image(&self, image: &mut RgbaImage) -> Result<()> {
        if image.dimensions() != self.dimensions {
            return Err(BgStripError::segmentation(format!(
                "image dimensions {:?} do not match mask dimensions {:?}",
                image.dimensions(),
                self.dimensions
            )));
        }

        for (pixel, alpha) in image.pixels_mut().zip(self.data.iter()) {
            pixel[3] = *alpha;
        }

        Ok(())
    }

    /// Resize the mask to new dimensions
    pub fn resize(&self, new_width: u32, new_height: u32) -> Result<SegmentationMask> {
        let current = self.to_image()?;
        let resized = image::imageops::resize(
            &current,
            new_width,
            new_height,
            image::imageops::FilterType::Lanczos3,
        );
        Ok(SegmentationMask::from_image(&resized))
    }

    /// Get foreground/background pixel counts for this mask
    #[must_use]
    pub fn statistics(&self) -> MaskStatistics {
        let total_pixels = self.data.len();
        let foreground_pixels = self.data.iter().filter(|&&x| x > 127).count();

        MaskStatistics {
            total_pixels,
            foreground_pixels,
            background_pixels: total_pixels - foreground_pixels,
        }
    }
}

/// Pixel counts for a segmentation mask
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskStatistics {
    pub total_pixels: usize,
    pub foreground_pixels: usize,
    pub background_pixels: usize,
}

/// Timing breakdown for a removal operation, in milliseconds
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingTimings {
    /// Image loading and decoding from file (zero for in-memory input)
    pub decode_ms: u64,

    /// Segmentation backend execution
    pub segmentation_ms: u64,

    /// Mask resize and alpha application
    pub postprocess_ms: u64,

    /// Final PNG encoding and write (if saving to file)
    pub encode_ms: Option<u64>,

    /// Total end-to-end time
    pub total_ms: u64,
}

/// Result of a background removal operation
#[derive(Debug, Clone)]
pub struct RemovalResult {
    /// The processed image with background made transparent
    pub image: RgbaImage,

    /// The segmentation mask used for removal
    pub mask: SegmentationMask,

    /// Original input dimensions (width, height)
    pub original_dimensions: (u32, u32),

    /// Stage timing breakdown
    pub timings: ProcessingTimings,
}

impl RemovalResult {
    /// Create a new removal result
    #[must_use]
    pub fn new(
        image: RgbaImage,
        mask: SegmentationMask,
        original_dimensions: (u32, u32),
        timings: ProcessingTimings,
    ) -> Self {
        Self {
            image,
            mask,
            original_dimensions,
            timings,
        }
    }

    /// Get output image dimensions
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Encode the result as PNG bytes
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buffer);
        self.image
            .write_to(&mut cursor, image::ImageFormat::Png)
            .map_err(|e| BgStripError::encode(format!("PNG encoding failed: {e}")))?;
        Ok(buffer)
    }

    /// Save the result as PNG with alpha channel
    ///
    /// Writes atomically: the encoded image lands in a temporary file next to
    /// the destination and is renamed into place, so a failed write never
    /// leaves a partial output file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        crate::services::ImageIoService::save_png_atomic(&self.image, path.as_ref())
    }
}
