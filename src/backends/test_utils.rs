//! Mock backends for pipeline testing

use crate::{
    backends::SegmentationBackend,
    error::{BgStripError, Result},
    types::SegmentationMask,
};
use image::DynamicImage;

/// Backend that returns a uniform mask at the input dimensions
pub struct ConstantMaskBackend {
    alpha: u8,
}

impl ConstantMaskBackend {
    pub fn new(alpha: u8) -> Self {
        Self { alpha }
    }
}

impl SegmentationBackend for ConstantMaskBackend {
    fn segment(&self, image: &DynamicImage) -> Result<SegmentationMask> {
        let width = image.width();
        let height = image.height();
        Ok(SegmentationMask::new(
            vec![self.alpha; (width as usize) * (height as usize)],
            (width, height),
        ))
    }

    fn name(&self) -> &str {
        "constant-mask"
    }
}

/// Backend that returns a uniform mask at half the input resolution,
/// forcing the processor's mask-resize path
pub struct HalfResolutionBackend {
    alpha: u8,
}

impl HalfResolutionBackend {
    pub fn new(alpha: u8) -> Self {
        Self { alpha }
    }
}

impl SegmentationBackend for HalfResolutionBackend {
    fn segment(&self, image: &DynamicImage) -> Result<SegmentationMask> {
        let width = (image.width() / 2).max(1);
        let height = (image.height() / 2).max(1);
        Ok(SegmentationMask::new(
            vec![self.alpha; (width as usize) * (height as usize)],
            (width, height),
        ))
    }

    fn name(&self) -> &str {
        "half-resolution"
    }
}

/// Backend that always fails
pub struct FailingBackend;

impl SegmentationBackend for FailingBackend {
    fn segment(&self, _image: &DynamicImage) -> Result<SegmentationMask> {
        Err(BgStripError::segmentation("mock backend failure"))
    }

    fn name(&self) -> &str {
        "failing"
    }
}
