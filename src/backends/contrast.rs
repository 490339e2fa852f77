//! Deterministic contrast-based segmentation backend
//!
//! Estimates the background color from the image border ring and scores every
//! pixel by its color distance from that estimate. The normalized score runs
//! through a smoothstep ramp to produce an 8-bit alpha mask. Purely
//! arithmetic, so repeated runs over the same input are bit-identical.

use crate::{
    backends::SegmentationBackend,
    error::{BgStripError, Result},
    types::SegmentationMask,
};
use image::DynamicImage;
use ndarray::Array2;
use tracing::debug;

/// Default lower edge of the alpha ramp (normalized distance)
const DEFAULT_RAMP_LOW: f32 = 0.2;

/// Default upper edge of the alpha ramp (normalized distance)
const DEFAULT_RAMP_HIGH: f32 = 0.6;

/// Classical segmentation backend based on color distance from the border
pub struct ContrastBackend {
    ramp_low: f32,
    ramp_high: f32,
}

impl ContrastBackend {
    /// Create a backend with the default alpha ramp
    #[must_use]
    pub fn new() -> Self {
        Self {
            ramp_low: DEFAULT_RAMP_LOW,
            ramp_high: DEFAULT_RAMP_HIGH,
        }
    }

    /// Create a backend with a custom alpha ramp
    ///
    /// # Errors
    /// Returns a segmentation error unless `0.0 <= low < high <= 1.0`.
    pub fn with_ramp(ramp_low: f32, ramp_high: f32) -> Result<Self> {
        if !(0.0..1.0).contains(&ramp_low) || ramp_high <= ramp_low || ramp_high > 1.0 {
            return Err(BgStripError::segmentation(format!(
                "invalid alpha ramp [{ramp_low}, {ramp_high}]: expected 0.0 <= low < high <= 1.0"
            )));
        }
        Ok(Self { ramp_low, ramp_high })
    }

    /// Mean color of the one-pixel border ring
    fn border_mean(rgb: &image::RgbImage) -> [f32; 3] {
        let (width, height) = rgb.dimensions();
        let mut sum = [0.0f64; 3];
        let mut count = 0u64;

        for (x, y, pixel) in rgb.enumerate_pixels() {
            if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                sum[0] += f64::from(pixel[0]);
                sum[1] += f64::from(pixel[1]);
                sum[2] += f64::from(pixel[2]);
                count += 1;
            }
        }

        [
            (sum[0] / count as f64) as f32,
            (sum[1] / count as f64) as f32,
            (sum[2] / count as f64) as f32,
        ]
    }
}

impl Default for ContrastBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentationBackend for ContrastBackend {
    fn segment(&self, image: &DynamicImage) -> Result<SegmentationMask> {
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();

        if width == 0 || height == 0 {
            return Err(BgStripError::segmentation(
                "cannot segment a zero-sized image",
            ));
        }

        let background = Self::border_mean(&rgb);
        debug!(
            backend = self.name(),
            width,
            height,
            bg_r = background[0],
            bg_g = background[1],
            bg_b = background[2],
            "estimated background color from border ring"
        );

        // Euclidean RGB distance from the background estimate, per pixel.
        let mut scores = Array2::<f32>::zeros((height as usize, width as usize));
        for (x, y, pixel) in rgb.enumerate_pixels() {
            let dr = f32::from(pixel[0]) - background[0];
            let dg = f32::from(pixel[1]) - background[1];
            let db = f32::from(pixel[2]) - background[2];
            scores[[y as usize, x as usize]] = (dr * dr + dg * dg + db * db).sqrt();
        }

        let max_score = scores.iter().fold(0.0f32, |acc, &s| acc.max(s));

        // Uniform image: no contrast to separate on, everything is background.
        if max_score <= f32::EPSILON {
            return Ok(SegmentationMask::new(
                vec![0; (width as usize) * (height as usize)],
                (width, height),
            ));
        }

        let data: Vec<u8> = scores
            .iter()
            .map(|&s| {
                let alpha = smoothstep(self.ramp_low, self.ramp_high, s / max_score);
                (alpha * 255.0).round() as u8
            })
            .collect();

        Ok(SegmentationMask::new(data, (width, height)))
    }

    fn name(&self) -> &str {
        "contrast"
    }
}

/// Hermite smoothstep between `edge0` and `edge1`
fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
