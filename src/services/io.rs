//! Image file input/output
//!
//! Keeps file handling out of the pipeline logic so the processor can be
//! tested against in-memory images.

use crate::error::{BgStripError, Result};
use image::{DynamicImage, RgbaImage};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Service for loading input images and writing PNG output
pub struct ImageIoService;

impl ImageIoService {
    /// Load an image from a file path
    ///
    /// Tries extension-based format detection first, then falls back to
    /// content sniffing so a mislabeled file still decodes.
    ///
    /// # Errors
    /// - `Io` when the file does not exist or cannot be read
    /// - `Decode` when the data cannot be decoded by either method
    pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(BgStripError::file_io_error(
                "read image file",
                path_ref,
                std::io::Error::new(std::io::ErrorKind::NotFound, "file does not exist"),
            ));
        }

        match image::open(path_ref) {
            Ok(img) => Ok(img),
            Err(e) => {
                debug!(
                    path = %path_ref.display(),
                    error = %e,
                    "extension-based decode failed, attempting content-based detection"
                );

                let data = std::fs::read(path_ref).map_err(|io_err| {
                    BgStripError::file_io_error("read image data", path_ref, io_err)
                })?;

                image::load_from_memory(&data)
                    .map_err(|content_err| BgStripError::decode_error(path_ref, content_err))
            },
        }
    }

    /// Write an RGBA image as PNG, atomically
    ///
    /// The encoded bytes go to a temporary file in the destination's parent
    /// directory and are renamed onto the final path, so no failure mode
    /// leaves a partial file at the destination. The parent directory must
    /// already exist; none is created.
    ///
    /// # Errors
    /// - `Io` when the parent directory is missing or the write/rename fails
    /// - `Encode` when PNG encoding fails
    pub fn save_png_atomic(image: &RgbaImage, path: &Path) -> Result<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        if !parent.exists() {
            return Err(BgStripError::file_io_error(
                "write output file",
                path,
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "parent directory does not exist",
                ),
            ));
        }

        let mut buffer = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buffer);
        image
            .write_to(&mut cursor, image::ImageFormat::Png)
            .map_err(|e| {
                BgStripError::encode(format!(
                    "PNG encoding failed for '{}': {e}",
                    path.display()
                ))
            })?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent)
            .map_err(|e| BgStripError::file_io_error("create temporary file in", parent, e))?;
        tmp.write_all(&buffer)
            .map_err(|e| BgStripError::file_io_error("write temporary file for", path, e))?;
        tmp.persist(path)
            .map_err(|e| BgStripError::file_io_error("persist output file", path, e.error))?;

        debug!(path = %path.display(), bytes = buffer.len(), "wrote PNG output");
        Ok(())
    }
}
