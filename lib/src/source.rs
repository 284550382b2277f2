//! Decoded source pixels
//!
//! Every input is force-converted to 8-bit RGB, whatever its channel count,
//! and kept in a single owned buffer for the lifetime of one conversion.

use crate::error::{AsciiError, Result};
use image::RgbImage;
use log::debug;
use std::path::Path;

/// Immutable `width * height` grid of RGB triples
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: RgbImage,
}

impl SourceImage {
    /// Decode an image file (JPEG, PNG, ...) into RGB
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| AsciiError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            "decoded {} ({}x{}, {:?})",
            path.display(),
            decoded.width(),
            decoded.height(),
            decoded.color()
        );
        Self::from_rgb(decoded.to_rgb8())
    }

    /// Wrap an already decoded RGB buffer
    pub fn from_rgb(pixels: RgbImage) -> Result<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(AsciiError::EmptyImage { width, height });
        }
        Ok(Self { pixels })
    }

    /// Build from a flat buffer of `width * height * 3` bytes, row-major
    pub fn from_raw(width: u32, height: u32, bytes: Vec<u8>) -> Result<Self> {
        let len = bytes.len();
        let pixels = RgbImage::from_raw(width, height, bytes).ok_or(AsciiError::BufferSize {
            width,
            height,
            len,
        })?;
        // from_raw accepts oversized buffers; the grid must be exact
        if len != width as usize * height as usize * 3 {
            return Err(AsciiError::BufferSize { width, height, len });
        }
        Self::from_rgb(pixels)
    }

    /// Solid-color image, mostly useful for tests and demos
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Result<Self> {
        Self::from_rgb(RgbImage::from_pixel(width, height, image::Rgb(rgb)))
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// RGB triple at column `x`, row `y`
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels.get_pixel(x, y).0
    }
}
