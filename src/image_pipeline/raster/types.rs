//! Decoded raster types

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Number of channels (and bytes) per pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// One 8-bit-per-channel pixel. The channel order depends on where the
/// pixel lives: RGBA inside a [`Raster`], BGRA once reordered for TGA.
pub type Pixel = [u8; BYTES_PER_PIXEL];

/// Decoded source image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Width of the image in pixels
    pub width: u32,
    /// Height of the image in pixels
    pub height: u32,
    /// Row-major RGBA bytes, top row first, straight alpha
    pub pixels: Vec<u8>,
}

impl Raster {
    /// Wraps an RGBA buffer, rejecting one whose length does not match the
    /// dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if pixels.len() != expected {
            return Err(ConversionError::DecodeFailure(format!(
                "pixel buffer holds {} bytes, expected {} for {}x{} RGBA",
                pixels.len(),
                expected,
                width,
                height
            )));
        }

        Ok(Self { width, height, pixels })
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len() / BYTES_PER_PIXEL
    }

    /// RGBA bytes of source row `y` (0 is the top row).
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.width as usize * BYTES_PER_PIXEL;
        let start = y as usize * stride;
        self.pixels.get(start..start + stride)
    }
}

pub(crate) fn byte_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        .ok_or_else(|| {
            ConversionError::DecodeFailure(format!("{}x{} raster is too large", width, height))
        })
}
