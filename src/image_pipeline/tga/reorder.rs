//! Conversion from a decoded raster into TGA-native pixel layout.

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raster::types::{byte_len, Pixel, Raster, BYTES_PER_PIXEL};

/// Pixels in TGA-native order: BGRA channels, bottom row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderedBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl ReorderedBuffer {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixel(&self, index: usize) -> Option<Pixel> {
        self.pixels.get(index).copied()
    }

    /// Destination row `y`, where row 0 is the bottom row of the image.
    pub fn row(&self, y: u32) -> Option<&[Pixel]> {
        if y >= self.height {
            return None;
        }
        let width = self.width as usize;
        let start = y as usize * width;
        self.pixels.get(start..start + width)
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_flattened()
    }
}

/// Flips rows bottom-to-top and swaps red and blue.
pub fn reorder(raster: &Raster) -> Result<ReorderedBuffer> {
    if raster.width == 0 || raster.height == 0 {
        return Err(ConversionError::InvalidDimensions(raster.width, raster.height));
    }
    let expected = byte_len(raster.width, raster.height)?;
    if raster.pixels.len() != expected {
        return Err(ConversionError::DecodeFailure(format!(
            "pixel buffer holds {} bytes, expected {}",
            raster.pixels.len(),
            expected
        )));
    }

    debug!("Reordering {}x{} raster to BGRA bottom-up", raster.width, raster.height);

    let row_bytes = raster.width as usize * BYTES_PER_PIXEL;
    let mut pixels = Vec::with_capacity(expected / BYTES_PER_PIXEL);
    for src_row in raster.pixels.chunks_exact(row_bytes).rev() {
        pixels.extend(
            src_row
                .chunks_exact(BYTES_PER_PIXEL)
                .map(|rgba| [rgba[2], rgba[1], rgba[0], rgba[3]]),
        );
    }

    Ok(ReorderedBuffer {
        width: raster.width,
        height: raster.height,
        pixels,
    })
}
