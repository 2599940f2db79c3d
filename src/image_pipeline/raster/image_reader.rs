//! Raster reader implementation using the image library.
//!
//! Decodes PNG input and normalizes every colour type the decoder can
//! produce (palette, grayscale, grayscale+alpha, RGB, 16-bit variants)
//! into 8-bit straight-alpha RGBA, top row first.

use std::io::Cursor;

use image::{ImageReader, Limits};
use tracing::debug;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raster::types::Raster;
use crate::image_pipeline::raster::reader::RasterSource;
use crate::image_pipeline::tga::header::{check_dimensions, MAX_DIMENSION};

/// Raster reader backed by the `image` crate.
pub struct ImageRasterReader;

impl ImageRasterReader {
    fn open(data: &[u8]) -> Result<ImageReader<Cursor<&[u8]>>> {
        ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| ConversionError::DecodeFailure(e.to_string()))
    }

    /// Image size as declared in the file header, without decoding pixels.
    pub fn read_dimensions(&self, data: &[u8]) -> Result<(u32, u32)> {
        let mut reader = Self::open(data)?;
        reader.no_limits();
        reader
            .into_dimensions()
            .map_err(|e| ConversionError::DecodeFailure(e.to_string()))
    }

    /// Decoder limits: any size a TGA header can hold, no allocation cap.
    pub fn decode_limits() -> Limits {
        let mut limits = Limits::no_limits();
        limits.max_image_width = Some(MAX_DIMENSION);
        limits.max_image_height = Some(MAX_DIMENSION);
        limits
    }
}

impl RasterSource for ImageRasterReader {
    /// Decodes an encoded image from memory.
    ///
    /// The header is read first so sizes the TGA format cannot hold are
    /// reported before any pixel memory is allocated. Channels are
    /// expanded to RGBA with an opaque alpha channel when the source has
    /// none, and 16-bit samples are reduced to 8 bits. A decode error
    /// surfaces as a single [`ConversionError::DecodeFailure`]; no
    /// partially decoded raster is returned.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use idtech3_tga_rs::image_pipeline::{ImageRasterReader, RasterSource};
    ///
    /// let reader = ImageRasterReader;
    /// let png_bytes = std::fs::read("image.png").unwrap();
    /// let raster = reader.read_raster(&png_bytes).unwrap();
    /// ```
    fn read_raster(&self, data: &[u8]) -> Result<Raster> {
        debug!("Decoding source image, {} bytes", data.len());

        let (width, height) = self.read_dimensions(data)?;
        debug!("Declared image size: {}x{}", width, height);
        check_dimensions(width, height)?;

        let mut reader = Self::open(data)?;
        reader.limits(Self::decode_limits());
        let decoded = reader
            .decode()
            .map_err(|e| ConversionError::DecodeFailure(e.to_string()))?;

        debug!("Decoded color type: {:?}", decoded.color());

        let rgba = decoded.into_rgba8();
        let (width, height) = rgba.dimensions();

        debug!("Decoded image: {}x{}", width, height);

        Raster::new(width, height, rgba.into_raw())
    }
}
