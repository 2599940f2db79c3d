//! Fixed 18-byte TGA file header.

use std::io::{self, Write};

use crate::image_pipeline::common::error::{ConversionError, Result};

pub const HEADER_LEN: usize = 18;

/// Largest width or height the 16-bit header fields can carry.
pub const MAX_DIMENSION: u32 = u16::MAX as u32;

/// Run-length encoded truecolor.
pub const IMAGE_TYPE_RLE_TRUECOLOR: u8 = 10;

pub const BITS_PER_PIXEL: u8 = 32;

/// 8 alpha bits, bottom-left origin.
pub const IMAGE_DESCRIPTOR: u8 = 8;

/// Rejects sizes a TGA header cannot describe: zero on either axis, or
/// more than 65535 pixels.
pub fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(ConversionError::InvalidDimensions(width, height));
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(ConversionError::DimensionOverflow(width, height));
    }

    Ok(())
}

/// Header of a 32-bit RLE truecolor TGA with no image ID and no colour map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TgaHeader {
    width: u16,
    height: u16,
}

impl TgaHeader {
    /// Builds a header, checking the dimensions fit the format.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_dimensions(width, height)?;

        Ok(Self {
            width: width as u16,
            height: height as u16,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Serialized header, multi-byte fields little-endian.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0u8; HEADER_LEN];
        // [0] id length, [1] colour-map type, [3..8] colour-map spec,
        // [8..12] x/y origin: all zero
        bytes[2] = IMAGE_TYPE_RLE_TRUECOLOR;
        bytes[12..14].copy_from_slice(&self.width.to_le_bytes());
        bytes[14..16].copy_from_slice(&self.height.to_le_bytes());
        bytes[16] = BITS_PER_PIXEL;
        bytes[17] = IMAGE_DESCRIPTOR;
        bytes
    }

    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.to_bytes())
    }
}
