//! Reader for the files this crate writes.
//!
//! Only 32-bit run-length encoded truecolor images are understood. Pixels
//! come back exactly as stored: BGRA, bottom row first.

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raster::types::{Pixel, BYTES_PER_PIXEL};
use crate::image_pipeline::tga::header::{BITS_PER_PIXEL, HEADER_LEN, IMAGE_TYPE_RLE_TRUECOLOR};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedTga {
    pub width: u16,
    pub height: u16,
    pub pixels: Vec<Pixel>,
}

impl DecodedTga {
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_flattened()
    }
}

fn truncated(what: &str) -> ConversionError {
    ConversionError::DecodeFailure(format!("truncated TGA {}", what))
}

fn read_pixel(data: &[u8], offset: usize) -> Result<Pixel> {
    data.get(offset..offset + BYTES_PER_PIXEL)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or_else(|| truncated("packet data"))
}

/// Expands a type-10, 32 bpp TGA file back into its pixel buffer.
pub fn decode_rle_tga(data: &[u8]) -> Result<DecodedTga> {
    let header = data.get(..HEADER_LEN).ok_or_else(|| truncated("header"))?;

    if header[1] != 0 {
        return Err(ConversionError::DecodeFailure("colour-mapped TGA not supported".to_string()));
    }
    if header[2] != IMAGE_TYPE_RLE_TRUECOLOR {
        return Err(ConversionError::DecodeFailure(format!(
            "unsupported TGA image type {}",
            header[2]
        )));
    }
    if header[16] != BITS_PER_PIXEL {
        return Err(ConversionError::DecodeFailure(format!(
            "unsupported pixel depth {}",
            header[16]
        )));
    }

    let width = u16::from_le_bytes([header[12], header[13]]);
    let height = u16::from_le_bytes([header[14], header[15]]);
    let total = width as usize * height as usize;

    let mut pixels: Vec<Pixel> = Vec::with_capacity(total);
    let mut offset = HEADER_LEN + header[0] as usize;

    while pixels.len() < total {
        let packet_header = *data.get(offset).ok_or_else(|| truncated("packet header"))?;
        offset += 1;
        let count = (packet_header & 0x7F) as usize + 1;
        if pixels.len() + count > total {
            return Err(ConversionError::DecodeFailure(
                "packet runs past the end of the image".to_string(),
            ));
        }

        if packet_header & 0x80 != 0 {
            let pixel = read_pixel(data, offset)?;
            offset += BYTES_PER_PIXEL;
            pixels.extend(std::iter::repeat_n(pixel, count));
        } else {
            for _ in 0..count {
                pixels.push(read_pixel(data, offset)?);
                offset += BYTES_PER_PIXEL;
            }
        }
    }

    Ok(DecodedTga { width, height, pixels })
}
