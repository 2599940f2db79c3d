//! Raster decoding module
//!
//! This module turns encoded source images into straight-alpha RGBA rasters.

mod reader;
mod image_reader;
pub mod types;

pub use reader::RasterSource;
pub use image_reader::ImageRasterReader;
pub use types::{Pixel, Raster, BYTES_PER_PIXEL};
