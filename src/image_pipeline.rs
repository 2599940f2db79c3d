//! Image processing pipeline module
//!
//! This module provides a structured approach to image format conversions,
//! with separate modules for raster decoding, TGA writing, and conversion orchestration.

pub mod raster;
pub mod tga;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    Result,
};

pub use raster::{
    Pixel,
    Raster,
    RasterSource,
    ImageRasterReader,
};

pub use tga::{
    ConversionConfig,
    ConversionConfigBuilder,
    TgaWriter,
    RleTgaWriter,
    TgaHeader,
    ReorderedBuffer,
    Packet,
    PacketEncoder,
    DecodedTga,
    reorder,
    decode_rle_tga,
};

pub use conversions::{
    PngToTgaPipeline,
    derive_output_path,
};
