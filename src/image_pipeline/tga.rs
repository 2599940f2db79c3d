//! TGA writing module
//!
//! This module produces run-length encoded 32-bit truecolor TGA files laid
//! out the way idTech 3 loaders expect them.

mod writer;
mod rle_tga_writer;
pub mod header;
pub mod reorder;
pub mod packet;
pub mod decoder;
pub mod types;

pub use writer::TgaWriter;
pub use rle_tga_writer::RleTgaWriter;
pub use header::{check_dimensions, TgaHeader, HEADER_LEN, MAX_DIMENSION};
pub use reorder::{reorder, ReorderedBuffer};
pub use packet::{Packet, PacketEncoder, MAX_PACKET_PIXELS};
pub use decoder::{decode_rle_tga, DecodedTga};
pub use types::{ConversionConfig, ConversionConfigBuilder};
