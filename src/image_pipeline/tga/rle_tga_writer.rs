use std::io::{BufWriter, Write};
use tracing::debug;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::types::Raster;
use crate::image_pipeline::tga::header::TgaHeader;
use crate::image_pipeline::tga::packet::{Packet, PacketEncoder};
use crate::image_pipeline::tga::reorder::reorder;
use crate::image_pipeline::tga::types::ConversionConfig;
use crate::image_pipeline::tga::writer::TgaWriter;

/// Writes 32-bit RLE truecolor TGA files readable by idTech 3.
pub struct RleTgaWriter;

impl TgaWriter for RleTgaWriter {
    fn write_tga(&self, raster: &Raster, output: &mut dyn Write, config: &ConversionConfig) -> Result<()> {
        debug!("Encoding TGA image: {}x{}", raster.width, raster.height);

        // dimensions are checked before any pixel work
        let header = TgaHeader::new(raster.width, raster.height)?;
        let buffer = reorder(raster)?;

        let mut sink = BufWriter::with_capacity(config.buffer_capacity, output);
        header.write_to(&mut sink)?;

        let mut rle_packets = 0usize;
        let mut raw_packets = 0usize;
        let mut payload_bytes = 0usize;
        for packet in PacketEncoder::new(buffer.pixels()) {
            match packet {
                Packet::Rle { .. } => rle_packets += 1,
                Packet::Raw { .. } => raw_packets += 1,
            }
            payload_bytes += packet.encoded_len();
            packet.write_to(&mut sink)?;
        }

        sink.flush()?;

        debug!(
            rle_packets,
            raw_packets,
            payload_bytes,
            "TGA encoding complete"
        );
        Ok(())
    }
}
