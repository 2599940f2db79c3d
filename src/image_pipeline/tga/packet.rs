//! Run-length packet encoding for TGA image type 10.
//!
//! Every packet starts with one header byte: the high bit is set for a
//! run-length packet and clear for a raw packet, the low seven bits hold
//! `count - 1`. A run-length packet is followed by a single pixel, a raw
//! packet by `count` literal pixels.
//!
//! Packing is greedy. A raw packet is closed one pixel before the next
//! pair of identical pixels so that pair opens a run-length packet, even
//! where folding the pair into the raw packet would be smaller. Readers of
//! existing assets rely on this exact byte layout.

use std::io::{self, Write};

use crate::image_pipeline::raster::types::{Pixel, BYTES_PER_PIXEL};

/// Most pixels a single packet can describe.
pub const MAX_PACKET_PIXELS: usize = 128;

const RLE_FLAG: u8 = 0x80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Packet<'a> {
    /// `count` copies of `pixel`, 2..=128.
    Rle { count: u8, pixel: Pixel },
    /// 1..=128 literal pixels.
    Raw { pixels: &'a [Pixel] },
}

impl Packet<'_> {
    /// Number of pixels this packet covers.
    pub fn count(&self) -> usize {
        match self {
            Packet::Rle { count, .. } => *count as usize,
            Packet::Raw { pixels } => pixels.len(),
        }
    }

    pub fn header_byte(&self) -> u8 {
        let count = self.count();
        debug_assert!(
            (1..=MAX_PACKET_PIXELS).contains(&count),
            "packet covers {} pixels",
            count
        );
        let low = (count.wrapping_sub(1) & 0x7F) as u8;
        match self {
            Packet::Rle { .. } => RLE_FLAG | low,
            Packet::Raw { .. } => low,
        }
    }

    /// Bytes this packet occupies in the file, header byte included.
    pub fn encoded_len(&self) -> usize {
        match self {
            Packet::Rle { .. } => 1 + BYTES_PER_PIXEL,
            Packet::Raw { pixels } => 1 + pixels.len() * BYTES_PER_PIXEL,
        }
    }

    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&[self.header_byte()])?;
        match self {
            Packet::Rle { pixel, .. } => writer.write_all(pixel),
            Packet::Raw { pixels } => writer.write_all(pixels.as_flattened()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// At a packet boundary, looking for a run starting at the cursor.
    ScanningForRun,
    /// Collecting literal pixels starting at the cursor.
    AccumulatingRaw { count: usize },
}

/// Single forward pass over TGA-ordered pixels yielding packets.
#[derive(Debug)]
pub struct PacketEncoder<'a> {
    pixels: &'a [Pixel],
    pos: usize,
    state: ScanState,
}

impl<'a> PacketEncoder<'a> {
    pub fn new(pixels: &'a [Pixel]) -> Self {
        Self {
            pixels,
            pos: 0,
            state: ScanState::ScanningForRun,
        }
    }

    /// Length of the run of identical pixels starting at `start`, capped.
    fn run_length(&self, start: usize) -> usize {
        let first = self.pixels[start];
        self.pixels[start..]
            .iter()
            .take(MAX_PACKET_PIXELS)
            .take_while(|&&p| p == first)
            .count()
    }

    /// Whether a raw packet of `count` pixels starting at `start` may take
    /// the next pixel. It may not when that pixel begins a duplicate pair.
    fn raw_can_extend(&self, start: usize, count: usize) -> bool {
        let next = start + count;
        if count >= MAX_PACKET_PIXELS || next >= self.pixels.len() {
            return false;
        }
        !matches!(self.pixels.get(next + 1), Some(after) if *after == self.pixels[next])
    }
}

impl<'a> Iterator for PacketEncoder<'a> {
    type Item = Packet<'a>;

    fn next(&mut self) -> Option<Packet<'a>> {
        let pixels = self.pixels;
        loop {
            match self.state {
                ScanState::ScanningForRun => {
                    if self.pos >= pixels.len() {
                        return None;
                    }
                    let run = self.run_length(self.pos);
                    if run >= 2 {
                        let packet = Packet::Rle {
                            count: run as u8,
                            pixel: pixels[self.pos],
                        };
                        self.pos += run;
                        return Some(packet);
                    }
                    self.state = ScanState::AccumulatingRaw { count: 1 };
                }
                ScanState::AccumulatingRaw { count } => {
                    if self.raw_can_extend(self.pos, count) {
                        self.state = ScanState::AccumulatingRaw { count: count + 1 };
                        continue;
                    }
                    let packet = Packet::Raw {
                        pixels: &pixels[self.pos..self.pos + count],
                    };
                    self.pos += count;
                    self.state = ScanState::ScanningForRun;
                    return Some(packet);
                }
            }
        }
    }
}
