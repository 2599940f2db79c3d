use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::types::Raster;
use crate::image_pipeline::tga::types::ConversionConfig;

pub trait TgaWriter {
    fn write_tga(&self, raster: &Raster, output: &mut dyn Write, config: &ConversionConfig) -> Result<()>;
}
