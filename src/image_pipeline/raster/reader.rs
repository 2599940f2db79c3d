use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::types::Raster;

pub trait RasterSource {
    fn read_raster(&self, data: &[u8]) -> Result<Raster>;
}
