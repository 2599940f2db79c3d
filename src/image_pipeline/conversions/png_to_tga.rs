use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    raster::{ImageRasterReader, Raster, RasterSource},
    tga::{check_dimensions, ConversionConfig, RleTgaWriter, TgaWriter},
};

pub struct PngToTgaPipeline<R: RasterSource, W: TgaWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl PngToTgaPipeline<ImageRasterReader, RleTgaWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: ImageRasterReader,
            writer: RleTgaWriter,
            config,
        }
    }
}

impl<R: RasterSource, W: TgaWriter> PngToTgaPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        check_dimensions(width, height)
    }

    /// Decodes the input and checks it can be stored as a TGA.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn decode(&self, input_data: &[u8]) -> Result<Raster> {
        let raster = {
            let _span = tracing::info_span!("decode_raster").entered();
            self.reader.read_raster(input_data)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = raster.width,
                height = raster.height
            ).entered();
            self.validate_dimensions(raster.width, raster.height)?;
        }

        Ok(raster)
    }

    #[instrument(skip(self, raster, output), fields(width = raster.width, height = raster.height))]
    pub fn encode(&self, raster: &Raster, output: &mut dyn Write) -> Result<()> {
        let _span = tracing::info_span!("encode_tga").entered();
        self.writer.write_tga(raster, output, &self.config)
    }

    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting PNG to TGA conversion");

        let raster = self.decode(input_data)?;
        self.encode(&raster, output)?;

        info!(
            width = raster.width,
            height = raster.height,
            "Conversion complete"
        );
        Ok(())
    }

    /// Converts `input_path` into `output_path`. The output file is only
    /// created once the input has decoded and passed validation.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputUnreadable(format!("{}: {}", input_path.display(), e))
            })?
        };

        let raster = self.decode(&input_data)?;

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                ConversionError::OutputWriteFailure(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.encode(&raster, &mut output_file).map_err(|e| match e {
            ConversionError::OutputWriteFailure(msg) => {
                ConversionError::OutputWriteFailure(format!("{}: {}", output_path.display(), msg))
            }
            other => other,
        })?;

        info!(
            width = raster.width,
            height = raster.height,
            "Conversion complete"
        );
        Ok(())
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
