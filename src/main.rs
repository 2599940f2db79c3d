use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use idtech3_tga_rs::image_pipeline::{derive_output_path, ConversionConfig, PngToTgaPipeline};
use idtech3_tga_rs::logger;

use tracing::debug;

/// Convert a PNG image to an idTech 3 compatible RLE TGA.
#[derive(Parser, Debug)]
#[command(name = "convert-png-to-idtech3-tga", version, about, long_about = None)]
struct Args {
    /// Input PNG image
    input: PathBuf,

    /// Output TGA path (defaults to the input path with a .tga extension)
    output: Option<PathBuf>,
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = ConversionConfig::default();

    let output = match args.output {
        Some(output) => output,
        None => derive_output_path(&args.input, &config)?,
    };

    let pipeline = PngToTgaPipeline::new(config);
    debug!("Sink buffer capacity: {}", pipeline.config().buffer_capacity);

    pipeline
        .convert_file(&args.input, &output)
        .with_context(|| format!("converting {}", args.input.display()))?;

    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // help and version go to stdout and succeed, misuse fails
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            return match e.print() {
                Ok(()) => code,
                Err(_) => ExitCode::FAILURE,
            };
        }
    };

    logger::init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
