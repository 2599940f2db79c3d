use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    InputUnreadable(String),

    #[error("Failed to decode input image: {0}")]
    DecodeFailure(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(u32, u32),

    #[error("TGA supports up to 65535x65535 pixels, got {0}x{1}")]
    DimensionOverflow(u32, u32),

    #[error("Failed to write output file: {0}")]
    OutputWriteFailure(String),

    #[error("Cannot derive output path: {0}")]
    OutputPathUnderivable(String),
}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        ConversionError::OutputWriteFailure(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;
