use std::path::{Path, PathBuf};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::tga::types::ConversionConfig;

/// Output path used when none is given: the input path with its source
/// extension swapped for the target one. The file name only has to end in
/// `.png` (case-sensitive), so a file called just `.png` becomes `.tga`.
pub fn derive_output_path(input: &Path, config: &ConversionConfig) -> Result<PathBuf> {
    let suffix = format!(".{}", config.source_extension);
    let stem = input
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(suffix.as_str()));

    match stem {
        Some(stem) => Ok(input.with_file_name(format!("{}.{}", stem, config.target_extension))),
        None => Err(ConversionError::OutputPathUnderivable(format!(
            "input must end with {} when output is not provided: {}",
            suffix,
            input.display()
        ))),
    }
}
