//! Pipeline conversions module
//!
//! This module contains orchestration logic for image format conversions.

mod png_to_tga;
mod output_path;


pub use png_to_tga::PngToTgaPipeline;
pub use output_path::derive_output_path;
