//! PNG to TGA conversion configuration types

/// Configuration for PNG to TGA conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Capacity of the buffered writer placed in front of the output
    pub buffer_capacity: usize,
    /// Extension recognised on inputs when the output path is derived
    pub source_extension: String,
    /// Extension given to derived output paths
    pub target_extension: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: 8 * 1024,
            source_extension: "png".to_string(),
            target_extension: "tga".to_string(),
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    buffer_capacity: Option<usize>,
    source_extension: Option<String>,
    target_extension: Option<String>,
}

impl ConversionConfigBuilder {
    pub fn buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = Some(capacity);
        self
    }

    pub fn source_extension(mut self, extension: impl Into<String>) -> Self {
        self.source_extension = Some(extension.into());
        self
    }

    pub fn target_extension(mut self, extension: impl Into<String>) -> Self {
        self.target_extension = Some(extension.into());
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            buffer_capacity: self.buffer_capacity.unwrap_or(default.buffer_capacity).max(1),
            source_extension: self.source_extension.unwrap_or(default.source_extension),
            target_extension: self.target_extension.unwrap_or(default.target_extension),
        }
    }
}
