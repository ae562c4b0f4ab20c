//! Output configuration shared by all writers.

/// Controls which optional fields are included in the output.
///
/// `sender`, `type` and `content` are always written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Include timestamps in output
    pub include_timestamps: bool,
    /// Include message IDs in output
    pub include_ids: bool,
    /// Include attachment filenames in output
    pub include_attachments: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables every optional field.
    pub fn all() -> Self {
        Self {
            include_timestamps: true,
            include_ids: true,
            include_attachments: true,
        }
    }

    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.include_timestamps = true;
        self
    }

    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.include_ids = true;
        self
    }

    #[must_use]
    pub fn with_attachments(mut self) -> Self {
        self.include_attachments = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_config_builder() {
        let config = OutputConfig::new().with_ids().with_attachments();
        assert!(config.include_ids);
        assert!(config.include_attachments);
        assert!(!config.include_timestamps);
        assert_eq!(OutputConfig::all(), config.with_timestamps());
    }
}
