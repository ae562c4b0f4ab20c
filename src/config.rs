//! Configuration types for the parser.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies. Output settings live in
//! [`core::models::OutputConfig`](crate::core::models::OutputConfig).
//!
//! # Example
//!
//! ```rust
//! use wa_export::config::ParserConfig;
//! use wa_export::parser::WhatsAppParser;
//!
//! let config = ParserConfig::new()
//!     .with_skip_system_messages(false);
//!
//! let parser = WhatsAppParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for WhatsApp export parsing.
///
/// # Example
///
/// ```rust
/// use wa_export::config::ParserConfig;
///
/// let config = ParserConfig::new()
///     .with_strip_document_preamble(false);
/// assert!(config.skip_system_messages);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Drop deletion notices, encryption banners and group notices (default: true)
    pub skip_system_messages: bool,

    /// Reduce `name • N pages <attached: ...>` to the marker for documents (default: true)
    pub strip_document_preamble: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            skip_system_messages: true,
            strip_document_preamble: true,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to skip system messages.
    #[must_use]
    pub fn with_skip_system_messages(mut self, skip: bool) -> Self {
        self.skip_system_messages = skip;
        self
    }

    /// Sets whether to strip the preamble of document attachments.
    #[must_use]
    pub fn with_strip_document_preamble(mut self, strip: bool) -> Self {
        self.strip_document_preamble = strip;
        self
    }
}
