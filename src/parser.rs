//! WhatsApp TXT export parser.
//!
//! Parses exports in the bracketed day-first convention:
//!
//! ```text
//! [26/06/2024, 10:30:00] Alice: Hello
//! [26/06/2024, 10:31:12] Bob: ‎<attached: 00000014-PHOTO-2024-06-26-10-31-12.jpg>
//! [26/06/2024, 10:32:40] Alice: Forwarded
//! A long article
//!
//! with paragraphs
//! ```
//!
//! Parsing never fails: lines that do not belong to a message are dropped and
//! the result is always a (possibly empty) list.
//!
//! # Example
//!
//! ```rust
//! use wa_export::parser::WhatsAppParser;
//! use wa_export::message::MessageKind;
//!
//! let parser = WhatsAppParser::new();
//! let messages = parser.parse_str("[26/06/2024, 10:30:00] You: Hello");
//!
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].id, 1);
//! assert_eq!(messages[0].kind, MessageKind::Text);
//! ```

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::Message;
use crate::config::ParserConfig;
use crate::error::{ExportError, Result};
use crate::parsing::{LineCursor, RawMessage, classify_body, is_system_message, strip_invisible};

/// Parser for WhatsApp TXT exports.
///
/// The parser holds only its configuration; every call is independent, so a
/// single instance can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct WhatsAppParser {
    config: ParserConfig,
}

impl WhatsAppParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns the human-readable name of this parser.
    pub fn name(&self) -> &'static str {
        "WhatsApp"
    }

    /// Parses an export file.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] if the file cannot be read and
    /// [`ExportError::Utf8`] if it is not valid UTF-8.
    pub fn parse(&self, path: &Path) -> Result<Vec<Message>> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes)
            .map_err(|e| ExportError::utf8(format!("chat transcript {}", path.display()), e))?;
        Ok(self.parse_str(&text))
    }

    /// Parses export text into messages with ids `1..=N`.
    pub fn parse_str(&self, text: &str) -> Vec<Message> {
        let mut cursor = LineCursor::new(text);
        let mut messages = Vec::new();

        for raw in cursor.by_ref() {
            let next_id = messages.len() as u64 + 1;
            if let Some(message) = self.assemble(raw, next_id) {
                messages.push(message);
            }
        }

        debug!(
            lines = cursor.lines_consumed(),
            messages = messages.len(),
            "parsed WhatsApp export"
        );

        messages
    }

    /// Turns a collected header + body into a record, or `None` for system notices.
    fn assemble(&self, raw: RawMessage<'_>, id: u64) -> Option<Message> {
        let sender = raw.header.sender.trim();
        let body = strip_invisible(&raw.body);

        if self.config.skip_system_messages && is_system_message(sender, &body) {
            debug!(line = raw.start_line, sender, "skipping system message");
            return None;
        }

        let (content, attachment) = classify_body(body, self.config.strip_document_preamble);

        let mut message = Message::new(id, sender, content);
        message.timestamp = raw.header.timestamp();
        if message.timestamp.is_none() {
            debug!(line = raw.start_line, "header has an impossible date or time");
        }

        if let Some(attachment) = attachment {
            trace!(
                line = raw.start_line,
                filename = %attachment.filename,
                kind = %attachment.kind,
                "found attachment"
            );
            message = message.with_attachment(attachment);
        }

        Some(message)
    }
}

/// Parses export text with the default configuration.
///
/// ```rust
/// let messages = wa_export::parse_export("");
/// assert!(messages.is_empty());
/// ```
pub fn parse_export(text: &str) -> Vec<Message> {
    WhatsAppParser::new().parse_str(text)
}
