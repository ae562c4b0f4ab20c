//! Structured message records produced by the parser.
//!
//! # Overview
//!
//! A [`Message`] is one participant message from a WhatsApp export:
//! - **Always present**: `id`, `sender`, `content`, `kind`, `is_forwarded`
//! - **Optional**: `timestamp`, `attachment`
//!
//! # Examples
//!
//! ```
//! use wa_export::message::{Attachment, Message, MessageKind};
//! use wa_export::media::MediaKind;
//!
//! let msg = Message::new(1, "Alice", "<attached: IMG-0001.jpg>")
//!     .with_attachment(Attachment::new("IMG-0001.jpg", MediaKind::Image));
//!
//! assert_eq!(msg.kind, MessageKind::Image);
//! assert!(!msg.is_forwarded);
//! ```

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::media::MediaKind;

/// What a message carries.
///
/// Text messages have no attachment; every other kind mirrors the
/// [`MediaKind`] of the attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Plain text, no attachment marker
    #[default]
    Text,
    /// Image attachment
    Image,
    /// Sticker attachment
    Sticker,
    /// Video attachment
    Video,
    /// Audio attachment
    Audio,
    /// Any other attachment
    Document,
}

impl MessageKind {
    /// Returns the lowercase name used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Text => "text",
            MessageKind::Image => "image",
            MessageKind::Sticker => "sticker",
            MessageKind::Video => "video",
            MessageKind::Audio => "audio",
            MessageKind::Document => "document",
        }
    }

    /// Returns all message kinds.
    pub fn all() -> &'static [MessageKind] {
        &[
            MessageKind::Text,
            MessageKind::Image,
            MessageKind::Sticker,
            MessageKind::Video,
            MessageKind::Audio,
            MessageKind::Document,
        ]
    }
}

impl From<MediaKind> for MessageKind {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Image => MessageKind::Image,
            MediaKind::Sticker => MessageKind::Sticker,
            MediaKind::Video => MessageKind::Video,
            MediaKind::Audio => MessageKind::Audio,
            MediaKind::Document => MessageKind::Document,
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file referenced by an `<attached: FILENAME>` marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Filename exactly as written in the marker.
    pub filename: String,

    /// Media kind derived from the filename.
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

impl Attachment {
    /// Creates an attachment record.
    pub fn new(filename: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            filename: filename.into(),
            kind,
        }
    }
}

/// A parsed WhatsApp message.
///
/// # Serialization
///
/// `kind` is serialized as `type`, the attachment is omitted when absent and
/// timestamps use ISO 8601 without a zone (`2024-06-26T10:30:00`), since
/// exports record local wall-clock time.
///
/// ```
/// use wa_export::Message;
///
/// let msg = Message::new(1, "Alice", "Hello!");
/// let json = serde_json::to_string(&msg)?;
///
/// assert!(json.contains(r#""type":"text""#));
/// assert!(!json.contains("attachment"));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Sequence number in emission order, starting at 1.
    pub id: u64,

    /// Message body with invisible formatting characters removed.
    ///
    /// Multi-line messages keep their line breaks, including blank lines.
    pub content: String,

    /// When the message was sent (local wall-clock time).
    ///
    /// `None` only when the header carried an impossible calendar date.
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,

    /// Display name of the author.
    pub sender: String,

    /// What the message carries.
    #[serde(rename = "type")]
    pub kind: MessageKind,

    /// Whether the body mentions `Forwarded`.
    #[serde(default)]
    pub is_forwarded: bool,

    /// Referenced attachment, if the body contained a marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub attachment: Option<Attachment>,
}

impl Message {
    /// Creates a text message.
    ///
    /// `is_forwarded` is derived from the content.
    pub fn new(id: u64, sender: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            id,
            is_forwarded: content.contains("Forwarded"),
            content,
            timestamp: None,
            sender: sender.into(),
            kind: MessageKind::Text,
            attachment: None,
        }
    }

    /// Builder method to set the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, ts: NaiveDateTime) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Builder method to attach a file; the message kind follows the attachment.
    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.kind = attachment.kind.into();
        self.attachment = Some(attachment);
        self
    }

    /// Returns `true` if the message references a file.
    pub fn has_attachment(&self) -> bool {
        self.attachment.is_some()
    }

    /// Returns the attachment filename, if any.
    pub fn attachment_filename(&self) -> Option<&str> {
        self.attachment.as_ref().map(|a| a.filename.as_str())
    }
}
