//! Summary counts over parsed messages.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::Message;
use crate::bundle::MediaLibrary;
use crate::message::MessageKind;

/// Statistics about a parsed export.
///
/// Mirrors the per-type breakdown a chat viewer offers as filter tabs.
///
/// # Example
///
/// ```rust
/// use wa_export::core::ExportStats;
/// use wa_export::message::MessageKind;
///
/// let messages = wa_export::parse_export(
///     "[01/01/2024, 10:00:00] A: hi\n[01/01/2024, 10:01:00] B: <attached: a.mp3>",
/// );
/// let stats = ExportStats::from_messages(&messages);
///
/// assert_eq!(stats.total, 2);
/// assert_eq!(stats.count(MessageKind::Audio), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportStats {
    /// Number of messages.
    pub total: usize,
    /// Messages per kind; kinds with no messages are absent.
    pub by_kind: BTreeMap<&'static str, usize>,
    /// Messages flagged as forwarded.
    pub forwarded: usize,
    /// Messages with an attachment marker.
    pub with_attachment: usize,
    /// Attachments found in the media library, when one was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_media: Option<usize>,
}

impl ExportStats {
    /// Counts kinds, forwards and attachments.
    pub fn from_messages(messages: &[Message]) -> Self {
        let mut stats = Self {
            total: messages.len(),
            ..Self::default()
        };

        for msg in messages {
            *stats.by_kind.entry(msg.kind.as_str()).or_default() += 1;
            if msg.is_forwarded {
                stats.forwarded += 1;
            }
            if msg.has_attachment() {
                stats.with_attachment += 1;
            }
        }

        stats
    }

    /// Adds how many attachments the library can resolve.
    #[must_use]
    pub fn with_media(mut self, messages: &[Message], media: &MediaLibrary) -> Self {
        self.resolved_media = Some(
            messages
                .iter()
                .filter(|msg| media.resolve(msg).is_some())
                .count(),
        );
        self
    }

    /// Number of messages of the given kind.
    pub fn count(&self, kind: MessageKind) -> usize {
        self.by_kind.get(kind.as_str()).copied().unwrap_or(0)
    }

    /// Attachments without a file in the library, if a library was supplied.
    pub fn missing_media(&self) -> Option<usize> {
        self.resolved_media
            .map(|resolved| self.with_attachment.saturating_sub(resolved))
    }
}
