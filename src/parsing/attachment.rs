//! Attachment marker detection.
//!
//! Media in an export shows up as `<attached: FILENAME>` inside the message
//! body. Document attachments are usually preceded by a
//! `report.pdf • 65 pages` preamble that only repeats the filename, so it is
//! dropped from the visible content.

use std::sync::LazyLock;

use regex::Regex;

use crate::media::{MediaKind, classify_filename};
use crate::message::Attachment;

static ATTACHMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<attached: ([^>]+)>").expect("attachment pattern is valid"));

static DOCUMENT_PREAMBLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^•]+)•[^<]*(<attached:[^>]+>)").expect("preamble pattern is valid")
});

/// Finds the first attachment marker in an invisible-free body.
///
/// ```rust
/// use wa_export::media::MediaKind;
/// use wa_export::parsing::attachment::find_attachment;
///
/// let att = find_attachment("look <attached: picture.jpg>").unwrap();
/// assert_eq!(att.filename, "picture.jpg");
/// assert_eq!(att.kind, MediaKind::Image);
/// ```
pub fn find_attachment(body: &str) -> Option<Attachment> {
    let caps = ATTACHMENT_RE.captures(body)?;
    let filename = caps.get(1)?.as_str();
    Some(Attachment::new(filename, classify_filename(filename)))
}

/// Replaces a leading `name • details <attached: ...>` run with the marker.
///
/// Text after the marker is kept. Bodies without a `•` before the marker are
/// returned unchanged.
pub fn strip_document_preamble(body: &str) -> String {
    DOCUMENT_PREAMBLE_RE.replace(body, "$2").into_owned()
}

/// Detects the attachment of a cleaned body and produces the final content.
///
/// The preamble is only stripped for document attachments, and only when
/// `strip_preamble` is set.
pub fn classify_body(body: String, strip_preamble: bool) -> (String, Option<Attachment>) {
    let Some(attachment) = find_attachment(&body) else {
        return (body, None);
    };

    let content = if strip_preamble && attachment.kind == MediaKind::Document {
        strip_document_preamble(&body)
    } else {
        body
    };

    (content, Some(attachment))
}
