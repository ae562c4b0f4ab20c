//! Media classification by filename.
//!
//! WhatsApp replaces inline media with `<attached: FILENAME>` markers and ships
//! the files next to the transcript. Everything that needs to know what kind of
//! file a name refers to goes through [`classify_filename`], so the attachment
//! classifier and the export bundle always agree.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Image extensions (lowercase, without the dot).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff"];

/// Video extensions (lowercase, without the dot).
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "wmv", "flv", "webm"];

/// Audio extensions (lowercase, without the dot).
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "aac", "ogg", "m4a"];

/// Document extensions recognized as media files in an export folder.
///
/// Any attachment whose extension is not image/video/audio is classified as a
/// document regardless of this list; the list only decides which files of an
/// export are worth keeping.
pub const DOCUMENT_EXTENSIONS: &[&str] = &[
    "pdf", "doc", "docx", "txt", "rtf", "xls", "xlsx", "ppt", "pptx",
];

/// Extension WhatsApp uses for stickers.
pub const STICKER_EXTENSION: &str = "webp";

/// Case-sensitive marker WhatsApp puts in sticker filenames.
pub const STICKER_MARKER: &str = "STICKER";

/// Kind of media an attachment refers to.
///
/// # Example
///
/// ```rust
/// use wa_export::media::{MediaKind, classify_filename};
///
/// assert_eq!(classify_filename("IMG-0001.JPG"), MediaKind::Image);
/// assert_eq!(classify_filename("00000012-STICKER.webp"), MediaKind::Sticker);
/// assert_eq!(classify_filename("report.pdf"), MediaKind::Document);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Photos and other still images
    Image,
    /// WhatsApp stickers (`.webp` files with `STICKER` in the name)
    Sticker,
    /// Video clips
    Video,
    /// Voice notes and audio files
    Audio,
    /// Everything else
    Document,
}

impl MediaKind {
    /// Returns the lowercase name used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Sticker => "sticker",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
            MediaKind::Document => "document",
        }
    }

    /// Returns all media kinds.
    pub fn all() -> &'static [MediaKind] {
        &[
            MediaKind::Image,
            MediaKind::Sticker,
            MediaKind::Video,
            MediaKind::Audio,
            MediaKind::Document,
        ]
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the lowercased extension of `filename`, if it has one.
fn extension_lower(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

fn has_extension_in(ext: Option<&str>, table: &[&str]) -> bool {
    ext.is_some_and(|ext| table.contains(&ext))
}

/// Classifies a filename into a [`MediaKind`].
///
/// Precedence: sticker, image, video, audio, document. Extensions are matched
/// case-insensitively; the `STICKER` marker is matched case-sensitively.
pub fn classify_filename(filename: &str) -> MediaKind {
    let ext = extension_lower(filename);
    let ext = ext.as_deref();

    if filename.contains(STICKER_MARKER) && ext == Some(STICKER_EXTENSION) {
        return MediaKind::Sticker;
    }

    if has_extension_in(ext, IMAGE_EXTENSIONS) {
        MediaKind::Image
    } else if has_extension_in(ext, VIDEO_EXTENSIONS) {
        MediaKind::Video
    } else if has_extension_in(ext, AUDIO_EXTENSIONS) {
        MediaKind::Audio
    } else {
        MediaKind::Document
    }
}

/// Returns `true` if `filename` is a media file worth keeping from an export.
///
/// Covers the image, video and audio tables plus [`DOCUMENT_EXTENSIONS`].
pub fn is_media_file(filename: &str) -> bool {
    let ext = extension_lower(filename);
    let ext = ext.as_deref();

    [
        IMAGE_EXTENSIONS,
        VIDEO_EXTENSIONS,
        AUDIO_EXTENSIONS,
        DOCUMENT_EXTENSIONS,
    ]
    .iter()
    .any(|table| has_extension_in(ext, table))
}
