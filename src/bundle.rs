//! Extracted exports: the chat transcript plus its media files.
//!
//! "Export chat → Attach media" produces a `_chat.txt` transcript next to the
//! photos, voice notes and documents it references. [`ExportBundle`] picks the
//! transcript out of a set of files and keeps the media in a [`MediaLibrary`]
//! keyed by basename, which is exactly what `<attached: ...>` markers refer to.
//!
//! Unpacking the `.zip` is left to the caller: feed the decoded entries to
//! [`ExportBundle::from_entries`], or point [`ExportBundle::from_dir`] at an
//! already extracted folder.
//!
//! # Example
//!
//! ```rust
//! use wa_export::bundle::ExportBundle;
//! use wa_export::config::ParserConfig;
//!
//! let entries = vec![
//!     ("Chat/_chat.txt", b"[26/06/2024, 10:30:00] Bob: <attached: a.jpg>".to_vec()),
//!     ("Chat/a.jpg", vec![0xff, 0xd8, 0xff]),
//! ];
//!
//! let bundle = ExportBundle::from_entries(entries)?;
//! let parsed = bundle.parse(&ParserConfig::default());
//!
//! assert!(parsed.media_for(&parsed.messages[0]).is_some());
//! assert!(parsed.missing_media().is_empty());
//! # Ok::<(), wa_export::ExportError>(())
//! ```

use std::collections::HashMap;
#[cfg(feature = "bundle")]
use std::fs;
#[cfg(feature = "bundle")]
use std::path::Path;

use tracing::debug;
#[cfg(feature = "bundle")]
use tracing::warn;

use crate::Message;
use crate::config::ParserConfig;
use crate::error::{ExportError, Result};
use crate::media::{MediaKind, classify_filename, is_media_file};
use crate::parser::WhatsAppParser;

/// Basename suffix of the transcript in "with media" exports.
pub const CHAT_FILE_SUFFIX: &str = "_chat.txt";

/// Basename of the transcript in some exports.
pub const CHAT_FILE_NAME: &str = "chat.txt";

/// Returns `true` if `basename` names the chat transcript.
pub fn is_chat_file(basename: &str) -> bool {
    basename.ends_with(CHAT_FILE_SUFFIX) || basename == CHAT_FILE_NAME
}

/// Returns the last component of a `/`- or `\`-separated path.
fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// A media file shipped with an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    /// Basename, as referenced by attachment markers.
    pub filename: String,
    /// Kind derived from the filename.
    pub kind: MediaKind,
    /// Raw file content.
    pub data: Vec<u8>,
}

impl MediaFile {
    /// Creates a media file, classifying it by name.
    pub fn new(filename: impl Into<String>, data: Vec<u8>) -> Self {
        let filename = filename.into();
        Self {
            kind: classify_filename(&filename),
            filename,
            data,
        }
    }

    /// Size of the content in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Read-only lookup from attachment filename to media content.
#[derive(Debug, Clone, Default)]
pub struct MediaLibrary {
    files: HashMap<String, MediaFile>,
}

impl MediaLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file under its basename, returning any file it replaced.
    pub fn insert(&mut self, file: MediaFile) -> Option<MediaFile> {
        self.files.insert(file.filename.clone(), file)
    }

    /// Looks up a file by basename.
    pub fn get(&self, filename: &str) -> Option<&MediaFile> {
        self.files.get(filename)
    }

    /// Returns `true` if a file with this basename is present.
    pub fn contains(&self, filename: &str) -> bool {
        self.files.contains_key(filename)
    }

    /// Finds the file referenced by a message's attachment.
    pub fn resolve(&self, message: &Message) -> Option<&MediaFile> {
        self.get(message.attachment_filename()?)
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if there are no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterates over the files in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &MediaFile> {
        self.files.values()
    }
}

/// Result of parsing a bundle.
#[derive(Debug, Clone)]
pub struct ParsedExport {
    /// Parsed messages, ids `1..=N`.
    pub messages: Vec<Message>,
    /// Media shipped with the export.
    pub media: MediaLibrary,
}

impl ParsedExport {
    /// Finds the media file for a message, if it has one and it was shipped.
    pub fn media_for(&self, message: &Message) -> Option<&MediaFile> {
        self.media.resolve(message)
    }

    /// Attachment filenames referenced by messages but absent from the library,
    /// in message order.
    pub fn missing_media(&self) -> Vec<&str> {
        self.messages
            .iter()
            .filter_map(Message::attachment_filename)
            .filter(|name| !self.media.contains(name))
            .collect()
    }
}

/// Chat transcript plus media library of one export.
#[derive(Debug, Clone, Default)]
pub struct ExportBundle {
    chat_text: String,
    media: MediaLibrary,
}

impl ExportBundle {
    /// Wraps a bare `.txt` export, which has no media.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            chat_text: text.into(),
            media: MediaLibrary::new(),
        }
    }

    /// Builds a bundle from `(path, content)` pairs, e.g. decoded zip entries.
    ///
    /// The first transcript found wins; media files are keyed by basename and
    /// anything else is ignored.
    ///
    /// # Errors
    ///
    /// [`ExportError::NoChatContent`] if no transcript is among the entries,
    /// [`ExportError::Utf8`] if the transcript is not valid UTF-8.
    pub fn from_entries<I, P, B>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, B)>,
        P: AsRef<str>,
        B: Into<Vec<u8>>,
    {
        let mut chat: Option<Vec<u8>> = None;
        let mut media = MediaLibrary::new();

        for (path, data) in entries {
            let name = basename(path.as_ref());
            if is_chat_file(name) {
                if chat.is_none() {
                    debug!(file = name, "found chat transcript");
                    chat = Some(data.into());
                }
            } else if is_media_file(name) {
                media.insert(MediaFile::new(name, data.into()));
            }
        }

        let chat = chat.ok_or_else(|| ExportError::no_chat_content(None))?;
        Self::assemble(chat, media)
    }

    /// Builds a bundle from an extracted export folder, searched recursively.
    ///
    /// Media files that cannot be read are skipped with a warning.
    ///
    /// # Errors
    ///
    /// [`ExportError::NoChatContent`] if the folder has no transcript,
    /// [`ExportError::Walk`] / [`ExportError::Io`] if it cannot be read.
    #[cfg(feature = "bundle")]
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut chat: Option<Vec<u8>> = None;
        let mut media = MediaLibrary::new();

        for entry in walkdir::WalkDir::new(dir).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if is_chat_file(&name) {
                if chat.is_none() {
                    debug!(file = %entry.path().display(), "found chat transcript");
                    chat = Some(fs::read(entry.path())?);
                }
            } else if is_media_file(&name) {
                match fs::read(entry.path()) {
                    Ok(data) => {
                        media.insert(MediaFile::new(&*name, data));
                    }
                    Err(e) => {
                        warn!(file = %entry.path().display(), error = %e, "skipping unreadable media file");
                    }
                }
            }
        }

        let chat = chat.ok_or_else(|| ExportError::no_chat_content(Some(dir.to_path_buf())))?;
        Self::assemble(chat, media)
    }

    fn assemble(chat: Vec<u8>, media: MediaLibrary) -> Result<Self> {
        let chat_text =
            String::from_utf8(chat).map_err(|e| ExportError::utf8("chat transcript", e))?;
        debug!(
            chat_bytes = chat_text.len(),
            media_files = media.len(),
            "loaded export bundle"
        );
        Ok(Self { chat_text, media })
    }

    /// The transcript text.
    pub fn chat_text(&self) -> &str {
        &self.chat_text
    }

    /// The media library.
    pub fn media(&self) -> &MediaLibrary {
        &self.media
    }

    /// Parses the transcript and hands over the media library.
    pub fn parse(self, config: &ParserConfig) -> ParsedExport {
        let messages = WhatsAppParser::with_config(*config).parse_str(&self.chat_text);
        ParsedExport {
            messages,
            media: self.media,
        }
    }
}
