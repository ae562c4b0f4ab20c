//! # wa-export
//!
//! A Rust library for turning WhatsApp chat exports into structured message
//! records.
//!
//! ## Overview
//!
//! A WhatsApp export is a plain-text transcript (`_chat.txt`), optionally
//! accompanied by the media files it references. Each message starts with a
//! bracketed header line:
//!
//! ```text
//! [26/06/2024, 10:30:00] Alice: Hello
//! [26/06/2024, 10:31:12] Bob: ‎<attached: 00000014-PHOTO-2024-06-26-10-31-12.jpg>
//! ```
//!
//! The library splits the transcript into messages, rejoins multi-line
//! bodies, strips invisible direction marks, drops system notices, detects
//! attachments and classifies them by file extension.
//!
//! ## Quick Start
//!
//! ```rust
//! use wa_export::prelude::*;
//!
//! let text = "[01/02/2024, 09:15:00] Alice: Morning!\n\
//!             [01/02/2024, 09:16:30] Bob: <attached: 00000001-PHOTO-2024-02-01.jpg>";
//!
//! let messages = parse_export(text);
//!
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[1].kind, MessageKind::Image);
//! assert_eq!(messages[1].attachment_filename(), Some("00000001-PHOTO-2024-02-01.jpg"));
//! ```
//!
//! ## Export folders
//!
//! ```rust,no_run
//! # #[cfg(feature = "bundle")]
//! # fn main() -> wa_export::Result<()> {
//! use wa_export::prelude::*;
//!
//! let export = ExportBundle::from_dir("WhatsApp Chat - Family")?.parse(&ParserConfig::new());
//! for name in export.missing_media() {
//!     println!("missing: {name}");
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "bundle"))]
//! # fn main() {}
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`]: [`WhatsAppParser`] and [`parse_export`]
//! - [`parsing`]: line-level building blocks (header matcher, continuation
//!   cursor, invisible-mark stripping, attachment and system-notice detection)
//! - [`message`]: [`Message`], [`MessageKind`](message::MessageKind), [`Attachment`](message::Attachment)
//! - [`media`]: extension tables and [`classify_filename`](media::classify_filename)
//! - [`bundle`]: chat text plus media library
//! - [`config`]: [`ParserConfig`](config::ParserConfig)
//! - [`core`]: output configuration, statistics and writers
//! - [`format`]: [`OutputFormat`](format::OutputFormat) dispatch
//! - [`error`]: [`ExportError`] and [`Result`]
//! - [`prelude`]: Convenient re-exports

pub mod bundle;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod media;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ExportError, Result};
pub use message::Message;
pub use parser::{WhatsAppParser, parse_export};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use wa_export::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;
    pub use crate::message::{Attachment, MessageKind};
    pub use crate::media::MediaKind;

    pub use crate::error::{ExportError, Result};

    pub use crate::config::ParserConfig;
    pub use crate::parser::{WhatsAppParser, parse_export};

    pub use crate::bundle::{ExportBundle, MediaFile, MediaLibrary, ParsedExport};

    pub use crate::core::{ExportStats, OutputConfig};
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
}
