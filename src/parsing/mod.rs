//! Building blocks of the export parser.
//!
//! Each stage is usable on its own:
//! - [`sanitize`] - invisible character set and stripping
//! - [`header`] - `[DD/MM/YYYY, HH:MM:SS] Sender: Body` recognition
//! - [`cursor`] - line cursor that folds continuation lines into a message
//! - [`attachment`] - `<attached: FILENAME>` detection and content cleanup
//! - [`system`] - system notice filter
//!
//! [`WhatsAppParser`](crate::parser::WhatsAppParser) wires them together.

pub mod attachment;
pub mod cursor;
pub mod header;
pub mod sanitize;
pub mod system;

// Re-export commonly used items
pub use attachment::{classify_body, find_attachment, strip_document_preamble};
pub use cursor::{LineCursor, RawMessage};
pub use header::{HeaderLine, is_header, match_header};
pub use sanitize::{is_invisible, strip_invisible, strip_leading_invisible};
pub use system::is_system_message;
