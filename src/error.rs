//! Unified error types for wa-export.
//!
//! The parser itself never fails on text input: malformed lines are treated
//! as noise or folded into the message being collected. Everything in this
//! module belongs to the layers around the parser: reading files, walking
//! extracted export folders and writing output.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for wa-export operations.
///
/// # Example
///
/// ```rust
/// use wa_export::error::Result;
/// use wa_export::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ExportError>;

/// The error type for all wa-export operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The export contains no chat transcript.
    ///
    /// Raised when an extracted export folder (or a set of archive entries)
    /// has media files but nothing named `_chat.txt` / `chat.txt`. Without
    /// it there is nothing to parse.
    #[error("No chat content found{}. Looking for files ending with \"_chat.txt\"", searched_in(.searched))]
    NoChatContent {
        /// The folder that was searched, if the entries came from disk
        searched: Option<PathBuf>,
    },

    /// The chat transcript is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The input or requested output format is not usable.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Failed while walking an extracted export folder.
    #[cfg(feature = "bundle")]
    #[error("Failed to read export folder: {0}")]
    Walk(#[from] walkdir::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for ExportError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ExportError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

fn searched_in(searched: &Option<PathBuf>) -> String {
    searched
        .as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

impl ExportError {
    /// Creates a "no chat content" error, optionally naming the searched folder.
    pub fn no_chat_content(searched: Option<PathBuf>) -> Self {
        ExportError::NoChatContent { searched }
    }

    /// Creates a UTF-8 error for the given context.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ExportError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ExportError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ExportError::Io(_))
    }

    /// Returns `true` if the export had no chat transcript.
    pub fn is_no_chat_content(&self) -> bool {
        matches!(self, ExportError::NoChatContent { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ExportError::InvalidFormat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn invalid_utf8() -> std::string::FromUtf8Error {
        String::from_utf8(vec![0xff, 0xfe, 0xfd]).unwrap_err()
    }

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ExportError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_no_chat_content_display() {
        let err = ExportError::no_chat_content(None);
        let display = err.to_string();
        assert!(display.starts_with("No chat content found."));
        assert!(display.contains("_chat.txt"));
    }

    #[test]
    fn test_no_chat_content_with_folder() {
        let err = ExportError::no_chat_content(Some(PathBuf::from("/exports/family")));
        assert!(err.to_string().contains("in /exports/family"));
    }

    #[test]
    fn test_invalid_format_display() {
        let err = ExportError::invalid_format("output", "Unknown file extension: '.txt'");
        let display = err.to_string();
        assert!(display.contains("Invalid output format"));
        assert!(display.contains(".txt"));
    }

    #[test]
    fn test_utf8_error_display() {
        let err = ExportError::utf8("chat transcript", invalid_utf8());
        let display = err.to_string();
        assert!(display.contains("UTF-8"));
        assert!(display.contains("chat transcript"));
    }

    #[test]
    fn test_from_utf8_error() {
        let err: ExportError = invalid_utf8().into();
        assert!(err.to_string().contains("output conversion"));
    }

    #[test]
    fn test_error_source_chain() {
        let err = ExportError::utf8("chat transcript", invalid_utf8());
        assert!(err.source().is_some());

        let err = ExportError::no_chat_content(None);
        assert!(err.source().is_none());
    }

    #[test]
    fn test_is_methods() {
        let io_err = ExportError::from(io::Error::other("boom"));
        assert!(io_err.is_io());
        assert!(!io_err.is_no_chat_content());
        assert!(!io_err.is_invalid_format());

        let missing = ExportError::no_chat_content(None);
        assert!(missing.is_no_chat_content());
        assert!(!missing.is_io());

        let format = ExportError::invalid_format("output", "bad");
        assert!(format.is_invalid_format());
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err = ExportError::from(json_err);
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<u32> {
            Ok(42)
        }

        fn returns_err() -> Result<u32> {
            Err(ExportError::no_chat_content(None))
        }

        assert_eq!(returns_ok().unwrap(), 42);
        assert!(returns_err().is_err());
    }
}
