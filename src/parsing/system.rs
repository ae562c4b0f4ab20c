//! Platform-generated notices that are not participant content.
//!
//! The list only covers English exports. Localized exports phrase these
//! notices differently and pass through unfiltered.

/// Sender name used by a non-content notice.
pub const RESERVED_SENDER: &str = "Save";

/// Case-sensitive substrings that mark a system notice.
pub const SYSTEM_NOTICES: &[&str] = &[
    "You deleted this message",
    "end-to-end encrypted",
    "You created group",
    "You removed",
    "You changed the group name",
];

/// Returns `true` if the message is a system notice.
///
/// `sender` is expected trimmed and `body` free of invisible characters.
///
/// ```rust
/// use wa_export::parsing::is_system_message;
///
/// assert!(is_system_message("Alice", "You deleted this message."));
/// assert!(is_system_message("Save", "anything"));
/// assert!(!is_system_message("Alice", "Hello"));
/// ```
pub fn is_system_message(sender: &str, body: &str) -> bool {
    sender == RESERVED_SENDER || SYSTEM_NOTICES.iter().any(|notice| body.contains(notice))
}
