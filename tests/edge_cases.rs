//! Edge case tests for the export parser
//!
//! These tests cover boundary conditions of line matching, continuation
//! handling, attachment detection and system filtering.

use wa_export::prelude::*;

// =========================================================================
// Empty and noise-only input
// =========================================================================

#[test]
fn test_empty_input() {
    assert!(parse_export("").is_empty());
}

#[test]
fn test_whitespace_only_input() {
    assert!(parse_export("   \n\n\t\n").is_empty());
}

#[test]
fn test_noise_before_first_header_is_dropped() {
    let text = "\
Chat export for Family
-----------------------
[01/05/2024, 08:00:00] Alice: Good morning";
    let messages = parse_export(text);

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "Good morning");
}

#[test]
fn test_only_noise() {
    assert!(parse_export("hello\nworld\n01/05/2024, 08:00 - Alice: android style").is_empty());
}

// =========================================================================
// Header matching
// =========================================================================

#[test]
fn test_malformed_headers_fold_into_previous_message() {
    let text = "\
[01/05/2024, 08:00:00] Alice: start
[01/05/2024 08:01:00] Bob: no comma
[1/5/2024, 08:02:00] Bob: single digits
[01/05/24, 08:03:00] Bob: short year
[01/05/2024, 08:04] Bob: no seconds";
    let messages = parse_export(text);

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content.lines().count(), 5);
}

#[test]
fn test_colon_in_body() {
    let messages = parse_export("[01/05/2024, 08:00:00] Alice: meet at 10:30: bring snacks");
    assert_eq!(messages[0].sender, "Alice");
    assert_eq!(messages[0].content, "meet at 10:30: bring snacks");
}

#[test]
fn test_sender_is_trimmed() {
    let messages = parse_export("[01/05/2024, 08:00:00]   Alice  : hi");
    assert_eq!(messages[0].sender, "Alice");
}

#[test]
fn test_phone_number_sender() {
    let messages = parse_export("[01/05/2024, 08:00:00] +44 7700 900123: hi");
    assert_eq!(messages[0].sender, "+44 7700 900123");
}

#[test]
fn test_empty_body() {
    let messages = parse_export("[01/05/2024, 08:00:00] Alice: ");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "");
    assert_eq!(messages[0].kind, MessageKind::Text);
}

#[test]
fn test_impossible_date_keeps_message_without_timestamp() {
    let messages = parse_export("[31/02/2024, 25:61:00] Alice: time travel");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "time travel");
    assert!(messages[0].timestamp.is_none());
}

#[test]
fn test_leap_day() {
    let messages = parse_export("[29/02/2024, 23:59:59] Alice: leap");
    let ts = messages[0].timestamp.unwrap();
    assert_eq!(ts.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-02-29 23:59:59");
}

#[test]
fn test_invisible_marks_before_header_and_after_colon() {
    let text = "\u{FEFF}\u{200E}[01/05/2024, 08:00:00] Alice:\u{200F} \u{200E}hi";
    let messages = parse_export(text);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "hi");
}

// =========================================================================
// Continuation lines
// =========================================================================

#[test]
fn test_blank_continuation_lines_are_kept_as_newlines() {
    let text = "[01/05/2024, 08:00:00] Alice: a\n\n   \nb";
    assert_eq!(parse_export(text)[0].content, "a\n\n\nb");
}

#[test]
fn test_trailing_blank_lines_stay_in_body() {
    let text = "[01/05/2024, 08:00:00] Alice: a\n\n[01/05/2024, 08:01:00] Bob: b";
    let messages = parse_export(text);
    assert_eq!(messages[0].content, "a\n");
    assert_eq!(messages[1].content, "b");
}

#[test]
fn test_continuation_invisible_marks_stripped() {
    let text = "[01/05/2024, 08:00:00] Alice: a\n\u{200E}b\u{200B}c";
    assert_eq!(parse_export(text)[0].content, "a\nbc");
}

#[test]
fn test_identical_consecutive_messages_are_preserved() {
    let line = "[01/05/2024, 08:00:00] Alice: same";
    let messages = parse_export(&format!("{line}\n{line}\n{line}"));
    assert_eq!(messages.len(), 3);
    assert_eq!(
        messages.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

// =========================================================================
// Attachments
// =========================================================================

#[test]
fn test_extension_case_insensitive() {
    let messages = parse_export("[01/05/2024, 08:00:00] Alice: <attached: IMG_001.JPEG>");
    assert_eq!(messages[0].kind, MessageKind::Image);
}

#[test]
fn test_sticker_marker_is_case_sensitive() {
    let messages = parse_export(
        "[01/05/2024, 08:00:00] Alice: <attached: a-sticker.webp>\n\
         [01/05/2024, 08:01:00] Alice: <attached: a-STICKER.png>",
    );
    assert_eq!(messages[0].kind, MessageKind::Image);
    assert_eq!(messages[1].kind, MessageKind::Image);
}

#[test]
fn test_unknown_extension_is_document() {
    let messages = parse_export(
        "[01/05/2024, 08:00:00] Alice: <attached: contact.vcf>\n\
         [01/05/2024, 08:01:00] Alice: <attached: README>\n\
         [01/05/2024, 08:02:00] Alice: <attached: voice.opus>",
    );
    assert!(messages.iter().all(|m| m.kind == MessageKind::Document));
    assert_eq!(messages[1].attachment_filename(), Some("README"));
}

#[test]
fn test_first_marker_wins() {
    let messages = parse_export(
        "[01/05/2024, 08:00:00] Alice: <attached: a.mp4> and <attached: b.jpg>",
    );
    assert_eq!(messages[0].kind, MessageKind::Video);
    assert_eq!(messages[0].attachment_filename(), Some("a.mp4"));
}

#[test]
fn test_marker_on_continuation_line() {
    let messages = parse_export("[01/05/2024, 08:00:00] Alice: look\n<attached: clip.mov>");
    assert_eq!(messages[0].kind, MessageKind::Video);
    assert_eq!(messages[0].content, "look\n<attached: clip.mov>");
}

#[test]
fn test_preamble_kept_for_non_documents() {
    let body = "holiday • 3 photos <attached: beach.jpg>";
    let messages = parse_export(&format!("[01/05/2024, 08:00:00] Alice: {body}"));
    assert_eq!(messages[0].content, body);
}

#[test]
fn test_document_preamble_keeps_trailing_text() {
    let messages = parse_export(
        "[01/05/2024, 08:00:00] Alice: CV.docx • 2 pages <attached: CV.docx> please review",
    );
    assert_eq!(messages[0].kind, MessageKind::Document);
    assert_eq!(messages[0].content, "<attached: CV.docx> please review");
}

#[test]
fn test_document_preamble_can_be_kept() {
    let parser = WhatsAppParser::with_config(ParserConfig::new().with_strip_document_preamble(false));
    let body = "CV.docx • 2 pages <attached: CV.docx>";
    let messages = parser.parse_str(&format!("[01/05/2024, 08:00:00] Alice: {body}"));
    assert_eq!(messages[0].content, body);
}

#[test]
fn test_invisible_marks_inside_marker() {
    let messages =
        parse_export("[01/05/2024, 08:00:00] Alice: <attached:\u{200E} photo.png\u{200E}>");
    assert_eq!(messages[0].attachment_filename(), Some("photo.png"));
}

// =========================================================================
// System messages
// =========================================================================

#[test]
fn test_system_notices_are_dropped() {
    let text = "\
[01/05/2024, 08:00:00] Family: Messages and calls are end-to-end encrypted.
[01/05/2024, 08:00:01] You: You created group \"Family\"
[01/05/2024, 08:00:02] You: You removed Bob
[01/05/2024, 08:00:03] You: You changed the group name to \"Fam\"
[01/05/2024, 08:00:04] Alice: You deleted this message
[01/05/2024, 08:00:05] Alice: still here";
    let messages = parse_export(text);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id, 1);
    assert_eq!(messages[0].content, "still here");
}

#[test]
fn test_reserved_sender_is_dropped() {
    let messages = parse_export(
        "[01/05/2024, 08:00:00] Save: anything\n\
         [01/05/2024, 08:00:01] Saved: kept",
    );
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender, "Saved");
}

#[test]
fn test_notice_in_continuation_drops_whole_message() {
    let messages = parse_export("[01/05/2024, 08:00:00] Alice: hi\nYou deleted this message");
    assert!(messages.is_empty());
}

#[test]
fn test_localized_notices_are_not_filtered() {
    let messages = parse_export("[01/05/2024, 08:00:00] Tú: Eliminaste este mensaje.");
    assert_eq!(messages.len(), 1);
}

// =========================================================================
// Forwarded flag
// =========================================================================

#[test]
fn test_forwarded_is_case_sensitive_substring() {
    let messages = parse_export(
        "[01/05/2024, 08:00:00] Alice: Forwarded many times\n\
         [01/05/2024, 08:01:00] Alice: I forwarded it\n\
         [01/05/2024, 08:02:00] Alice: it was Forwarded",
    );
    assert!(messages[0].is_forwarded);
    assert!(!messages[1].is_forwarded);
    assert!(messages[2].is_forwarded);
}

// =========================================================================
// Unicode
// =========================================================================

#[test]
fn test_unicode_senders_and_content() {
    let text = "\
[01/05/2024, 08:00:00] Иван: Привет мир!
[01/05/2024, 08:01:00] 田中太郎: こんにちは世界！
[01/05/2024, 08:02:00] محمد: مرحبا 🎉";
    let messages = parse_export(text);

    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].sender, "Иван");
    assert_eq!(messages[1].content, "こんにちは世界！");
    assert_eq!(messages[2].content, "مرحبا 🎉");
}

#[test]
fn test_very_long_content() {
    let long = "x".repeat(200_000);
    let messages = parse_export(&format!("[01/05/2024, 08:00:00] Alice: {long}"));
    assert_eq!(messages[0].content.len(), 200_000);
}
