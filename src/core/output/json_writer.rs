//! JSON output writer.

use std::fs::File;
use std::io::Write;

use serde::Serialize;

use crate::Message;
use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::media::MediaKind;

/// Timestamp format for JSON output (local time, no zone).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Serialize)]
pub(super) struct JsonAttachment<'a> {
    filename: &'a str,
    #[serde(rename = "type")]
    kind: MediaKind,
}

/// Message structure for JSON and JSONL output.
/// Only includes optional fields enabled in `OutputConfig`.
#[derive(Serialize)]
pub(super) struct JsonMessage<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    sender: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    content: &'a str,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    forwarded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    attachment: Option<JsonAttachment<'a>>,
}

impl<'a> JsonMessage<'a> {
    pub(super) fn from_message(msg: &'a Message, config: &OutputConfig) -> Self {
        Self {
            id: config.include_ids.then_some(msg.id),
            timestamp: if config.include_timestamps {
                msg.timestamp
                    .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
            } else {
                None
            },
            sender: &msg.sender,
            kind: msg.kind.as_str(),
            content: &msg.content,
            forwarded: msg.is_forwarded,
            attachment: if config.include_attachments {
                msg.attachment.as_ref().map(|a| JsonAttachment {
                    filename: &a.filename,
                    kind: a.kind,
                })
            } else {
                None
            },
        }
    }
}

/// Writes messages to JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"sender": "Alice", "type": "text", "content": "Hello"},
///   {"sender": "Bob", "type": "image", "content": "<attached: a.jpg>"}
/// ]
/// ```
pub fn write_json(messages: &[Message], output_path: &str, config: &OutputConfig) -> Result<()> {
    let json = to_json(messages, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts messages to a pretty-printed JSON array.
///
/// Same format as `write_json`, but returns a String instead of writing to file.
pub fn to_json(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let json_messages: Vec<JsonMessage<'_>> = messages
        .iter()
        .map(|m| JsonMessage::from_message(m, config))
        .collect();

    Ok(serde_json::to_string_pretty(&json_messages)?)
}
