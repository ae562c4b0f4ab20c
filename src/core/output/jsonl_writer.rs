//! JSON Lines (JSONL) output writer.
//!
//! One message per line, which suits line-oriented tools (`jq -c`, `grep`)
//! and incremental ingestion.

use std::fs::File;
use std::io::{BufWriter, Write};

use super::json_writer::JsonMessage;
use crate::Message;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Writes messages to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"sender":"Alice","type":"text","content":"Hello"}
/// {"sender":"Bob","type":"image","content":"<attached: a.jpg>"}
/// ```
pub fn write_jsonl(messages: &[Message], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for msg in messages {
        let line = serde_json::to_string(&JsonMessage::from_message(msg, config))?;
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts messages to a JSONL string.
pub fn to_jsonl(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let mut out = String::new();
    for msg in messages {
        out.push_str(&serde_json::to_string(&JsonMessage::from_message(msg, config))?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader};
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_jsonl_basic() {
        let messages = vec![
            Message::new(1, "Alice", "Hello"),
            Message::new(2, "Bob", "line one\nline two"),
        ];

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_jsonl(&messages, path, &OutputConfig::new()).unwrap();

        let file = std::fs::File::open(path).unwrap();
        let reader = BufReader::new(file);
        let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();

        // embedded newlines stay escaped inside one line
        assert_eq!(lines.len(), 2);

        let msg1: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(msg1["sender"], "Alice");
        assert_eq!(msg1["type"], "text");

        let msg2: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(msg2["content"], "line one\nline two");
    }

    #[test]
    fn test_to_jsonl_matches_file_output() {
        let messages = vec![Message::new(1, "Alice", "Hello")];
        let config = OutputConfig::new().with_ids();

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();
        write_jsonl(&messages, path, &config).unwrap();

        let from_file = std::fs::read_to_string(path).unwrap();
        assert_eq!(to_jsonl(&messages, &config).unwrap(), from_file);
        assert!(!from_file.contains('['));
    }
}
