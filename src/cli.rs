//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure
//! - [`OutputFormat`] - Output format options, convertible to
//!   [`format::OutputFormat`](crate::format::OutputFormat)
//!
//! The argument struct also knows how to turn itself into the library's
//! configuration types, so `main` stays a thin driver.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::ParserConfig;
use crate::core::models::OutputConfig;

/// Parse a WhatsApp chat export into structured message records.
#[derive(Parser, Debug, Clone)]
#[command(name = "wa-export")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    wa-export _chat.txt
    wa-export WhatsApp_Chat/ -f json -o chat.json
    wa-export _chat.txt --format jsonl -t --ids -a
    wa-export _chat.txt --keep-system -vv")]
pub struct Args {
    /// Chat transcript (`_chat.txt`) or extracted export folder
    pub input: PathBuf,

    /// Path to output file [default: chat_messages.<format>]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Include timestamps in output
    #[arg(short = 't', long)]
    pub timestamps: bool,

    /// Include message IDs in output
    #[arg(long)]
    pub ids: bool,

    /// Include attachment filenames in output
    #[arg(short = 'a', long)]
    pub attachments: bool,

    /// Keep encryption notices and other system messages
    #[arg(long)]
    pub keep_system: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Output path, defaulting to `chat_messages.<ext>` for the chosen format.
    pub fn output_path(&self) -> String {
        self.output
            .clone()
            .unwrap_or_else(|| crate::format::OutputFormat::from(self.format).default_filename())
    }

    /// Columns requested on the command line.
    pub fn output_config(&self) -> OutputConfig {
        let mut config = OutputConfig::new();
        if self.timestamps {
            config = config.with_timestamps();
        }
        if self.ids {
            config = config.with_ids();
        }
        if self.attachments {
            config = config.with_attachments();
        }
        config
    }

    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new().with_skip_system_messages(!self.keep_system)
    }

    /// Default log directive for the `-v` count; `RUST_LOG` takes precedence.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// Pretty-printed JSON array
    Json,

    /// JSON Lines - one JSON object per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::format::OutputFormat::from(*self).fmt(f)
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}
