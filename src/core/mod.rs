//! Output-side processing for parsed messages.
//!
//! This module contains:
//! - [`models`] - Output configuration
//! - [`stats`] - Per-kind counts and media resolution summary
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use wa_export::core::{
//!     ExportStats, Message, OutputConfig,
//!     write_csv, write_json, write_jsonl,
//! };
//! # }
//! ```

pub mod models;
pub mod output;
pub mod stats;

pub use models::OutputConfig;
pub use stats::ExportStats;

pub use crate::Message;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
