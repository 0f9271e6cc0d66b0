//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of messages - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one message per line - requires `json-output` feature
//! - [`features_to_csv`] / [`features_to_json`] / [`features_to_jsonl`] - the
//!   per-message feature table in the same three formats
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatrecon::Result<()> {
//! use chatrecon::core::output::{write_csv, write_json, write_jsonl, to_csv};
//! use chatrecon::core::models::OutputConfig;
//! use chatrecon::parser::TranscriptParser;
//!
//! let messages = TranscriptParser::new().parse("_chat.txt".as_ref())?;
//! let config = OutputConfig::new().with_timestamps();
//!
//! write_csv(&messages, "output.csv", &config)?;
//! write_json(&messages, "output.json", &config)?;
//! write_jsonl(&messages, "output.jsonl", &config)?;
//!
//! let csv_string = to_csv(&messages, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;
#[cfg(any(feature = "csv-output", feature = "json-output"))]
mod features_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
#[cfg(feature = "csv-output")]
pub use features_writer::features_to_csv;
#[cfg(feature = "json-output")]
pub use features_writer::{features_to_json, features_to_jsonl};

#[cfg(feature = "json-output")]
use serde::Serialize;

#[cfg(feature = "json-output")]
use crate::Message;
#[cfg(feature = "json-output")]
use crate::core::models::OutputConfig;
#[cfg(feature = "json-output")]
use crate::message::{ActionKind, ContentKind};

/// Borrowed view of a message for the JSON writers.
/// Only includes fields enabled in `OutputConfig`.
#[cfg(feature = "json-output")]
#[derive(Serialize)]
struct JsonRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    user: Option<&'a str>,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<ActionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    media: Option<ContentKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_auto: Option<bool>,
}

#[cfg(feature = "json-output")]
impl<'a> JsonRecord<'a> {
    fn new(msg: &'a Message, config: &OutputConfig) -> Self {
        Self {
            timestamp: config
                .include_timestamps
                .then(|| msg.timestamp.format("%Y-%m-%dT%H:%M:%SZ").to_string()),
            user: msg.user(),
            content: &msg.content,
            action: msg.action.filter(|_| config.include_actions),
            media: msg.media.filter(|_| config.include_media),
            is_auto: config.include_auto.then_some(msg.is_auto),
        }
    }
}
