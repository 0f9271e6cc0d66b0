//! # Chatrecon
//!
//! A Rust library for reconstructing messages from exported chat transcripts.
//!
//! ## Overview
//!
//! A transcript is a plain text file in which every message starts with a
//! bracketed header line:
//!
//! ```text
//! [01/02/2023, 10:00:00] Alice: Hello
//! world
//! [01/02/2023, 10:00:05] Bob: 😂 lol
//! [01/02/2023, 10:01:00] Bob added Carol
//! ```
//!
//! Lines without a header continue the previous message. Chatrecon turns such
//! a file into a lazy stream of [`Message`] records, each classified by the
//! group event it represents ([`ActionKind`]) and, for chat messages, by its
//! content ([`ContentKind`]: media placeholder, laughter or plain text).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatrecon::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let parser = TranscriptParser::new();
//!     let messages = parser.parse("_chat.txt".as_ref())?;
//!
//!     // Keep only messages from one user
//!     let filter = FilterConfig::new().with_user("Alice");
//!     let messages = apply_filters(messages, &filter);
//!
//!     write_json(&messages, "output.json", &OutputConfig::all())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Streaming
//!
//! Records are produced one at a time and only the message being assembled is
//! kept in memory:
//!
//! ```rust,no_run
//! use chatrecon::parser::TranscriptParser;
//!
//! let parser = TranscriptParser::with_streaming();
//!
//! for result in parser.stream("_chat.txt".as_ref())? {
//!     let msg = result?;
//!     println!("{} {:?}: {}", msg.timestamp, msg.user, msg.content);
//! }
//! # Ok::<(), chatrecon::ChatreconError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser), the entry point
//! - [`parsing`] - line-level stages: header grammar, body and content classifiers
//! - [`streaming`] - the message assembler and [`MessageIterator`](streaming::MessageIterator)
//! - [`message`] - [`Message`], [`ActionKind`], [`ContentKind`]
//! - [`config`] - [`ParserConfig`](config::ParserConfig)
//! - [`core`] - filtering, user aliases, per-message features, statistics, output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and format dispatch
//! - [`error`] - [`ChatreconError`], [`Result`]
//! - [`prelude`] - convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;
pub mod streaming;

// Re-export the main types at the crate root for convenience
pub use error::{ChatreconError, Result};
pub use message::{ActionKind, ContentKind, Message};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatrecon::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ChatreconError, Result};
    pub use crate::message::{ActionKind, ContentKind, Message};

    pub use crate::config::ParserConfig;
    pub use crate::parser::TranscriptParser;
    pub use crate::streaming::{MessageIterator, TranscriptIterator};

    pub use crate::core::aliases::UserAliases;
    pub use crate::core::features::MessageFeatures;
    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::models::OutputConfig;
    pub use crate::core::stats::{ChatStats, UserStats};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::OutputFormat;
}
