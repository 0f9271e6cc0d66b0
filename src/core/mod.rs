//! Processing of reconstructed messages.
//!
//! This module contains:
//! - [`models`] - output configuration
//! - [`filter`] - message filtering by date, user and event kind
//! - [`aliases`] - mapping raw user names to display names
//! - [`features`] - per-message feature rows (date parts and 0/1 counts)
//! - [`stats`] - aggregate statistics per chat and per user
//! - [`output`] - format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use chatrecon::core::{
//!     ChatStats, FilterConfig, OutputConfig, UserAliases,
//!     apply_filters, write_csv, write_json, write_jsonl,
//! };
//! # }
//! ```

pub mod aliases;
pub mod features;
pub mod filter;
pub mod models;
pub mod output;
pub mod stats;

pub use aliases::UserAliases;
pub use features::MessageFeatures;
pub use filter::{FilterConfig, apply_filters};
pub use models::OutputConfig;
pub use stats::{ChatStats, UserStats, hour_name};

pub use crate::Message;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
