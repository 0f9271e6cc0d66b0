//! Configuration types for the transcript parser.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use chatrecon::config::ParserConfig;
//! use chatrecon::parser::TranscriptParser;
//!
//! let config = ParserConfig::new()
//!     .with_buffer_size(128 * 1024)
//!     .with_max_lines(10_000);
//!
//! let parser = TranscriptParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for transcript parsing.
///
/// # Line limit
///
/// With `max_lines` set, only the first N physical lines are read. The stop
/// point is handled exactly like the end of the file: the message being
/// assembled at that point is still emitted, possibly without continuation
/// lines that came after the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Buffer size for file reading (default: 64KB)
    pub buffer_size: usize,

    /// Stop after this many physical lines (default: no limit)
    #[serde(default)]
    pub max_lines: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            buffer_size: 64 * 1024, // 64KB
            max_lines: None,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with a larger read buffer for big exports.
    pub fn streaming() -> Self {
        Self {
            buffer_size: 256 * 1024, // 256KB for streaming
            ..Self::default()
        }
    }

    /// Sets the buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Limits parsing to the first `lines` physical lines.
    #[must_use]
    pub fn with_max_lines(mut self, lines: usize) -> Self {
        self.max_lines = Some(lines);
        self
    }

    /// Removes any line limit.
    #[must_use]
    pub fn without_max_lines(mut self) -> Self {
        self.max_lines = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_config_default() {
        let config = ParserConfig::default();
        assert_eq!(config.buffer_size, 64 * 1024);
        assert!(config.max_lines.is_none());
    }

    #[test]
    fn test_parser_config_streaming() {
        let config = ParserConfig::streaming();
        assert_eq!(config.buffer_size, 256 * 1024);
        assert!(config.max_lines.is_none());
    }

    #[test]
    fn test_parser_config_builder_chain() {
        let config = ParserConfig::new()
            .with_buffer_size(1024)
            .with_max_lines(50);
        assert_eq!(config.buffer_size, 1024);
        assert_eq!(config.max_lines, Some(50));

        let unlimited = config.without_max_lines();
        assert!(unlimited.max_lines.is_none());
    }

    #[test]
    fn test_parser_config_serde() {
        let config = ParserConfig::new().with_max_lines(10);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ParserConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);

        let partial: ParserConfig = serde_json::from_str(r#"{"buffer_size": 4096}"#).unwrap();
        assert_eq!(partial.buffer_size, 4096);
        assert!(partial.max_lines.is_none());
    }
}
