//! Entry point for parsing transcripts.
//!
//! [`TranscriptParser`] wires the line-level [`parsing`](crate::parsing)
//! stages and the [`streaming`](crate::streaming) assembler to files, readers
//! and strings.
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatrecon::Result<()> {
//! use chatrecon::parser::TranscriptParser;
//! use std::path::Path;
//!
//! let parser = TranscriptParser::new();
//!
//! // Parse entire file into memory
//! let messages = parser.parse(Path::new("_chat.txt"))?;
//!
//! // Or stream for large files
//! for result in parser.stream(Path::new("_chat.txt"))? {
//!     let msg = result?;
//!     println!("{:?}: {}", msg.user, msg.content);
//! }
//! # Ok(())
//! # }
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::Message;
use crate::config::ParserConfig;
use crate::error::Result;
use crate::streaming::TranscriptIterator;

/// Parser for exported chat transcripts.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Creates a parser optimized for streaming large files.
    pub fn with_streaming() -> Self {
        Self {
            config: ParserConfig::streaming(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns the human-readable name of this parser.
    pub fn name(&self) -> &'static str {
        "Chat transcript"
    }

    /// Streams messages from any buffered reader.
    ///
    /// Progress is reported only in bytes and lines, since the total size is
    /// unknown.
    pub fn stream_reader<R: BufRead>(&self, reader: R) -> TranscriptIterator<R> {
        TranscriptIterator::new(reader).with_max_lines(self.config.max_lines)
    }

    /// Opens a transcript file and returns a lazy iterator over its messages.
    ///
    /// # Errors
    ///
    /// Returns [`ChatreconError::Io`](crate::ChatreconError::Io) if the file
    /// cannot be opened. Parse errors are yielded by the iterator.
    pub fn stream(&self, path: &Path) -> Result<TranscriptIterator<BufReader<File>>> {
        let file = File::open(path)?;
        let file_size = file.metadata()?.len();
        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        Ok(self.stream_reader(reader).with_total_bytes(file_size))
    }

    /// Streams messages (convenience method accepting &str path).
    pub fn stream_file(&self, path: &str) -> Result<TranscriptIterator<BufReader<File>>> {
        self.stream(Path::new(path))
    }

    /// Parses a transcript file and returns all messages.
    ///
    /// # Errors
    ///
    /// Fails with [`ChatreconError::InvalidStart`](crate::ChatreconError::InvalidStart)
    /// if the file does not begin with a header line, or with an I/O error.
    pub fn parse(&self, path: &Path) -> Result<Vec<Message>> {
        let messages = self.stream(path)?.collect::<Result<Vec<_>>>()?;
        tracing::info!(
            path = %path.display(),
            messages = messages.len(),
            "parsed transcript"
        );
        Ok(messages)
    }

    /// Parses a transcript file (convenience method accepting &str path).
    pub fn parse_file(&self, path: &str) -> Result<Vec<Message>> {
        self.parse(Path::new(path))
    }

    /// Parses transcript content already in memory.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatrecon::parser::TranscriptParser;
    /// use chatrecon::ActionKind;
    ///
    /// let messages = TranscriptParser::new()
    ///     .parse_str("[01/02/2023, 10:00:00] Alice created group Friends")
    ///     .unwrap();
    ///
    /// assert_eq!(messages[0].action, Some(ActionKind::CreateGroup));
    /// assert_eq!(messages[0].content, "Friends");
    /// ```
    pub fn parse_str(&self, content: &str) -> Result<Vec<Message>> {
        self.stream_reader(content.as_bytes())
            .with_total_bytes(content.len() as u64)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::ActionKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "[01/02/2023, 10:00:00] Alice created group Friends
[01/02/2023, 10:00:01] Alice added Bob
[01/02/2023, 10:00:02] Bob: Hello
everyone
[01/02/2023, 10:00:03] Bob left
";

    #[test]
    fn test_parser_name() {
        assert_eq!(TranscriptParser::new().name(), "Chat transcript");
    }

    #[test]
    fn test_parse_str() {
        let messages = TranscriptParser::new().parse_str(SAMPLE).unwrap();
        let actions: Vec<_> = messages.iter().filter_map(|m| m.action).collect();
        assert_eq!(
            actions,
            vec![
                ActionKind::CreateGroup,
                ActionKind::AddUser,
                ActionKind::Message,
                ActionKind::Leave
            ]
        );
        assert_eq!(messages[2].content, "Hello\neveryone");
    }

    #[test]
    fn test_parse_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let parser = TranscriptParser::new();
        let messages = parser.parse(file.path()).unwrap();
        assert_eq!(messages.len(), 4);
    }

    #[test]
    fn test_parse_missing_file() {
        let err = TranscriptParser::new()
            .parse_file("/definitely/not/here/_chat.txt")
            .unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_parse_invalid_start() {
        let err = TranscriptParser::new()
            .parse_str("hello\n[01/02/2023, 10:00:00] Alice: hi")
            .unwrap_err();
        assert!(err.is_invalid_start());
    }

    #[test]
    fn test_config_line_limit_applies() {
        let parser = TranscriptParser::with_config(ParserConfig::new().with_max_lines(2));
        let messages = parser.parse_str(SAMPLE).unwrap();
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn test_stream_reports_total_bytes() {
        use crate::streaming::MessageIterator;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let mut iter = TranscriptParser::with_streaming()
            .stream(file.path())
            .unwrap();
        assert_eq!(iter.total_bytes(), Some(SAMPLE.len() as u64));
        let _: Vec<_> = iter.by_ref().collect();
        assert_eq!(iter.bytes_processed(), SAMPLE.len() as u64);
    }
}
