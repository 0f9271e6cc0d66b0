//! Message assembler: the line-by-line state machine.
//!
//! The assembler is either idle (nothing seen yet) or accumulating exactly one
//! message. A header line emits the current message and starts the next one;
//! any other line is appended to the current message. A non-header line
//! while idle means the input is not a transcript, and the stream ends with
//! [`ChatreconError::InvalidStart`].

use std::io::BufRead;
use std::mem;

use crate::Message;
use crate::error::{ChatreconError, Result};
use crate::parsing::{message_from_header, strip_line_ending, try_parse_header};

use super::MessageIterator;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    Accumulating(Message),
}

/// Lazy iterator over the messages of a transcript.
///
/// Reads one line at a time and holds at most one message in memory. Yields
/// messages in the order of their header lines. After an error the iterator
/// is exhausted.
pub struct TranscriptIterator<R: BufRead> {
    reader: R,
    total_bytes: Option<u64>,
    bytes_read: u64,
    lines_read: usize,
    max_lines: Option<usize>,
    line_buffer: String,
    state: State,
    finished: bool,
}

impl<R: BufRead> TranscriptIterator<R> {
    /// Creates an iterator over `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            total_bytes: None,
            bytes_read: 0,
            lines_read: 0,
            max_lines: None,
            line_buffer: String::with_capacity(4096),
            state: State::Idle,
            finished: false,
        }
    }

    /// Sets the input size used for progress reporting.
    #[must_use]
    pub fn with_total_bytes(mut self, total: u64) -> Self {
        self.total_bytes = Some(total);
        self
    }

    /// Stops reading after `max_lines` physical lines.
    #[must_use]
    pub fn with_max_lines(mut self, max_lines: Option<usize>) -> Self {
        self.max_lines = max_lines;
        self
    }

    fn read_line(&mut self) -> std::io::Result<bool> {
        self.line_buffer.clear();
        let bytes = self.reader.read_line(&mut self.line_buffer)?;
        if bytes == 0 {
            return Ok(false);
        }
        self.bytes_read += bytes as u64;
        self.lines_read += 1;
        Ok(true)
    }

    /// Feeds the line in `line_buffer` to the state machine.
    ///
    /// Returns the previous message when the line starts a new one.
    fn process_line(&mut self) -> Result<Option<Message>> {
        let mut line = self.line_buffer.as_str();
        if self.lines_read == 1 {
            line = line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(line);
        }

        if let Some(header) = try_parse_header(line) {
            let next = message_from_header(header, self.lines_read);
            return Ok(match mem::replace(&mut self.state, State::Accumulating(next)) {
                State::Accumulating(previous) => Some(previous),
                State::Idle => None,
            });
        }

        match &mut self.state {
            State::Idle => Err(ChatreconError::invalid_start(self.lines_read)),
            State::Accumulating(current) => {
                current.content.push('\n');
                current.content.push_str(strip_line_ending(line));
                Ok(None)
            }
        }
    }

    /// End of input: emit whatever is being assembled.
    fn finish(&mut self) -> Option<Result<Message>> {
        self.finished = true;
        match mem::take(&mut self.state) {
            State::Accumulating(message) => Some(Ok(message)),
            State::Idle => None,
        }
    }

    fn fail(&mut self, err: ChatreconError) -> Option<Result<Message>> {
        self.finished = true;
        self.state = State::Idle;
        Some(Err(err))
    }
}

impl<R: BufRead + Send> MessageIterator for TranscriptIterator<R> {
    fn progress(&self) -> Option<f64> {
        match self.total_bytes {
            Some(0) | None => None,
            Some(total) => Some((self.bytes_read as f64 / total as f64) * 100.0),
        }
    }

    fn bytes_processed(&self) -> u64 {
        self.bytes_read
    }

    fn lines_processed(&self) -> usize {
        self.lines_read
    }

    fn total_bytes(&self) -> Option<u64> {
        self.total_bytes
    }
}

impl<R: BufRead> Iterator for TranscriptIterator<R> {
    type Item = Result<Message>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            if let Some(max) = self.max_lines {
                if self.lines_read >= max {
                    tracing::debug!(max_lines = max, "line limit reached, stopping");
                    return self.finish();
                }
            }

            match self.read_line() {
                Ok(true) => match self.process_line() {
                    Ok(Some(message)) => return Some(Ok(message)),
                    Ok(None) => {}
                    Err(err) => return self.fail(err),
                },
                Ok(false) => return self.finish(),
                Err(err) => return self.fail(err.into()),
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for TranscriptIterator<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{ActionKind, ContentKind};
    use std::io::{BufReader, Cursor};

    fn iter(text: &str) -> TranscriptIterator<BufReader<Cursor<Vec<u8>>>> {
        let cursor = Cursor::new(text.as_bytes().to_vec());
        TranscriptIterator::new(BufReader::new(cursor)).with_total_bytes(text.len() as u64)
    }

    fn collect(text: &str) -> Result<Vec<Message>> {
        iter(text).collect()
    }

    #[test]
    fn test_two_messages_with_continuation() {
        let messages = collect(
            "[01/02/2023, 10:00:00] Alice: Hello\nworld\n[01/02/2023, 10:00:05] Bob: 😂 lol",
        )
        .unwrap();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].user(), Some("Alice"));
        assert_eq!(messages[0].content(), "Hello\nworld");
        assert_eq!(messages[0].media(), Some(ContentKind::Text));
        assert_eq!(messages[1].user(), Some("Bob"));
        assert_eq!(messages[1].content(), "😂 lol");
        assert_eq!(messages[1].media(), Some(ContentKind::Laugh));
    }

    #[test]
    fn test_trailing_newline_does_not_add_content() {
        let messages = collect("[01/02/2023, 10:00:00] Alice: Hello\n").unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content(), "Hello");
    }

    #[test]
    fn test_blank_continuation_lines_are_kept() {
        let messages =
            collect("[01/02/2023, 10:00:00] Alice: one\n\nthree\n[01/02/2023, 10:00:01] Bob: x\n")
                .unwrap();
        assert_eq!(messages[0].content(), "one\n\nthree");
    }

    #[test]
    fn test_crlf_line_endings() {
        let messages =
            collect("[01/02/2023, 10:00:00] Alice: a\r\nb\r\n[01/02/2023, 10:00:01] Bob: c\r\n")
                .unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content(), "a\nb");
        assert_eq!(messages[1].content(), "c");
    }

    #[test]
    fn test_invalid_start_is_fatal() {
        let mut it = iter("stray continuation line\n[01/02/2023, 10:00:00] Alice: Hi");
        let first = it.next().unwrap();
        assert!(matches!(first, Err(ChatreconError::InvalidStart { line: 1 })));
        assert!(it.next().is_none());
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(collect("").unwrap().is_empty());
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let messages = collect("\u{FEFF}[01/02/2023, 10:00:00] Alice: Hi").unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].user(), Some("Alice"));
    }

    #[test]
    fn test_malformed_header_is_continuation() {
        let messages =
            collect("[01/02/2023, 10:00:00] Alice: Hi\n[99/99/2023, 10:00:00] Bob: nope").unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content(), "Hi\n[99/99/2023, 10:00:00] Bob: nope");
    }

    #[test]
    fn test_continuation_of_system_event() {
        let messages = collect("[01/02/2023, 10:00:00] Alice created group Friends\nforever").unwrap();
        assert_eq!(messages[0].action(), Some(ActionKind::CreateGroup));
        assert_eq!(messages[0].content(), "Friends\nforever");
    }

    #[test]
    fn test_max_lines_flushes_current_message() {
        let text = "[01/02/2023, 10:00:00] Alice: a\nb\nc\n[01/02/2023, 10:00:01] Bob: d\n";
        let messages: Vec<_> = iter(text)
            .with_max_lines(Some(2))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content(), "a\nb");
    }

    #[test]
    fn test_max_lines_zero_yields_nothing() {
        let messages: Vec<_> = iter("[01/02/2023, 10:00:00] Alice: a")
            .with_max_lines(Some(0))
            .collect::<Result<_>>()
            .unwrap();
        assert!(messages.is_empty());
    }

    #[test]
    fn test_max_lines_beyond_input() {
        let messages: Vec<_> = iter("[01/02/2023, 10:00:00] Alice: a\n[01/02/2023, 10:00:01] Bob: b")
            .with_max_lines(Some(100))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn test_progress_reporting() {
        let text = "[01/02/2023, 10:00:00] Alice: a\n[01/02/2023, 10:00:01] Bob: b\n";
        let mut it = iter(text);
        assert_eq!(it.progress(), Some(0.0));
        let _: Vec<_> = it.by_ref().collect();
        assert_eq!(it.bytes_processed(), text.len() as u64);
        assert_eq!(it.lines_processed(), 2);
        assert!((it.progress().unwrap() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_unknown_without_total() {
        let it = TranscriptIterator::new(Cursor::new(Vec::<u8>::new()));
        assert!(it.progress().is_none());
        assert!(it.total_bytes().is_none());
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let bytes = b"[01/02/2023, 10:00:00] Alice: ok\n\xff\xfe\n".to_vec();
        let results: Vec<_> = TranscriptIterator::new(Cursor::new(bytes)).collect();
        assert!(results.iter().any(|r| matches!(r, Err(e) if e.is_io())));
    }
}
