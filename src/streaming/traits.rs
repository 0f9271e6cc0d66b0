//! Core trait for record streams.

use crate::Message;
use crate::error::Result;

/// Iterator over reconstructed messages with progress tracking.
///
/// Extends the standard [`Iterator`] trait with methods for monitoring
/// parsing progress, useful for progress bars and logging.
///
/// # Object Safety
///
/// This trait is object-safe, enabling dynamic dispatch via `Box<dyn MessageIterator>`.
///
/// # Examples
///
/// ```no_run
/// # fn main() -> chatrecon::Result<()> {
/// use chatrecon::parser::TranscriptParser;
/// use chatrecon::streaming::MessageIterator;
///
/// let parser = TranscriptParser::new();
/// let mut iter = parser.stream("_chat.txt".as_ref())?;
///
/// while let Some(result) = iter.next() {
///     let msg = result?;
///
///     if let Some(pct) = iter.progress() {
///         eprintln!("\r{:.1}%", pct);
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub trait MessageIterator: Iterator<Item = Result<Message>> + Send {
    /// Returns approximate progress as a percentage (0.0 to 100.0).
    ///
    /// Returns `None` if progress cannot be determined (e.g., unknown input size).
    fn progress(&self) -> Option<f64> {
        None
    }

    /// Returns the number of bytes processed so far.
    fn bytes_processed(&self) -> u64;

    /// Returns the number of physical lines processed so far.
    fn lines_processed(&self) -> usize;

    /// Returns the total input size in bytes, if known.
    fn total_bytes(&self) -> Option<u64> {
        None
    }
}
