//! Streaming reconstruction of transcripts.
//!
//! Transcripts are read line by line and messages are yielded as soon as the
//! next header line proves them complete, so memory use does not grow with
//! the size of the export.
//!
//! # Architecture
//!
//! - [`TranscriptIterator`]: the two-state assembler over any [`std::io::BufRead`]
//! - [`MessageIterator`]: progress reporting on top of [`Iterator`]
//!
//! # Example
//!
//! ```rust
//! use chatrecon::streaming::TranscriptIterator;
//!
//! let text = "[01/02/2023, 10:00:00] Alice: Hello\nworld\n[01/02/2023, 10:00:05] Bob: hi";
//!
//! for result in TranscriptIterator::new(text.as_bytes()) {
//!     match result {
//!         Ok(message) => println!("{:?}: {}", message.user, message.content),
//!         Err(e) => eprintln!("Not a transcript: {}", e),
//!     }
//! }
//! ```

mod assembler;
mod traits;

pub use assembler::TranscriptIterator;
pub use traits::MessageIterator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_message_iterator() {
        let text = "[01/02/2023, 10:00:00] Alice: Hello";
        let boxed: Box<dyn MessageIterator> =
            Box::new(TranscriptIterator::new(text.as_bytes()).with_total_bytes(text.len() as u64));
        let messages: Vec<_> = boxed.filter_map(Result::ok).collect();
        assert_eq!(messages.len(), 1);
    }
}
