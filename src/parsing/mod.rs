//! Line-level parsing stages.
//!
//! Each stage is a pure function and can be used on its own:
//!
//! - [`header`]: does a line start a new message? ([`try_parse_header`])
//! - [`body`]: actor, action and payload of a header ([`classify_body`])
//! - [`content`]: what a chat payload carries ([`classify_content`])
//! - [`render`]: records back to transcript text ([`render_transcript`])
//!
//! The stateful part, attaching continuation lines to the right message,
//! lives in [`crate::streaming`].

pub mod body;
pub mod content;
pub mod header;
pub mod render;

pub use body::{Body, classify_body};
pub use content::{classify_content, is_laugh, omitted_media};
pub use header::{
    AUTO_MARKER, MessageHeader, TIMESTAMP_FORMAT, format_timestamp, is_header, parse_timestamp,
    strip_line_ending, try_parse_header,
};
pub use render::{render_message, render_transcript};

use crate::message::{ActionKind, Message};

/// Builds the record for a recognised header line.
///
/// `line` is the 1-based physical line number, used for diagnostics only.
pub fn message_from_header(header: MessageHeader, line: usize) -> Message {
    let body = classify_body(&header.remainder);
    if body.is_unmatched() {
        tracing::debug!(line, remainder = %header.remainder, "header body matched no known phrasing");
    }

    let media = match body.action {
        Some(ActionKind::Message) => Some(classify_content(&body.payload)),
        _ => None,
    };

    Message {
        timestamp: header.timestamp,
        user: body.user,
        content: body.payload,
        action: body.action,
        media,
        is_auto: header.is_auto,
    }
}
