//! Header grammar: does a line start a new message?
//!
//! A header line looks like
//!
//! ```text
//! [01/02/2023, 10:00:00] Alice: Hello
//! ```
//!
//! optionally preceded by a zero-width LEFT-TO-RIGHT MARK that the export uses
//! to flag automated lines. Anything else is a continuation of the previous
//! message; there is no partial match and no error.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

/// Invisible marker the export puts on automated lines.
pub const AUTO_MARKER: char = '\u{200E}';

/// chrono format of the bracketed header timestamp.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([^\]]+)\] (.*)$").expect("header pattern is valid"));

/// The parts of a recognised header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHeader {
    /// Parsed header timestamp.
    pub timestamp: DateTime<Utc>,
    /// Everything after `"] "`, with zero-width markers removed.
    pub remainder: String,
    /// Whether the line carried the zero-width marker.
    pub is_auto: bool,
}

/// Removes a trailing `\n` or `\r\n`.
pub fn strip_line_ending(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}

/// Parses a header timestamp such as `01/02/2023, 10:00:00`.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Formats a timestamp the way header lines write it.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Tries to read `line` as a message header.
///
/// The line may still carry its terminator. Returns `None` for continuation
/// lines, including header-shaped lines whose date does not parse.
///
/// # Example
///
/// ```
/// use chatrecon::parsing::try_parse_header;
///
/// let header = try_parse_header("[01/02/2023, 10:00:00] Alice: Hello\n").unwrap();
/// assert_eq!(header.remainder, "Alice: Hello");
/// assert!(!header.is_auto);
///
/// assert!(try_parse_header("see [01/02/2023, 10:00:00] above").is_none());
/// assert!(try_parse_header("[31/02/2023, 10:00:00] Alice: Hi").is_none());
/// ```
pub fn try_parse_header(line: &str) -> Option<MessageHeader> {
    let line = strip_line_ending(line);
    let is_auto = line.contains(AUTO_MARKER);
    let cleaned: Cow<'_, str> = if is_auto {
        Cow::Owned(line.replace(AUTO_MARKER, ""))
    } else {
        Cow::Borrowed(line)
    };

    let caps = HEADER_RE.captures(&cleaned)?;
    let timestamp = parse_timestamp(caps.get(1)?.as_str())?;
    let remainder = caps.get(2).map_or("", |m| m.as_str()).to_string();

    Some(MessageHeader {
        timestamp,
        remainder,
        is_auto,
    })
}

/// Returns `true` if `line` starts a new message.
pub fn is_header(line: &str) -> bool {
    try_parse_header(line).is_some()
}
