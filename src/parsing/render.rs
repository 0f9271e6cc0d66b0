//! Inverse formatting: turn records back into transcript text.
//!
//! Rendering then re-parsing yields an equal record sequence as long as the
//! records could have come from a transcript in the first place: users carry
//! no surrounding whitespace, content has no zero-width markers, and no
//! continuation line looks like a header.

use crate::message::{ActionKind, Message};

use super::header::{AUTO_MARKER, format_timestamp};

/// Renders the header body (the part after `"] "`) for a payload.
fn render_body(user: Option<&str>, action: Option<ActionKind>, payload: &str) -> String {
    match (user, action) {
        (Some(user), Some(ActionKind::Message)) => format!("{user}: {payload}"),
        (Some(user), Some(action)) => {
            let phrase = action.phrase().unwrap_or_default();
            if action.takes_payload() {
                format!("{user} {phrase} {payload}")
            } else {
                format!("{user} {phrase}")
            }
        }
        _ => payload.to_string(),
    }
}

/// Renders one record as transcript lines, without a trailing newline.
///
/// # Example
///
/// ```
/// use chatrecon::parsing::render_message;
/// use chatrecon::{ActionKind, Message};
/// use chrono::{TimeZone, Utc};
///
/// let ts = Utc.with_ymd_and_hms(2023, 2, 1, 10, 0, 0).unwrap();
/// let msg = Message::new(ts, "Hello\nworld")
///     .with_user("Alice")
///     .with_action(ActionKind::Message);
///
/// assert_eq!(
///     render_message(&msg),
///     "[01/02/2023, 10:00:00] Alice: Hello\nworld"
/// );
/// ```
pub fn render_message(msg: &Message) -> String {
    let (payload, continuation) = match msg.content.split_once('\n') {
        Some((first, rest)) => (first, Some(rest)),
        None => (msg.content.as_str(), None),
    };

    let mut out = String::with_capacity(msg.content.len() + 32);
    if msg.is_auto {
        out.push(AUTO_MARKER);
    }
    out.push('[');
    out.push_str(&format_timestamp(msg.timestamp));
    out.push_str("] ");
    out.push_str(&render_body(msg.user(), msg.action, payload));
    if let Some(rest) = continuation {
        out.push('\n');
        out.push_str(rest);
    }
    out
}

/// Renders a full transcript, one record after another.
pub fn render_transcript<'a>(messages: impl IntoIterator<Item = &'a Message>) -> String {
    messages
        .into_iter()
        .map(render_message)
        .collect::<Vec<_>>()
        .join("\n")
}
