//! Body classifier: who did what in a header line.
//!
//! The remainder of a header is either a chat message (`Alice: Hello`) or one
//! of a fixed set of system phrasings (`Alice added Bob`). The chat form is
//! tried first. It is rejected when its actor is itself a system phrasing,
//! which happens when a group subject or name contains `": "`. If no system
//! phrasing covers the whole remainder either, the chat split stands.
//!
//! Among system phrasings, the phrase that starts earliest wins, so a payload
//! that happens to contain another phrase (`Alice added Bob left`) can't
//! steal the classification. Ties go to the order of [`ActionKind::all`].

use std::sync::LazyLock;

use regex::Regex;

use crate::message::ActionKind;

/// Result of classifying a header remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    /// Trimmed actor, `None` when nothing matched.
    pub user: Option<String>,
    /// Action kind, `None` when nothing matched.
    pub action: Option<ActionKind>,
    /// Text after the phrase; the whole remainder when nothing matched.
    pub payload: String,
}

impl Body {
    fn matched(user: &str, action: ActionKind, payload: &str) -> Self {
        Self {
            user: Some(user.trim().to_string()),
            action: Some(action),
            payload: payload.to_string(),
        }
    }

    fn unmatched(remainder: &str) -> Self {
        Self {
            user: None,
            action: None,
            payload: remainder.to_string(),
        }
    }

    /// Returns `true` if no phrasing matched.
    pub fn is_unmatched(&self) -> bool {
        self.action.is_none()
    }
}

struct SystemPattern {
    action: ActionKind,
    regex: Regex,
}

impl SystemPattern {
    fn new(action: ActionKind) -> Option<Self> {
        let phrase = regex::escape(action.phrase()?);
        let pattern = match action {
            ActionKind::ChangeNumber => format!(r"^(.+?) {phrase}(.*)$"),
            _ if action.takes_payload() => format!(r"^(.+?) {phrase} (.*)$"),
            _ => format!(r"^(.+?) {phrase}$"),
        };
        let regex = Regex::new(&pattern).expect("system phrase pattern is valid");
        Some(Self { action, regex })
    }

    /// Returns (actor, payload, phrase start) on a match with a non-blank actor.
    fn captures<'a>(&self, text: &'a str) -> Option<(&'a str, &'a str, usize)> {
        let caps = self.regex.captures(text)?;
        let user = caps.get(1)?;
        if user.as_str().trim().is_empty() {
            return None;
        }
        let payload = if self.action.takes_payload() {
            caps.get(2).map_or("", |m| m.as_str())
        } else {
            ""
        };
        Some((user.as_str(), payload, user.end()))
    }
}

static SYSTEM_PATTERNS: LazyLock<Vec<SystemPattern>> = LazyLock::new(|| {
    ActionKind::all()
        .iter()
        .filter_map(|&action| SystemPattern::new(action))
        .collect()
});

/// Finds the system phrasing whose phrase starts earliest in `text`.
fn match_system(text: &str) -> Option<(ActionKind, &str, &str)> {
    let mut best: Option<(usize, ActionKind, &str, &str)> = None;
    for pattern in SYSTEM_PATTERNS.iter() {
        if let Some((user, payload, start)) = pattern.captures(text) {
            if best.is_none_or(|(best_start, ..)| start < best_start) {
                best = Some((start, pattern.action, user, payload));
            }
        }
    }
    best.map(|(_, action, user, payload)| (action, user, payload))
}

/// Splits `user: text` at the first `": "`; a bare trailing `':'` is an
/// empty message.
fn split_chat(text: &str) -> Option<(&str, &str)> {
    let (user, payload) = match text.split_once(": ") {
        Some(parts) => parts,
        None => (text.strip_suffix(':')?, ""),
    };
    if user.trim().is_empty() {
        return None;
    }
    Some((user, payload))
}

/// Classifies a header remainder into actor, action and payload.
///
/// # Example
///
/// ```
/// use chatrecon::parsing::classify_body;
/// use chatrecon::ActionKind;
///
/// let body = classify_body("Alice created group Friends");
/// assert_eq!(body.user.as_deref(), Some("Alice"));
/// assert_eq!(body.action, Some(ActionKind::CreateGroup));
/// assert_eq!(body.payload, "Friends");
///
/// let body = classify_body("Messages and calls are end-to-end encrypted.");
/// assert!(body.is_unmatched());
/// ```
pub fn classify_body(remainder: &str) -> Body {
    let chat = split_chat(remainder);
    // Actors that read as an event defer to the event form.
    if let Some((user, payload)) = chat.filter(|(user, _)| match_system(user).is_none()) {
        return Body::matched(user, ActionKind::Message, payload);
    }
    if let Some((action, user, payload)) = match_system(remainder) {
        return Body::matched(user, action, payload);
    }
    match chat {
        Some((user, payload)) => Body::matched(user, ActionKind::Message, payload),
        None => Body::unmatched(remainder),
    }
}
