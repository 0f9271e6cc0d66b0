//! Aggregate statistics over a transcript.
//!
//! Statistics are accumulated from [`MessageFeatures`] rows, so they agree
//! with whatever a feature export would sum to.
//!
//! # Example
//!
//! ```
//! use chatrecon::core::{ChatStats, UserAliases};
//! use chatrecon::parser::TranscriptParser;
//! use chatrecon::ContentKind;
//!
//! # fn main() -> chatrecon::Result<()> {
//! let messages = TranscriptParser::new().parse_str(
//!     "[01/02/2023, 10:00:00] Alice: haha\n\
//!      [01/02/2023, 10:00:05] Alice: see you\n\
//!      [01/02/2023, 11:00:00] Bob: image omitted",
//! )?;
//!
//! let stats = ChatStats::from_messages(&messages, &UserAliases::new());
//! assert_eq!(stats.total, 3);
//! assert_eq!(stats.users["Alice"].total, 2);
//! assert_eq!(stats.users["Alice"].share(ContentKind::Laugh), 0.5);
//! assert_eq!(stats.busiest_hour(), Some(10));
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::aliases::UserAliases;
use super::features::MessageFeatures;
use crate::Message;
use crate::message::{ActionKind, ContentKind};

/// Counters for one display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserStats {
    /// Every record attributed to the user, system events included.
    pub total: usize,
    /// Chat messages by content kind.
    pub content: BTreeMap<ContentKind, usize>,
    /// System events triggered by the user.
    pub actions: usize,
}

impl UserStats {
    /// Messages of `kind` sent by the user.
    pub fn count(&self, kind: ContentKind) -> usize {
        self.content.get(&kind).copied().unwrap_or(0)
    }

    /// Fraction of the user's records that are of `kind`, in `0.0..=1.0`.
    pub fn share(&self, kind: ContentKind) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(kind) as f64 / self.total as f64
    }

    /// Chat messages sent by the user.
    pub fn messages(&self) -> usize {
        self.content.values().sum()
    }
}

/// Statistics for a whole transcript.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChatStats {
    /// Records seen, including those of omitted users.
    pub total: usize,
    pub first: Option<DateTime<Utc>>,
    pub last: Option<DateTime<Utc>>,
    /// Records by event kind; unclassified lines are not counted here.
    pub actions: BTreeMap<ActionKind, usize>,
    /// Per display name. Omitted users are excluded.
    pub users: BTreeMap<String, UserStats>,
    /// Records by hour of day.
    pub hours: [usize; 24],
}

impl ChatStats {
    /// Accumulates statistics from messages in any order.
    pub fn from_messages<'a, I>(messages: I, aliases: &UserAliases) -> Self
    where
        I: IntoIterator<Item = &'a Message>,
    {
        let mut stats = Self::default();
        for msg in messages {
            stats.add(msg, aliases);
        }
        stats
    }

    /// Adds one message.
    pub fn add(&mut self, msg: &Message, aliases: &UserAliases) {
        let row = MessageFeatures::extract(msg, aliases);
        let ts = msg.timestamp();

        self.total += 1;
        self.first = Some(self.first.map_or(ts, |first| first.min(ts)));
        self.last = Some(self.last.map_or(ts, |last| last.max(ts)));
        self.hours[row.hour as usize] += 1;

        if let Some(action) = msg.action() {
            *self.actions.entry(action).or_default() += 1;
        }

        if let Some(name) = row.username {
            let user = self.users.entry(name).or_default();
            user.total += 1;
            user.actions += usize::from(row.action_count);
            if let Some(kind) = msg.media().filter(|_| msg.is_chat()) {
                *user.content.entry(kind).or_default() += 1;
            }
        }
    }

    /// Number of records of one event kind.
    pub fn action_count(&self, action: ActionKind) -> usize {
        self.actions.get(&action).copied().unwrap_or(0)
    }

    /// Hour of day with the most records; the earliest hour wins ties.
    pub fn busiest_hour(&self) -> Option<u32> {
        if self.total == 0 {
            return None;
        }
        let (hour, _) = self
            .hours
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|(_, count)| **count)?;
        u32::try_from(hour).ok()
    }
}

/// Labels an hour of day the way plots do: `12am`, `1 am`, ..., `11 pm`.
///
/// ```
/// use chatrecon::core::hour_name;
///
/// assert_eq!(hour_name(0), "12am");
/// assert_eq!(hour_name(9), "9 am");
/// assert_eq!(hour_name(12), "12pm");
/// assert_eq!(hour_name(23), "11 pm");
/// ```
pub fn hour_name(hour: u32) -> String {
    let suffix = if hour % 24 < 12 { "am" } else { "pm" };
    match hour % 12 {
        0 => format!("12{suffix}"),
        h => format!("{h} {suffix}"),
    }
}
