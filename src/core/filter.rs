//! Filter messages by date range, user and event kind.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for filtering message collections.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Messages on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Messages on or before date |
//! | User | [`with_user`](FilterConfig::with_user) | Messages from specific user |
//! | Action | [`with_action`](FilterConfig::with_action) | Only one event kind |
//!
//! # Examples
//!
//! ```
//! use chatrecon::core::filter::{FilterConfig, apply_filters};
//! use chatrecon::parser::TranscriptParser;
//!
//! # fn main() -> chatrecon::Result<()> {
//! let messages = TranscriptParser::new().parse_str(
//!     "[01/01/2024, 12:00:00] Alice: Old\n\
//!      [15/06/2024, 12:00:00] alice: New\n\
//!      [15/06/2024, 12:00:01] Bob: Hi",
//! )?;
//!
//! let config = FilterConfig::new()
//!     .with_user("ALICE")
//!     .with_date_from("2024-06-01")?;
//!
//! let filtered = apply_filters(messages, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].content, "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - User matching is case-insensitive for ASCII characters
//! - Messages without a user never match a user filter
//! - Multiple filters are combined with AND logic

use chrono::{DateTime, NaiveDate, Utc};

use crate::Message;
use crate::error::{ChatreconError, Result};
use crate::message::ActionKind;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Configuration for filtering messages.
///
/// Filters are combined with AND logic: a message must match all active
/// filters to be included in the result.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only messages on or after this timestamp.
    pub after: Option<DateTime<Utc>>,

    /// Include only messages on or before this timestamp.
    pub before: Option<DateTime<Utc>>,

    /// Include only messages from this user (case-insensitive).
    pub user: Option<String>,

    /// Include only messages of this event kind.
    pub action: Option<ActionKind>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive, from the start of the day).
    ///
    /// # Errors
    ///
    /// Returns [`ChatreconError::InvalidDate`] if the date is not `YYYY-MM-DD`.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        let naive = parse_date(date_str)?;
        let start = naive
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| ChatreconError::invalid_date(date_str))?;
        self.after = Some(start.and_utc());
        Ok(self)
    }

    /// Sets the end date filter (inclusive, to the end of the day).
    ///
    /// # Errors
    ///
    /// Returns [`ChatreconError::InvalidDate`] if the date is not `YYYY-MM-DD`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatrecon::core::filter::FilterConfig;
    ///
    /// # fn main() -> chatrecon::Result<()> {
    /// let config = FilterConfig::new().with_date_to("2024-12-31")?;
    /// assert_eq!(config.before.unwrap().to_rfc3339(), "2024-12-31T23:59:59+00:00");
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        let naive = parse_date(date_str)?;
        let end = naive
            .and_hms_opt(23, 59, 59)
            .ok_or_else(|| ChatreconError::invalid_date(date_str))?;
        self.before = Some(end.and_utc());
        Ok(self)
    }

    /// Sets the user filter.
    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Keeps only messages of one event kind.
    #[must_use]
    pub fn with_action(mut self, action: ActionKind) -> Self {
        self.action = Some(action);
        self
    }

    /// Sets the start timestamp directly.
    #[must_use]
    pub fn with_after(mut self, dt: DateTime<Utc>) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end timestamp directly.
    #[must_use]
    pub fn with_before(mut self, dt: DateTime<Utc>) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.user.is_some() || self.action.is_some()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if `msg` passes every active filter.
    ///
    /// Use this when filtering a stream instead of a collected vector.
    pub fn matches(&self, msg: &Message) -> bool {
        if let Some(ref user) = self.user {
            if !msg.user().is_some_and(|u| u.eq_ignore_ascii_case(user)) {
                return false;
            }
        }

        if self.action.is_some() && msg.action() != self.action {
            return false;
        }

        if self.after.is_some_and(|after| msg.timestamp < after) {
            return false;
        }
        if self.before.is_some_and(|before| msg.timestamp > before) {
            return false;
        }

        true
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
        .map_err(|_| ChatreconError::invalid_date(date_str))
}

/// Filters a collection of messages based on the provided configuration.
///
/// If no filters are active, returns the original messages unchanged.
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages;
    }

    messages
        .into_iter()
        .filter(|msg| config.matches(msg))
        .collect()
}
