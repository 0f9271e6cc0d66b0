//! Mapping of raw user names to display names.
//!
//! Exports name the same person differently depending on who exported the
//! chat ("You", a phone number, a contact name). [`UserAliases`] folds those
//! spellings into one display name, or drops a name entirely by mapping it to
//! nothing.
//!
//! # Example
//!
//! ```
//! use chatrecon::core::aliases::UserAliases;
//!
//! let aliases = UserAliases::new()
//!     .with_alias("You", "Dimis T.")
//!     .with_alias("+44 7557 515264", "Dimis T.")
//!     .with_omitted("Group Bot");
//!
//! assert_eq!(aliases.resolve("You"), Some("Dimis T."));
//! assert_eq!(aliases.resolve("Alice"), Some("Alice"));
//! assert_eq!(aliases.resolve("Group Bot"), None);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::Message;

/// Raw name to display name table.
///
/// Unmapped names resolve to themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserAliases {
    names: HashMap<String, Option<String>>,
}

impl UserAliases {
    /// Creates an empty table; every name resolves to itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `raw` to `display`.
    #[must_use]
    pub fn with_alias(mut self, raw: impl Into<String>, display: impl Into<String>) -> Self {
        self.names.insert(raw.into(), Some(display.into()));
        self
    }

    /// Marks `raw` as omitted: it resolves to `None`.
    #[must_use]
    pub fn with_omitted(mut self, raw: impl Into<String>) -> Self {
        self.names.insert(raw.into(), None);
        self
    }

    /// Resolves a raw user name.
    pub fn resolve<'a>(&'a self, raw: &'a str) -> Option<&'a str> {
        match self.names.get(raw) {
            Some(mapped) => mapped.as_deref(),
            None => Some(raw),
        }
    }

    /// Rewrites the message's user to its display name.
    ///
    /// An omitted user leaves the record in place with no user.
    #[must_use]
    pub fn apply(&self, mut msg: Message) -> Message {
        if let Some(raw) = msg.user.take() {
            msg.user = self.resolve(&raw).map(str::to_string);
        }
        msg
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Parses a JSON object such as `{"You": "Dimis T.", "Group": null}`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatreconError::Json`](crate::ChatreconError::Json) if the
    /// text is not an object of strings or nulls.
    #[cfg(feature = "json-output")]
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let aliases: Self = serde_json::from_str(json)?;
        tracing::debug!(entries = aliases.len(), "loaded user aliases");
        Ok(aliases)
    }

    /// Reads an alias table from a JSON file.
    #[cfg(feature = "json-output")]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
