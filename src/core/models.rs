//! Output configuration.

use serde::{Deserialize, Serialize};

/// Controls which optional fields are written by the output writers.
///
/// User and content are always written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Include timestamps in output
    pub include_timestamps: bool,
    /// Include the event kind (`message`, `add_user`, ...)
    pub include_actions: bool,
    /// Include the content kind (`image`, `laugh`, ...)
    pub include_media: bool,
    /// Include the automatic-entry flag
    pub include_auto: bool,
}

impl OutputConfig {
    /// Only user and content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every optional field enabled.
    pub fn all() -> Self {
        Self {
            include_timestamps: true,
            include_actions: true,
            include_media: true,
            include_auto: true,
        }
    }

    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.include_timestamps = true;
        self
    }

    #[must_use]
    pub fn with_actions(mut self) -> Self {
        self.include_actions = true;
        self
    }

    #[must_use]
    pub fn with_media(mut self) -> Self {
        self.include_media = true;
        self
    }

    #[must_use]
    pub fn with_auto(mut self) -> Self {
        self.include_auto = true;
        self
    }
}
