//! Structured message records reconstructed from a transcript.
//!
//! This module provides [`Message`], the record the assembler emits for every
//! header line, together with the two closed classifications attached to it:
//! [`ActionKind`] (chat message or system event) and [`ContentKind`] (what a
//! chat message carries).
//!
//! # Examples
//!
//! ```
//! use chatrecon::{ActionKind, ContentKind, Message};
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2023, 2, 1, 10, 0, 0).unwrap();
//! let msg = Message::new(ts, "Hello")
//!     .with_user("Alice")
//!     .with_action(ActionKind::Message)
//!     .with_media(ContentKind::Text);
//!
//! assert_eq!(msg.user(), Some("Alice"));
//! assert!(msg.is_chat());
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatrecon::{ActionKind, Message};
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2023, 2, 1, 10, 0, 0).unwrap();
//! let msg = Message::new(ts, "Friends")
//!     .with_user("Alice")
//!     .with_action(ActionKind::CreateGroup);
//!
//! let json = serde_json::to_string(&msg)?;
//! assert!(json.contains("\"create_group\""));
//! assert!(!json.contains("media"));
//!
//! let parsed: Message = serde_json::from_str(&json)?;
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What kind of event a header line describes.
///
/// `Message` is a user-authored chat line (`user: text`); every other variant
/// is a system-generated event with one fixed English phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// `<user>: <text>`
    Message,
    /// `<user> created group <name>`
    CreateGroup,
    /// `<user> added <name>`
    AddUser,
    /// `<user> changed this group's icon`
    ChangeGroupIcon,
    /// `<user> changed the subject to <name>`
    ChangeSubject,
    /// `<user> left`
    Leave,
    /// `<user> removed <name>`
    RemoveUser,
    /// `<user> changed their phone number to a new number...`
    ChangeNumber,
}

impl ActionKind {
    /// Returns all action kinds in classification priority order.
    pub fn all() -> &'static [ActionKind] {
        &[
            ActionKind::Message,
            ActionKind::CreateGroup,
            ActionKind::AddUser,
            ActionKind::ChangeGroupIcon,
            ActionKind::ChangeSubject,
            ActionKind::Leave,
            ActionKind::RemoveUser,
            ActionKind::ChangeNumber,
        ]
    }

    /// Returns the stable snake_case name used in output files.
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Message => "message",
            ActionKind::CreateGroup => "create_group",
            ActionKind::AddUser => "add_user",
            ActionKind::ChangeGroupIcon => "change_group_icon",
            ActionKind::ChangeSubject => "change_subject",
            ActionKind::Leave => "leave",
            ActionKind::RemoveUser => "remove_user",
            ActionKind::ChangeNumber => "change_number",
        }
    }

    /// Returns the fixed phrase that follows the actor in a system line.
    ///
    /// `None` for [`ActionKind::Message`], which uses the `": "` separator.
    pub fn phrase(self) -> Option<&'static str> {
        match self {
            ActionKind::Message => None,
            ActionKind::CreateGroup => Some("created group"),
            ActionKind::AddUser => Some("added"),
            ActionKind::ChangeGroupIcon => Some("changed this group's icon"),
            ActionKind::ChangeSubject => Some("changed the subject to"),
            ActionKind::Leave => Some("left"),
            ActionKind::RemoveUser => Some("removed"),
            ActionKind::ChangeNumber => Some("changed their phone number to a new number"),
        }
    }

    /// Returns `true` if the phrase is followed by a payload (a name or subject).
    pub fn takes_payload(self) -> bool {
        matches!(
            self,
            ActionKind::Message
                | ActionKind::CreateGroup
                | ActionKind::AddUser
                | ActionKind::ChangeSubject
                | ActionKind::RemoveUser
        )
    }

    /// Returns `true` for system-generated events.
    pub fn is_system(self) -> bool {
        self != ActionKind::Message
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase().replace('-', "_");
        ActionKind::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| {
                let names: Vec<&str> = ActionKind::all().iter().map(|k| k.as_str()).collect();
                format!(
                    "Unknown action: '{}'. Expected one of: {}",
                    s,
                    names.join(", ")
                )
            })
    }
}

/// What a chat message carries.
///
/// Media the export does not inline is replaced by an `"<kind> omitted"`
/// placeholder; the remaining text is either laughter or plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Image,
    Video,
    ContactCard,
    Gif,
    Audio,
    Document,
    Text,
    Laugh,
}

impl ContentKind {
    /// Returns all content kinds.
    pub fn all() -> &'static [ContentKind] {
        &[
            ContentKind::Image,
            ContentKind::Video,
            ContentKind::ContactCard,
            ContentKind::Gif,
            ContentKind::Audio,
            ContentKind::Document,
            ContentKind::Text,
            ContentKind::Laugh,
        ]
    }

    /// Returns the media kinds in placeholder matching order.
    pub fn media() -> &'static [ContentKind] {
        &[
            ContentKind::Image,
            ContentKind::Video,
            ContentKind::ContactCard,
            ContentKind::Gif,
            ContentKind::Audio,
            ContentKind::Document,
        ]
    }

    /// Returns the stable snake_case name used in output files.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Image => "image",
            ContentKind::Video => "video",
            ContentKind::ContactCard => "contact_card",
            ContentKind::Gif => "gif",
            ContentKind::Audio => "audio",
            ContentKind::Document => "document",
            ContentKind::Text => "text",
            ContentKind::Laugh => "laugh",
        }
    }

    /// Returns the omitted-media placeholder for media kinds, as the export
    /// writes it.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            ContentKind::Image => Some("image omitted"),
            ContentKind::Video => Some("video omitted"),
            ContentKind::ContactCard => Some("Contact card omitted"),
            ContentKind::Gif => Some("GIF omitted"),
            ContentKind::Audio => Some("audio omitted"),
            ContentKind::Document => Some("document omitted"),
            ContentKind::Text | ContentKind::Laugh => None,
        }
    }

    /// Returns `true` for omitted-media kinds.
    pub fn is_media(self) -> bool {
        self.placeholder().is_some()
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase().replace('-', "_");
        ContentKind::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| format!("Unknown content kind: '{s}'"))
    }
}

/// One logical message reconstructed from a transcript.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `DateTime<Utc>` | Header timestamp, whole seconds |
/// | `user` | `Option<String>` | Actor; `None` when the body matched no phrasing |
/// | `content` | `String` | Payload plus all continuation lines |
/// | `action` | `Option<ActionKind>` | `None` when the body matched no phrasing |
/// | `media` | `Option<ContentKind>` | Set only for [`ActionKind::Message`] |
/// | `is_auto` | `bool` | Header line carried the zero-width marker |
///
/// Records are created by the assembler and never mutated after emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent, as written in the header line.
    pub timestamp: DateTime<Utc>,

    /// Who sent the message or triggered the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub user: Option<String>,

    /// Message text.
    ///
    /// Multi-line bodies keep their line breaks: each continuation line is
    /// appended after a `'\n'`.
    pub content: String,

    /// Chat message or system event.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub action: Option<ActionKind>,

    /// Content classification of a chat message.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub media: Option<ContentKind>,

    /// Whether the header line carried the zero-width marker.
    #[serde(default)]
    pub is_auto: bool,
}

impl Message {
    /// Creates an unclassified record with only a timestamp and content.
    pub fn new(timestamp: DateTime<Utc>, content: impl Into<String>) -> Self {
        Self {
            timestamp,
            user: None,
            content: content.into(),
            action: None,
            media: None,
            is_auto: false,
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: ActionKind) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn with_media(mut self, media: ContentKind) -> Self {
        self.media = Some(media);
        self
    }

    #[must_use]
    pub fn with_auto(mut self, is_auto: bool) -> Self {
        self.is_auto = is_auto;
        self
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the timestamp.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the actor, if one was extracted.
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the action kind, if the body was classified.
    pub fn action(&self) -> Option<ActionKind> {
        self.action
    }

    /// Returns the content kind of a chat message.
    pub fn media(&self) -> Option<ContentKind> {
        self.media
    }

    /// Returns whether the header line carried the zero-width marker.
    pub fn is_auto(&self) -> bool {
        self.is_auto
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Returns `true` for user-authored chat messages.
    pub fn is_chat(&self) -> bool {
        self.action == Some(ActionKind::Message)
    }

    /// Returns `true` for system events (group created, user added, ...).
    pub fn is_system(&self) -> bool {
        self.action.is_some_and(ActionKind::is_system)
    }

    /// Returns `true` if the header body matched none of the known phrasings.
    pub fn is_unclassified(&self) -> bool {
        self.action.is_none()
    }

    /// Returns `true` if this chat message is an omitted-media placeholder.
    pub fn is_media(&self) -> bool {
        self.media.is_some_and(ContentKind::is_media)
    }
}
