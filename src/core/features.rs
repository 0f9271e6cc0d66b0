//! Per-message feature rows.
//!
//! [`MessageFeatures`] flattens one [`Message`] into calendar fields and 0/1
//! indicator columns, the shape expected by dataframe tooling: summing a
//! column over any grouping gives the count for that group.

use chrono::{Datelike, NaiveDate, Timelike};
use serde::Serialize;

use super::aliases::UserAliases;
use crate::Message;
use crate::message::ContentKind;

/// One row of derived features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageFeatures {
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    /// Monday is 0.
    pub day_of_week: u32,
    /// 1-based.
    pub day_of_year: u32,
    /// Display name after alias resolution. `None` for omitted users and
    /// unclassified lines.
    pub username: Option<String>,
    pub message_count: u8,
    pub laugh_count: u8,
    pub image_count: u8,
    pub video_count: u8,
    pub audio_count: u8,
    pub document_count: u8,
    pub gif_count: u8,
    pub contact_card_count: u8,
    /// Group events other than ordinary messages.
    pub action_count: u8,
}

impl MessageFeatures {
    pub fn extract(msg: &Message, aliases: &UserAliases) -> Self {
        let ts = msg.timestamp();
        let media = msg.media();
        let flag = |kind: ContentKind| u8::from(media == Some(kind));

        Self {
            date: ts.date_naive(),
            year: ts.year(),
            month: ts.month(),
            day: ts.day(),
            hour: ts.hour(),
            minute: ts.minute(),
            day_of_week: ts.weekday().num_days_from_monday(),
            day_of_year: ts.ordinal(),
            username: msg
                .user()
                .and_then(|user| aliases.resolve(user))
                .map(str::to_owned),
            message_count: u8::from(msg.is_chat()),
            laugh_count: flag(ContentKind::Laugh),
            image_count: flag(ContentKind::Image),
            video_count: flag(ContentKind::Video),
            audio_count: flag(ContentKind::Audio),
            document_count: flag(ContentKind::Document),
            gif_count: flag(ContentKind::Gif),
            contact_card_count: flag(ContentKind::ContactCard),
            action_count: u8::from(msg.is_system()),
        }
    }

    /// Whether the row carries any media indicator.
    pub fn has_media(&self) -> bool {
        self.media_count() > 0
    }

    fn media_count(&self) -> u8 {
        self.image_count
            + self.video_count
            + self.audio_count
            + self.document_count
            + self.gif_count
            + self.contact_card_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::ActionKind;
    use crate::parser::TranscriptParser;

    fn parse_one(line: &str) -> Message {
        TranscriptParser::new().parse_str(line).unwrap().remove(0)
    }

    #[test]
    fn test_calendar_fields() {
        // 1 February 2023 was a Wednesday
        let msg = parse_one("[01/02/2023, 10:07:00] Alice: Hello");
        let row = MessageFeatures::extract(&msg, &UserAliases::new());

        assert_eq!(row.date, NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());
        assert_eq!((row.year, row.month, row.day), (2023, 2, 1));
        assert_eq!((row.hour, row.minute), (10, 7));
        assert_eq!(row.day_of_week, 2);
        assert_eq!(row.day_of_year, 32);
    }

    #[test]
    fn test_indicator_columns() {
        let msg = parse_one("[01/02/2023, 10:00:00] \u{200E}Bob: \u{200E}image omitted");
        let row = MessageFeatures::extract(&msg, &UserAliases::new());

        assert_eq!(row.message_count, 1);
        assert_eq!(row.image_count, 1);
        assert_eq!(row.laugh_count, 0);
        assert_eq!(row.action_count, 0);
        assert!(row.has_media());

        let laugh = parse_one("[01/02/2023, 10:00:00] Bob: hahaha");
        let row = MessageFeatures::extract(&laugh, &UserAliases::new());
        assert_eq!(row.laugh_count, 1);
        assert!(!row.has_media());
    }

    #[test]
    fn test_system_event_counts_as_action() {
        let msg = parse_one("[01/02/2023, 10:00:00] Alice added Bob");
        assert_eq!(msg.action(), Some(ActionKind::AddUser));

        let row = MessageFeatures::extract(&msg, &UserAliases::new());
        assert_eq!(row.action_count, 1);
        assert_eq!(row.message_count, 0);
        assert_eq!(row.username.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_username_uses_aliases() {
        let aliases = UserAliases::new()
            .with_alias("You", "Dimis T.")
            .with_omitted("Bot");

        let mine = parse_one("[01/02/2023, 10:00:00] You: hi");
        let bot = parse_one("[01/02/2023, 10:00:00] Bot: ping");

        assert_eq!(
            MessageFeatures::extract(&mine, &aliases).username.as_deref(),
            Some("Dimis T.")
        );
        assert_eq!(MessageFeatures::extract(&bot, &aliases).username, None);
    }
}
