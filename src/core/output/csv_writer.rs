//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::Message;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Writes messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `User`, `Content`, preceded by `Timestamp` and followed by
///   `Action`, `Media` and `Auto` when enabled in [`OutputConfig`]
/// - Messages without a user have an empty `User` cell
/// - Encoding: UTF-8
pub fn write_csv(
    messages: &[Message],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(messages, file, config)
}

/// Converts messages to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(messages, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(messages: &[Message], out: W, config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(build_header(config))?;
    for msg in messages {
        writer.write_record(build_record(msg, config))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::new();

    if config.include_timestamps {
        header.push("Timestamp");
    }

    header.push("User");
    header.push("Content");

    if config.include_actions {
        header.push("Action");
    }
    if config.include_media {
        header.push("Media");
    }
    if config.include_auto {
        header.push("Auto");
    }

    header
}

/// Build CSV record for a single message.
fn build_record(msg: &Message, config: &OutputConfig) -> Vec<String> {
    let mut record = Vec::new();

    if config.include_timestamps {
        record.push(msg.timestamp.format("%Y-%m-%d %H:%M:%S").to_string());
    }

    record.push(msg.user().unwrap_or_default().to_owned());
    record.push(msg.content.clone());

    if config.include_actions {
        record.push(msg.action.map(|a| a.to_string()).unwrap_or_default());
    }
    if config.include_media {
        record.push(msg.media.map(|m| m.to_string()).unwrap_or_default());
    }
    if config.include_auto {
        record.push(msg.is_auto.to_string());
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{ActionKind, ContentKind};
    use chrono::TimeZone;
    use tempfile::NamedTempFile;

    fn sample() -> Vec<Message> {
        let ts = chrono::Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 0).unwrap();
        vec![
            Message::new(ts, "Hello")
                .with_user("Alice")
                .with_action(ActionKind::Message)
                .with_media(ContentKind::Text),
            Message::new(ts, "Bob")
                .with_user("Alice")
                .with_action(ActionKind::AddUser),
            Message::new(ts, "something odd"),
        ]
    }

    #[test]
    fn test_write_csv_basic() {
        let temp_file = NamedTempFile::new().unwrap();

        write_csv(&sample(), temp_file.path(), &OutputConfig::new()).unwrap();
        let content = std::fs::read_to_string(temp_file.path()).unwrap();

        assert_eq!(content.lines().next(), Some("User;Content"));
        assert!(content.contains("Alice;Hello"));
        assert!(content.contains(";something odd"));
    }

    #[test]
    fn test_to_csv_all_fields() {
        let csv = to_csv(&sample(), &OutputConfig::all()).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next(),
            Some("Timestamp;User;Content;Action;Media;Auto")
        );
        assert_eq!(
            lines.next(),
            Some("2024-06-15 12:30:00;Alice;Hello;message;text;false")
        );
        assert_eq!(
            lines.next(),
            Some("2024-06-15 12:30:00;Alice;Bob;add_user;;false")
        );
    }

    #[test]
    fn test_multiline_content_is_quoted() {
        let ts = chrono::Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 0).unwrap();
        let msg = Message::new(ts, "Hello\nworld").with_user("Alice");

        let csv = to_csv(&[msg], &OutputConfig::new()).unwrap();
        assert!(csv.contains("Alice;\"Hello\nworld\""));
    }
}
