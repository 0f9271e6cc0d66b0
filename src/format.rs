//! Output format selection.
//!
//! [`OutputFormat`] names the three writers in [`core::output`](crate::core::output)
//! and dispatches to them, either by explicit choice or from a file extension.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatrecon::Result<()> {
//! use chatrecon::format::{OutputFormat, to_format_string};
//! use chatrecon::core::models::OutputConfig;
//! use chatrecon::parser::TranscriptParser;
//!
//! let messages = TranscriptParser::new().parse_str("[01/02/2023, 10:00:00] Alice: Hello")?;
//!
//! let format = OutputFormat::from_path("output.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//!
//! let jsonl = to_format_string(&messages, format, &OutputConfig::new())?;
//! assert_eq!(jsonl, "{\"user\":\"Alice\",\"content\":\"Hello\"}\n");
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::core::features::MessageFeatures;
use crate::core::models::OutputConfig;
use crate::error::{ChatreconError, Result};

/// Output format for reconstructed messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of messages
    Json,

    /// JSON Lines, one object per line. Also known as NDJSON.
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatrecon::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out/chat.CSV").unwrap(), OutputFormat::Csv);
    /// assert!(OutputFormat::from_path("chat.txt").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        ext.parse().map_err(|_| {
            ChatreconError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: csv, json, jsonl"),
            )
        })
    }

    /// The cargo feature that enables this format's writer.
    fn required_feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ChatreconError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatreconError::invalid_format(
                "output",
                format!(
                    "Unknown format: '{}'. Expected one of: {}",
                    s,
                    OutputFormat::all_names().join(", ")
                ),
            )),
        }
    }
}

#[allow(dead_code)]
fn missing_feature(format: OutputFormat) -> ChatreconError {
    ChatreconError::invalid_format(
        "output",
        format!(
            "Output format {} requires the '{}' feature to be enabled",
            format,
            format.required_feature()
        ),
    )
}

/// Writes messages to a file in the specified format.
///
/// # Errors
///
/// Returns an error if the format's writer is not compiled in or the file
/// cannot be written.
#[allow(unused_variables)]
pub fn write_to_format(
    messages: &[Message],
    path: impl AsRef<Path>,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<()> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(messages, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(messages, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(messages, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts messages to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(
    messages: &[Message],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(messages, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(messages, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(messages, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts feature rows to a string in the specified format.
#[allow(unused_variables)]
pub fn features_to_format_string(rows: &[MessageFeatures], format: OutputFormat) -> Result<String> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::features_to_csv(rows),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::features_to_json(rows),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::features_to_jsonl(rows),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Writes feature rows to a file in the specified format.
pub fn write_features_to_format(
    rows: &[MessageFeatures],
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<()> {
    let text = features_to_format_string(rows, format)?;
    std::fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "ndjson".parse::<OutputFormat>().unwrap(),
            OutputFormat::Jsonl
        );

        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(err.is_invalid_format());
        assert!(err.to_string().contains("csv, json, jsonl, ndjson"));
    }

    #[test]
    fn test_format_display_and_extension() {
        for format in OutputFormat::all() {
            assert_eq!(format.to_string().to_lowercase(), format.extension());
        }
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            OutputFormat::from_path("output.jsonl").unwrap(),
            OutputFormat::Jsonl
        );
        assert_eq!(
            OutputFormat::from_path("output.ndjson").unwrap(),
            OutputFormat::Jsonl
        );
        assert_eq!(
            OutputFormat::from_path("/path/to/file.JSON").unwrap(),
            OutputFormat::Json
        );
        assert!(OutputFormat::from_path("output.txt").is_err());
        assert!(OutputFormat::from_path("no_extension").is_err());
    }

    #[test]
    fn test_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Csv);
    }

    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Jsonl).unwrap();
        assert_eq!(json, "\"jsonl\"");

        let parsed: OutputFormat = serde_json::from_str("\"csv\"").unwrap();
        assert_eq!(parsed, OutputFormat::Csv);
    }

    #[test]
    fn test_write_features_to_format() {
        use crate::core::aliases::UserAliases;
        use chrono::TimeZone;

        let ts = chrono::Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let msg = Message::new(ts, "haha")
            .with_user("Alice")
            .with_action(crate::ActionKind::Message)
            .with_media(crate::ContentKind::Laugh);
        let rows = vec![MessageFeatures::extract(&msg, &UserAliases::new())];
        let dir = tempfile::tempdir().unwrap();

        for format in OutputFormat::all() {
            let path = dir.path().join(format!("features.{}", format.extension()));
            write_features_to_format(&rows, &path, *format).unwrap();

            let written = std::fs::read_to_string(&path).unwrap();
            assert!(written.contains("laugh_count"), "{format}");
            assert_eq!(written, features_to_format_string(&rows, *format).unwrap());
        }
    }

    #[test]
    fn test_write_to_format_dispatch() {
        use chrono::TimeZone;

        let ts = chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let messages = vec![Message::new(ts, "Hi").with_user("Alice")];
        let dir = tempfile::tempdir().unwrap();

        for format in OutputFormat::all() {
            let path = dir.path().join(format!("out.{}", format.extension()));
            write_to_format(&messages, &path, *format, &OutputConfig::new()).unwrap();

            let written = std::fs::read_to_string(&path).unwrap();
            let expected = to_format_string(&messages, *format, &OutputConfig::new()).unwrap();
            assert_eq!(written, expected);
        }
    }
}
