//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`CliFormat`] - output format as a clap value, convertible to [`OutputFormat`]

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::ParserConfig;
use crate::core::models::OutputConfig;
use crate::format::OutputFormat;
use crate::message::ActionKind;

/// Default output path; its extension follows `--format`.
pub const DEFAULT_OUTPUT: &str = "messages.csv";

/// Reconstruct messages from an exported chat transcript and write them as
/// CSV, JSON or JSONL.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatrecon")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatrecon _chat.txt
    chatrecon _chat.txt -o messages.jsonl -f jsonl --all-fields
    chatrecon _chat.txt --after 2023-01-01 --from Alice
    chatrecon _chat.txt --aliases names.json --stats
    chatrecon _chat.txt --action message --features features.csv
    RUST_LOG=chatrecon=debug chatrecon _chat.txt")]
pub struct Args {
    /// Path to the exported transcript
    pub input: String,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: CliFormat,

    /// Read only the first N lines of the input
    #[arg(long, value_name = "N")]
    pub rows: Option<usize>,

    /// Keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep messages from this user only (display name when --aliases is set)
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Keep records of this kind only (message, add_user, leave, ...)
    #[arg(long, value_name = "KIND")]
    pub action: Option<ActionKind>,

    /// JSON file mapping raw user names to display names (null omits a user).
    /// Applies to the written user column, --from, --features and --stats
    #[arg(long, value_name = "FILE")]
    pub aliases: Option<String>,

    /// Also write one feature row per message to FILE (.csv, .json or .jsonl)
    #[arg(long, value_name = "FILE")]
    pub features: Option<String>,

    /// Write event kind, content kind and the automatic-entry flag too
    #[arg(long)]
    pub all_fields: bool,

    /// Print per-user statistics after writing
    #[arg(long)]
    pub stats: bool,

    /// Use a larger read buffer for big exports
    #[arg(long)]
    pub streaming: bool,

    /// More log output (-v: debug, -vv: trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Output path, with the extension following `--format` when the default
    /// path is used.
    pub fn output_path(&self) -> String {
        if self.output != DEFAULT_OUTPUT {
            return self.output.clone();
        }
        let format: OutputFormat = self.format.into();
        format!("messages.{}", format.extension())
    }

    pub fn parser_config(&self) -> ParserConfig {
        let config = if self.streaming {
            ParserConfig::streaming()
        } else {
            ParserConfig::new()
        };
        match self.rows {
            Some(rows) => config.with_max_lines(rows),
            None => config,
        }
    }

    /// Timestamps are always written; `--all-fields` adds the rest.
    pub fn output_config(&self) -> OutputConfig {
        if self.all_fields {
            OutputConfig::all()
        } else {
            OutputConfig::new().with_timestamps()
        }
    }

    /// Default log directive when `RUST_LOG` is not set.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "chatrecon=warn",
            1 => "chatrecon=debug",
            _ => "chatrecon=trace",
        }
    }
}

/// Output format as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum CliFormat {
    /// CSV with semicolon delimiter
    #[default]
    Csv,
    /// JSON array
    Json,
    /// JSON Lines
    #[value(alias = "ndjson")]
    Jsonl,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Csv => OutputFormat::Csv,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Jsonl => OutputFormat::Jsonl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("chatrecon").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["_chat.txt"]);
        assert_eq!(args.input, "_chat.txt");
        assert_eq!(args.format, CliFormat::Csv);
        assert_eq!(args.output_path(), "messages.csv");
        assert_eq!(args.parser_config(), ParserConfig::new());
        assert_eq!(args.output_config(), OutputConfig::new().with_timestamps());
        assert_eq!(args.log_directive(), "chatrecon=warn");
    }

    #[test]
    fn test_default_output_follows_format() {
        let args = parse(&["_chat.txt", "-f", "jsonl"]);
        assert_eq!(args.output_path(), "messages.jsonl");

        let args = parse(&["_chat.txt", "-f", "json", "-o", "out.txt"]);
        assert_eq!(args.output_path(), "out.txt");
    }

    #[test]
    fn test_rows_and_streaming() {
        let args = parse(&["_chat.txt", "--rows", "100", "--streaming"]);
        let config = args.parser_config();
        assert_eq!(config.max_lines, Some(100));
        assert_eq!(config.buffer_size, ParserConfig::streaming().buffer_size);
    }

    #[test]
    fn test_filters_and_fields() {
        let args = parse(&[
            "_chat.txt",
            "--after",
            "2023-01-01",
            "--before",
            "2023-12-31",
            "--from",
            "Alice",
            "--all-fields",
            "--stats",
            "-vv",
        ]);
        assert_eq!(args.after.as_deref(), Some("2023-01-01"));
        assert_eq!(args.before.as_deref(), Some("2023-12-31"));
        assert_eq!(args.from.as_deref(), Some("Alice"));
        assert_eq!(args.output_config(), OutputConfig::all());
        assert!(args.stats);
        assert_eq!(args.log_directive(), "chatrecon=trace");
    }

    #[test]
    fn test_action_and_features() {
        let args = parse(&["_chat.txt", "--action", "add_user", "--features", "rows.jsonl"]);
        assert_eq!(args.action, Some(ActionKind::AddUser));
        assert_eq!(args.features.as_deref(), Some("rows.jsonl"));

        assert_eq!(parse(&["x", "--action", "Change-Subject"]).action, Some(ActionKind::ChangeSubject));
        assert!(Args::try_parse_from(["chatrecon", "x", "--action", "dance"]).is_err());
    }

    #[test]
    fn test_format_alias() {
        assert_eq!(parse(&["x", "-f", "ndjson"]).format, CliFormat::Jsonl);
        assert!(Args::try_parse_from(["chatrecon", "x", "-f", "xml"]).is_err());
    }
}
