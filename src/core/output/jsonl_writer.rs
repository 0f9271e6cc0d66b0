//! JSON Lines (JSONL) output writer.
//!
//! One message per line, so output can be processed a record at a time.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::JsonRecord;
use crate::Message;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Writes messages to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"user":"Alice","content":"Hello"}
/// {"user":"Bob","content":"Hi"}
/// ```
pub fn write_jsonl(
    messages: &[Message],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(messages, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts messages to a JSONL string.
///
/// Every line, including the last, ends with `\n`.
pub fn to_jsonl(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(messages, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(messages: &[Message], out: &mut W, config: &OutputConfig) -> Result<()> {
    for msg in messages {
        serde_json::to_writer(&mut *out, &JsonRecord::new(msg, config))?;
        out.write_all(b"\n")?;
    }
    Ok(())
}
