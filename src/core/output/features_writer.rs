//! Feature table writers.
//!
//! Writes [`MessageFeatures`] rows with their field names as columns or keys,
//! ready to load as a dataframe.

use crate::core::features::MessageFeatures;
use crate::error::Result;

/// Converts feature rows to CSV with semicolon delimiter.
///
/// The header row is the field names of [`MessageFeatures`]; a missing
/// `username` is an empty cell.
#[cfg(feature = "csv-output")]
pub fn features_to_csv(rows: &[MessageFeatures]) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .from_writer(&mut buffer);
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8(buffer)?)
}

/// Converts feature rows to a pretty-printed JSON array.
#[cfg(feature = "json-output")]
pub fn features_to_json(rows: &[MessageFeatures]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

/// Converts feature rows to JSON Lines, one row per line.
#[cfg(feature = "json-output")]
pub fn features_to_jsonl(rows: &[MessageFeatures]) -> Result<String> {
    let mut out = String::new();
    for row in rows {
        out.push_str(&serde_json::to_string(row)?);
        out.push('\n');
    }
    Ok(out)
}
