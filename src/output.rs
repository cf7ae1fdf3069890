//! Output formatting for digest results.
//!
//! The text format is the primary stream: the rendered tree header, then one
//! `--- <relative-path> ---` record per accepted file in discovery order.
//! JSON serializes the [`DigestResult`] as-is.

use crate::{DigestError, DigestResult};
use std::fs;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Formats the digest result into a string.
pub fn format_result(result: &DigestResult, format: OutputFormat, pretty: bool) -> String {
    match format {
        OutputFormat::Text => format_text(result),
        OutputFormat::Json => format_json(result, pretty),
    }
}

/// Writes the formatted result to a file.
pub fn write_result_to_file(
    result: &DigestResult,
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), DigestError> {
    let content = format_result(result, format, pretty);
    fs::write(&path, content).map_err(|e| DigestError::output_write(path.as_ref(), e))?;
    Ok(())
}

// ----------------------- Internal formatting -----------------------

fn format_text(result: &DigestResult) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str(&result.tree);

    for (i, file) in result.files.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("--- {} ---\n", file.path));
        out.push_str(&file.content);
        out.push('\n');
    }
    out
}

fn format_json(result: &DigestResult, pretty: bool) -> String {
    if pretty {
        serde_json::to_string_pretty(result).expect("JSON serialization failed")
    } else {
        serde_json::to_string(result).expect("JSON serialization failed")
    }
}
