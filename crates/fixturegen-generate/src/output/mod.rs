//! Renderers for generated values.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use chrono::Utc;
use fixturegen_core::{GenerationRequest, GenerationResult};
use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;

pub mod csv;
pub mod json;

pub use json::ExportDocument;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One value per line.
    #[default]
    Lines,
    /// A `value` column, quoted where needed.
    Csv,
    /// Pretty-printed export document.
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Lines => "lines",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "lines" | "text" => Ok(OutputFormat::Lines),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// Render `result` in `format`, returning the encoded bytes.
pub fn render_output(
    format: OutputFormat,
    request: &GenerationRequest,
    result: &GenerationResult,
) -> Result<Vec<u8>, GenerationError> {
    let mut buffer = Vec::new();
    write_output(&mut buffer, format, request, result)?;
    Ok(buffer)
}

/// Stream `result` in `format` to `writer`; returns the bytes written.
pub fn write_output<W: Write>(
    writer: W,
    format: OutputFormat,
    request: &GenerationRequest,
    result: &GenerationResult,
) -> Result<u64, GenerationError> {
    match format {
        OutputFormat::Lines => write_lines(writer, &result.values),
        OutputFormat::Csv => Ok(csv::write_values_csv(writer, &result.values)?),
        OutputFormat::Json => {
            let document = ExportDocument::new(request, result, Utc::now());
            json::write_export_json(writer, &document)
        }
    }
}

fn write_lines<W: Write>(mut writer: W, values: &[String]) -> Result<u64, GenerationError> {
    let mut bytes = 0_u64;
    for value in values {
        writer.write_all(value.as_bytes())?;
        writer.write_all(b"\n")?;
        bytes += value.len() as u64 + 1;
    }
    writer.flush()?;
    Ok(bytes)
}
