use std::io::Write;

use chrono::{DateTime, SecondsFormat, Utc};
use fixturegen_core::{GenerationRequest, GenerationResult};
use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;

/// Downloadable record of one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    #[serde(rename = "type")]
    pub type_id: String,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub count: usize,
    pub generated_at: String,
    pub message: String,
    pub data: Vec<String>,
}

impl ExportDocument {
    pub fn new(
        request: &GenerationRequest,
        result: &GenerationResult,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            type_id: request.type_id.clone(),
            prefix: non_empty(request.prefix.as_deref()),
            suffix: non_empty(request.suffix.as_deref()),
            count: result.values.len(),
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            message: result.message.clone(),
            data: result.values.clone(),
        }
    }
}

pub fn write_export_json<W: Write>(
    mut writer: W,
    document: &ExportDocument,
) -> Result<u64, GenerationError> {
    let mut bytes = serde_json::to_vec_pretty(document)?;
    bytes.push(b'\n');
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(bytes.len() as u64)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|value| !value.is_empty()).map(str::to_string)
}
