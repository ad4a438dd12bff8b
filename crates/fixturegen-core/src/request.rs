use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One generation call: which type, how many values, and how to shape them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GenerationRequest {
    /// Catalog id such as `uuid` or `credit_card`.
    pub type_id: String,
    /// Number of values to produce; valid range is 1..=1000.
    #[serde(default = "default_count")]
    pub count: i64,
    /// Type-specific options. Keys the type does not declare are ignored.
    #[serde(default)]
    pub options: Map<String, Value>,
    /// Text spliced over the head of each value for affix-capable types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Text spliced over the tail of each value for affix-capable types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

fn default_count() -> i64 {
    1
}

impl GenerationRequest {
    pub fn new(type_id: impl Into<String>, count: i64) -> Self {
        Self {
            type_id: type_id.into(),
            count,
            options: Map::new(),
            prefix: None,
            suffix: None,
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
}

/// Ordered values produced by one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GenerationResult {
    pub ok: bool,
    pub values: Vec<String>,
    /// Display-only flourish; never carries error information.
    pub message: String,
}
