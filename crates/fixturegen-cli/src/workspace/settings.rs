use std::collections::BTreeMap;
use std::path::Path;

use fixturegen_generate::OutputFormat;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::WorkspaceResult;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_SETTINGS_FILE: &str = "fixturegen.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliSettings {
    pub default_count: Option<i64>,
    pub seed: Option<u64>,
    pub format: Option<OutputFormat>,
    pub log: LogSettings,
    /// Per-type option defaults, keyed by type id.
    pub defaults: BTreeMap<String, Map<String, Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: Option<String>,
    pub json: bool,
}

impl CliSettings {
    pub fn parse(content: &str) -> WorkspaceResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn type_defaults(&self, type_id: &str) -> Map<String, Value> {
        self.defaults.get(type_id).cloned().unwrap_or_default()
    }
}

/// Load settings from `explicit`, or from the default file when present.
///
/// An explicit path must exist; the default file is optional.
pub fn load_settings(explicit: Option<&Path>) -> WorkspaceResult<CliSettings> {
    let path = match explicit {
        Some(path) => path,
        None => {
            let path = Path::new(DEFAULT_SETTINGS_FILE);
            if !path.exists() {
                return Ok(CliSettings::default());
            }
            path
        }
    };
    let content = std::fs::read_to_string(path)?;
    CliSettings::parse(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::WorkspaceError;
    use serde_json::json;

    #[test]
    fn parses_full_settings() {
        let settings = CliSettings::parse(
            r#"
default_count = 25
seed = 7
format = "csv"

[log]
level = "debug"
json = true

[defaults.phone]
country = "GB"
include_code = false

[defaults.password]
length = 32
"#,
        )
        .expect("parse settings");

        assert_eq!(settings.default_count, Some(25));
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.format, Some(OutputFormat::Csv));
        assert_eq!(settings.log.level.as_deref(), Some("debug"));
        assert!(settings.log.json);
        assert_eq!(
            Value::Object(settings.type_defaults("phone")),
            json!({"country": "GB", "include_code": false})
        );
        assert_eq!(settings.type_defaults("password")["length"], json!(32));
        assert!(settings.type_defaults("uuid").is_empty());
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(CliSettings::parse("").expect("parse"), CliSettings::default());
    }

    #[test]
    fn malformed_settings_are_rejected() {
        let err = CliSettings::parse("default_count = \"many\"").expect_err("bad type");
        assert!(matches!(err, WorkspaceError::TomlDecode(_)));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = std::env::temp_dir().join(format!("fixturegen_{}.toml", uuid::Uuid::new_v4()));
        let err = load_settings(Some(&missing)).expect_err("missing file");
        assert!(matches!(err, WorkspaceError::Io(_)));
    }
}
