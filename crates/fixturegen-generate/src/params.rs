use fixturegen_core::registry::descriptor;
use fixturegen_core::{OptionKind, OptionSpec, TypeDescriptor, TypeId};
use serde_json::{Map, Value};

/// Options for one generator call, restricted to the keys its type declares.
///
/// Getters never fail: malformed or missing values resolve to the schema
/// default, numbers are clamped to the declared bounds, and closed choice
/// lists reject unlisted values.
#[derive(Debug, Clone)]
pub struct OptionMap {
    descriptor: &'static TypeDescriptor,
    values: Map<String, Value>,
}

impl OptionMap {
    /// Keep only the keys `descriptor` declares; everything else is dropped.
    pub fn normalize(descriptor: &'static TypeDescriptor, raw: &Map<String, Value>) -> Self {
        let values = raw
            .iter()
            .filter(|(key, value)| !value.is_null() && descriptor.option_spec(key).is_some())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Self { descriptor, values }
    }

    /// Build from a JSON value; anything but an object yields all defaults.
    pub fn for_type(type_id: TypeId, options: &Value) -> Self {
        let empty = Map::new();
        let raw = options.as_object().unwrap_or(&empty);
        Self::normalize(descriptor(type_id), raw)
    }

    pub fn defaults(type_id: TypeId) -> Self {
        Self::normalize(descriptor(type_id), &Map::new())
    }

    pub fn type_id(&self) -> TypeId {
        self.descriptor.id
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Trimmed free text; `None` when unset or blank.
    pub fn get_text(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .and_then(scalar_text)
            .or_else(|| self.spec(key).and_then(|spec| scalar_text(&spec.default)))
    }

    pub fn get_bool(&self, key: &str) -> bool {
        let default = self
            .spec(key)
            .and_then(|spec| spec.default.as_bool())
            .unwrap_or(false);
        self.values.get(key).and_then(coerce_bool).unwrap_or(default)
    }

    pub fn get_i64(&self, key: &str) -> i64 {
        let Some(spec) = self.spec(key) else {
            return 0;
        };
        let default = spec.default.as_i64().unwrap_or(0);
        let value = self.values.get(key).and_then(coerce_i64).unwrap_or(default);
        match spec.bounds {
            Some(bounds) => bounds.clamp(value),
            None => value,
        }
    }

    /// Selected choice value, or the default when unset or not allowed.
    pub fn get_choice(&self, key: &str) -> String {
        let Some(spec) = self.spec(key) else {
            return String::new();
        };
        let default = spec.default.as_str().unwrap_or_default().to_string();
        match self.values.get(key).and_then(scalar_text) {
            Some(value) if spec.allows(&value) => value,
            Some(value) if spec.kind == OptionKind::Select => {
                match_choice_case_insensitive(spec, &value).unwrap_or(default)
            }
            _ => default,
        }
    }

    fn spec(&self, key: &str) -> Option<&'static OptionSpec> {
        self.descriptor.option_spec(key)
    }
}

fn match_choice_case_insensitive(spec: &OptionSpec, value: &str) -> Option<String> {
    spec.allowed_values
        .as_ref()?
        .iter()
        .find(|choice| choice.value.eq_ignore_ascii_case(value))
        .map(|choice| choice.value.clone())
}

fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => return None,
    };
    if text.is_empty() { None } else { Some(text) }
}

fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => number.as_f64().map(|number| number != 0.0),
        Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" | "" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(saturating_f64)),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().map(saturating_f64))
        }
        _ => None,
    }
}

fn saturating_f64(value: f64) -> i64 {
    if value.is_nan() { 0 } else { value as i64 }
}
