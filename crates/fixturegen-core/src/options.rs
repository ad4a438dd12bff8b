use serde::Serialize;
use serde_json::Value;

/// Input widget kind for an option; also decides how values are coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    Text,
    Select,
    SelectSearch,
    Radio,
    Checkbox,
    Number,
}

impl OptionKind {
    /// Kinds whose values must come from the declared choice list.
    pub fn is_closed_choice(self) -> bool {
        matches!(self, OptionKind::Select | OptionKind::Radio)
    }
}

/// One selectable value with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionChoice {
    pub value: String,
    pub label: String,
}

impl OptionChoice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Inclusive numeric bounds for `number` options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    pub fn clamp(self, value: i64) -> i64 {
        value.clamp(self.min.min(self.max), self.max.max(self.min))
    }
}

/// Schema entry for a single configurable option of a type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: OptionKind,
    pub default: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<OptionChoice>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

impl OptionSpec {
    fn new(key: &'static str, label: &'static str, kind: OptionKind, default: Value) -> Self {
        Self {
            key,
            label,
            kind,
            default,
            allowed_values: None,
            bounds: None,
            placeholder: None,
        }
    }

    /// Free text with no default.
    pub fn text(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, OptionKind::Text, Value::Null)
    }

    pub fn checkbox(key: &'static str, label: &'static str, default: bool) -> Self {
        Self::new(key, label, OptionKind::Checkbox, Value::Bool(default))
    }

    pub fn number(key: &'static str, label: &'static str, default: i64, min: i64, max: i64) -> Self {
        let mut spec = Self::new(key, label, OptionKind::Number, Value::from(default));
        spec.bounds = Some(Bounds { min, max });
        spec
    }

    pub fn select(
        key: &'static str,
        label: &'static str,
        choices: Vec<OptionChoice>,
        default: &str,
    ) -> Self {
        Self::choice(key, label, OptionKind::Select, choices, default)
    }

    /// Searchable select; values outside the list are still accepted.
    pub fn select_search(
        key: &'static str,
        label: &'static str,
        choices: Vec<OptionChoice>,
        default: &str,
    ) -> Self {
        Self::choice(key, label, OptionKind::SelectSearch, choices, default)
    }

    pub fn radio(
        key: &'static str,
        label: &'static str,
        choices: Vec<OptionChoice>,
        default: &str,
    ) -> Self {
        Self::choice(key, label, OptionKind::Radio, choices, default)
    }

    fn choice(
        key: &'static str,
        label: &'static str,
        kind: OptionKind,
        choices: Vec<OptionChoice>,
        default: &str,
    ) -> Self {
        let mut spec = Self::new(key, label, kind, Value::String(default.to_string()));
        spec.allowed_values = Some(choices);
        spec
    }

    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Whether `value` is acceptable for this option's choice list.
    ///
    /// Options without a closed choice list accept anything.
    pub fn allows(&self, value: &str) -> bool {
        if !self.kind.is_closed_choice() {
            return true;
        }
        self.allowed_values
            .as_ref()
            .is_none_or(|choices| choices.iter().any(|choice| choice.value == value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_choice_rejects_unlisted_values() {
        let spec = OptionSpec::radio(
            "version",
            "IP Version",
            vec![
                OptionChoice::new("ipv4", "IPv4"),
                OptionChoice::new("ipv6", "IPv6"),
            ],
            "ipv4",
        );
        assert!(spec.allows("ipv6"));
        assert!(!spec.allows("ipv5"));
    }

    #[test]
    fn searchable_select_accepts_free_values() {
        let spec = OptionSpec::select_search(
            "country",
            "Country",
            vec![OptionChoice::new("US", "United States")],
            "US",
        );
        assert!(spec.allows("ZZ"));
    }

    #[test]
    fn bounds_clamp_inverted_ranges() {
        let bounds = Bounds { min: 10, max: 1 };
        assert_eq!(bounds.clamp(50), 10);
        assert_eq!(bounds.clamp(-3), 1);
    }
}
