use std::io::{self, Write};

use fixturegen_core::{OptionKind, OptionSpec, get_type_options, list_types};
use serde_json::Value;

use crate::CliError;

/// Choice lists longer than this are summarized by count.
const MAX_LISTED_CHOICES: usize = 8;

pub fn print_types(json: bool) -> Result<(), CliError> {
    let types = list_types();
    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &types)?;
        writeln!(stdout)?;
        return Ok(());
    }

    for summary in types {
        writeln!(
            stdout,
            "{} {:<12} {:<14} {}",
            summary.icon, summary.id, summary.display_name, summary.category
        )?;
    }
    Ok(())
}

pub fn print_options(type_id: &str, json: bool) -> Result<(), CliError> {
    let options = get_type_options(type_id)?;
    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, options)?;
        writeln!(stdout)?;
        return Ok(());
    }

    if options.is_empty() {
        writeln!(stdout, "{type_id} has no options")?;
        return Ok(());
    }
    for spec in options {
        writeln!(stdout, "{}", describe_option(spec))?;
    }
    Ok(())
}

fn describe_option(spec: &OptionSpec) -> String {
    let mut line = format!("{:<18} {:<14} {}", spec.key, kind_name(spec.kind), spec.label);
    if !spec.default.is_null() {
        line.push_str(&format!(" (default: {})", render_default(&spec.default)));
    }
    if let Some(bounds) = spec.bounds {
        line.push_str(&format!(" [{}..={}]", bounds.min, bounds.max));
    }
    if let Some(choices) = &spec.allowed_values {
        if choices.len() > MAX_LISTED_CHOICES {
            line.push_str(&format!(" {{{} choices}}", choices.len()));
        } else {
            let values: Vec<&str> = choices.iter().map(|choice| choice.value.as_str()).collect();
            line.push_str(&format!(" {{{}}}", values.join(", ")));
        }
    }
    line
}

fn kind_name(kind: OptionKind) -> &'static str {
    match kind {
        OptionKind::Text => "text",
        OptionKind::Select => "select",
        OptionKind::SelectSearch => "select_search",
        OptionKind::Radio => "radio",
        OptionKind::Checkbox => "checkbox",
        OptionKind::Number => "number",
    }
}

fn render_default(value: &Value) -> String {
    match value {
        Value::String(text) => format!("\"{text}\""),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixturegen_core::get_type;

    #[test]
    fn describes_number_and_choice_options() {
        let password = get_type("password").expect("password");
        let length = password.option_spec("length").expect("length");
        let line = describe_option(length);
        assert!(line.starts_with("length"));
        assert!(line.contains("number"));
        assert!(line.ends_with("(default: 16) [4..=128]"), "{line}");

        let ip = get_type("ip").expect("ip");
        let version = ip.option_spec("version").expect("version");
        assert!(describe_option(version).ends_with("(default: \"ipv4\") {ipv4, ipv6}"));

        let phone = get_type("phone").expect("phone");
        let country = phone.option_spec("country").expect("country");
        assert!(describe_option(country).ends_with("{49 choices}"));
    }
}
