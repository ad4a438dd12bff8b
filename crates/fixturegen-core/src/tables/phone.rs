use super::countries::normalize_country_code;

/// Digit-grouping template for a country's phone numbers.
///
/// Template alphabet: `#` any digit, `N` a digit 2-9, anything else literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneFormat {
    pub country: &'static str,
    pub template: &'static str,
}

const fn format(country: &'static str, template: &'static str) -> PhoneFormat {
    PhoneFormat { country, template }
}

pub const GENERIC_PHONE_TEMPLATE: &str = "### ### ###";

pub const PHONE_FORMATS: &[PhoneFormat] = &[
    format("US", "(N##) N##-####"),
    format("CA", "(N##) N##-####"),
    format("GB", "N# #### ###"),
    format("IN", "9#### #####"),
    format("DE", "1## #######"),
    format("FR", "6 ## ## ## ##"),
    format("AU", "4## ### ###"),
    format("JP", "90-####-####"),
    format("BR", "(N#) 9####-####"),
    format("IT", "3## ### ####"),
    format("ES", "6## ## ## ##"),
    format("MX", "N# #### ####"),
    format("KR", "10-####-####"),
    format("CN", "13# #### ####"),
    format("NL", "6 ########"),
];

/// Template for `code`, falling back to the generic 9-digit grouping.
pub fn phone_template(code: &str) -> &'static str {
    let code = normalize_country_code(code);
    PHONE_FORMATS
        .iter()
        .find(|format| format.country == code)
        .map(|format| format.template)
        .unwrap_or(GENERIC_PHONE_TEMPLATE)
}
