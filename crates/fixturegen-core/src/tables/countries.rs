/// Country with its international dial code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub dial_code: &'static str,
}

const fn entry(code: &'static str, name: &'static str, dial_code: &'static str) -> Country {
    Country {
        code,
        name,
        dial_code,
    }
}

pub const COUNTRIES: &[Country] = &[
    entry("US", "United States", "+1"),
    entry("GB", "United Kingdom", "+44"),
    entry("IN", "India", "+91"),
    entry("DE", "Germany", "+49"),
    entry("FR", "France", "+33"),
    entry("CA", "Canada", "+1"),
    entry("AU", "Australia", "+61"),
    entry("JP", "Japan", "+81"),
    entry("BR", "Brazil", "+55"),
    entry("IT", "Italy", "+39"),
    entry("ES", "Spain", "+34"),
    entry("MX", "Mexico", "+52"),
    entry("KR", "South Korea", "+82"),
    entry("CN", "China", "+86"),
    entry("RU", "Russia", "+7"),
    entry("NL", "Netherlands", "+31"),
    entry("SE", "Sweden", "+46"),
    entry("NO", "Norway", "+47"),
    entry("DK", "Denmark", "+45"),
    entry("FI", "Finland", "+358"),
    entry("CH", "Switzerland", "+41"),
    entry("AT", "Austria", "+43"),
    entry("BE", "Belgium", "+32"),
    entry("PT", "Portugal", "+351"),
    entry("PL", "Poland", "+48"),
    entry("CZ", "Czech Republic", "+420"),
    entry("HU", "Hungary", "+36"),
    entry("GR", "Greece", "+30"),
    entry("TR", "Turkey", "+90"),
    entry("ZA", "South Africa", "+27"),
    entry("NZ", "New Zealand", "+64"),
    entry("SG", "Singapore", "+65"),
    entry("HK", "Hong Kong", "+852"),
    entry("AE", "United Arab Emirates", "+971"),
    entry("SA", "Saudi Arabia", "+966"),
    entry("IL", "Israel", "+972"),
    entry("TH", "Thailand", "+66"),
    entry("VN", "Vietnam", "+84"),
    entry("PH", "Philippines", "+63"),
    entry("ID", "Indonesia", "+62"),
    entry("MY", "Malaysia", "+60"),
    entry("AR", "Argentina", "+54"),
    entry("CL", "Chile", "+56"),
    entry("CO", "Colombia", "+57"),
    entry("PE", "Peru", "+51"),
    entry("EG", "Egypt", "+20"),
    entry("NG", "Nigeria", "+234"),
    entry("KE", "Kenya", "+254"),
    entry("MA", "Morocco", "+212"),
];

/// Trim, upper-case and resolve the `UK` alias.
pub fn normalize_country_code(code: &str) -> String {
    let code = code.trim().to_ascii_uppercase();
    if code == "UK" { "GB".to_string() } else { code }
}

pub fn country(code: &str) -> Option<&'static Country> {
    let code = normalize_country_code(code);
    COUNTRIES.iter().find(|country| country.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_and_accepts_uk_alias() {
        assert_eq!(country(" gb ").map(|c| c.dial_code), Some("+44"));
        assert_eq!(country("uk").map(|c| c.code), Some("GB"));
        assert!(country("XX").is_none());
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<_> = COUNTRIES.iter().map(|c| c.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), COUNTRIES.len());
    }
}
