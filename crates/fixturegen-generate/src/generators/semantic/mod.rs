use fixturegen_core::TypeId;
use fixturegen_core::tables::words::{
    EMAIL_HANDLES, FIRST_NAMES, FREE_MAIL_DOMAINS, LAST_NAMES, PLACEHOLDER_EMAIL_DOMAIN,
    USERNAME_ADJECTIVES, USERNAME_NAMES, USERNAME_NOUNS, WORLD_CITIES,
};
use fixturegen_core::tables::{
    AddressFormat, COUNTRIES, PostalRule, address_format, country, fallback_address_format,
    phone_template,
};
use rand::{Rng, RngCore};

use crate::generators::{Generator, expand_pattern, pick, pick_filtered, starting_with};
use crate::params::OptionMap;

const FALLBACK_DIAL_CODE: &str = "+1";

pub struct NameGenerator;

impl Generator for NameGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::Name
    }

    fn generate(&self, options: &OptionMap, rng: &mut dyn RngCore) -> String {
        filtered_name(
            options.get_text("starts_with").as_deref(),
            options.get_text("ends_with").as_deref(),
            rng,
        )
        .unwrap_or_else(|| {
            let first = pick(FIRST_NAMES, rng).unwrap_or("Alex");
            let last = pick(LAST_NAMES, rng).unwrap_or("Smith");
            format!("{first} {last}")
        })
    }
}

/// `starts_with` matches either the first or the last name; `ends_with`
/// narrows last names. `None` when a given filter has no candidate.
fn filtered_name(
    starts_with: Option<&str>,
    ends_with: Option<&str>,
    rng: &mut dyn RngCore,
) -> Option<String> {
    if starts_with.is_none() && ends_with.is_none() {
        return None;
    }

    let last_names: Vec<&str> = match ends_with {
        Some(suffix) => {
            let suffix = suffix.to_lowercase();
            LAST_NAMES
                .iter()
                .copied()
                .filter(|name| name.to_lowercase().ends_with(&suffix))
                .collect()
        }
        None => LAST_NAMES.to_vec(),
    };
    if last_names.is_empty() {
        return None;
    }

    let Some(prefix) = starts_with else {
        let first = pick(FIRST_NAMES, rng)?;
        let last = pick(&last_names, rng)?;
        return Some(format!("{first} {last}"));
    };

    let first_hits = starting_with(FIRST_NAMES, prefix);
    let last_hits = starting_with(&last_names, prefix);
    let total = first_hits.len() + last_hits.len();
    if total == 0 {
        return None;
    }

    let index = rng.random_range(0..total);
    let (first, last) = match first_hits.get(index) {
        Some(first) => (*first, pick(&last_names, rng)?),
        None => (pick(FIRST_NAMES, rng)?, last_hits[index - first_hits.len()]),
    };
    Some(format!("{first} {last}"))
}

pub struct EmailGenerator;

impl Generator for EmailGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::Email
    }

    fn generate(&self, options: &OptionMap, rng: &mut dyn RngCore) -> String {
        let handle = pick(EMAIL_HANDLES, rng).unwrap_or("user");
        let number = rng.random_range(1..=999);
        let domain = options
            .get_text("domain")
            .map(|domain| domain.trim_start_matches('@').to_string())
            .filter(|domain| !domain.is_empty());
        let extension = options
            .get_text("extension")
            .map(|extension| extension.trim_start_matches('.').to_string())
            .filter(|extension| !extension.is_empty());

        let host = match (domain, extension) {
            (Some(domain), Some(extension)) => format!("{domain}.{extension}"),
            (Some(domain), None) => domain,
            (None, Some(extension)) => format!("{PLACEHOLDER_EMAIL_DOMAIN}.{extension}"),
            (None, None) => pick(FREE_MAIL_DOMAINS, rng)
                .unwrap_or("example.com")
                .to_string(),
        };
        format!("{handle}{number}@{host}")
    }
}

pub struct PhoneGenerator;

impl Generator for PhoneGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::Phone
    }

    fn generate(&self, options: &OptionMap, rng: &mut dyn RngCore) -> String {
        let code = options.get_choice("country");
        let number = expand_pattern(phone_template(&code), rng);
        if !options.get_bool("include_code") {
            return number;
        }
        let dial_code = country(&code)
            .map(|country| country.dial_code)
            .unwrap_or(FALLBACK_DIAL_CODE);
        format!("{dial_code} {number}")
    }
}

pub struct AddressGenerator;

impl Generator for AddressGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::Address
    }

    fn generate(&self, options: &OptionMap, rng: &mut dyn RngCore) -> String {
        let format = format_for(&options.get_choice("country"));
        let (low, high) = format.house_numbers;
        let number = rng.random_range(low..=high).to_string();
        let street = pick(format.streets, rng).unwrap_or_default();
        let city = pick(format.cities, rng).unwrap_or_default();
        let region = pick(format.regions, rng).unwrap_or_default();
        let postal = postal_code(format.postal, rng);

        format
            .layout
            .replace("{number}", &number)
            .replace("{street}", street)
            .replace("{city}", city)
            .replace("{region}", region)
            .replace("{postal}", &postal)
    }
}

pub struct StreetGenerator;

impl Generator for StreetGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::Street
    }

    fn generate(&self, options: &OptionMap, rng: &mut dyn RngCore) -> String {
        let format = format_for(&options.get_choice("country"));
        let number = rng.random_range(100..=9999);
        let street = pick(format.streets, rng).unwrap_or("Main St");
        format!("{number} {street}")
    }
}

pub struct UsernameGenerator;

impl Generator for UsernameGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::Username
    }

    fn generate(&self, options: &OptionMap, rng: &mut dyn RngCore) -> String {
        let name = pick(USERNAME_NAMES, rng).unwrap_or("user");
        let body = match options.get_choice("style").as_str() {
            "adj_noun" => {
                let adjective = pick(USERNAME_ADJECTIVES, rng).unwrap_or("cool");
                let noun = pick(USERNAME_NOUNS, rng).unwrap_or("cat");
                format!("{adjective}{noun}{}", rng.random_range(10..=999))
            }
            "name_random" => format!("{name}{}", rng.random_range(1000..=9999)),
            "mrx" => format!("mrx{name}"),
            _ => format!("{name}{}", rng.random_range(1980..=2024)),
        };
        match options.get_text("prefix") {
            Some(prefix) => format!("{prefix}{body}"),
            None => body,
        }
    }
}

pub struct SsnGenerator;

impl Generator for SsnGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::Ssn
    }

    fn generate(&self, _options: &OptionMap, rng: &mut dyn RngCore) -> String {
        format!(
            "{}-{}-{}",
            rng.random_range(100..=999),
            rng.random_range(10..=99),
            rng.random_range(1000..=9999)
        )
    }
}

pub struct CountryGenerator;

impl Generator for CountryGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::Country
    }

    fn generate(&self, options: &OptionMap, rng: &mut dyn RngCore) -> String {
        let names: Vec<&str> = COUNTRIES.iter().map(|country| country.name).collect();
        filtered_pick(options, &names, rng)
    }
}

pub struct CityGenerator;

impl Generator for CityGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::City
    }

    fn generate(&self, options: &OptionMap, rng: &mut dyn RngCore) -> String {
        filtered_pick(options, WORLD_CITIES, rng)
    }
}

fn filtered_pick(options: &OptionMap, all: &[&str], rng: &mut dyn RngCore) -> String {
    let filtered = match options.get_text("starts_with") {
        Some(prefix) => starting_with(all, &prefix),
        None => all.to_vec(),
    };
    pick_filtered(&filtered, all, rng).to_string()
}

fn format_for(code: &str) -> &'static AddressFormat {
    address_format(code).unwrap_or_else(fallback_address_format)
}

fn postal_code(rule: PostalRule, rng: &mut dyn RngCore) -> String {
    match rule {
        PostalRule::Range { min, max, width } => {
            format!("{:0width$}", rng.random_range(min..=max))
        }
        PostalRule::Pattern(pattern) => expand_pattern(pattern, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use serde_json::json;

    fn run(generator: &dyn Generator, options: serde_json::Value, seed: u64) -> String {
        let options = OptionMap::for_type(generator.type_id(), &options);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        generator.generate(&options, &mut rng)
    }

    #[test]
    fn name_filters_apply_to_first_and_last() {
        for seed in 0..10 {
            let name = run(
                &NameGenerator,
                json!({"starts_with": "em", "ends_with": "SON"}),
                seed,
            );
            let (first, last) = name.split_once(' ').expect("two words");
            assert!(first.starts_with("Em"), "{name}");
            assert!(last.ends_with("son"), "{name}");
        }
    }

    #[test]
    fn name_prefix_can_match_the_surname() {
        for seed in 0..25 {
            let name = run(&NameGenerator, json!({"starts_with": "Sm"}), seed);
            let (first, last) = name.split_once(' ').expect("two words");
            assert!(FIRST_NAMES.contains(&first), "{name}");
            assert_eq!(last, "Smith", "{name}");
        }
    }

    #[test]
    fn name_prefix_draws_from_both_lists() {
        let names: Vec<String> = (0..60)
            .map(|seed| run(&NameGenerator, json!({"starts_with": "j"}), seed))
            .collect();
        for name in &names {
            let (first, last) = name.split_once(' ').expect("two words");
            assert!(first.starts_with('J') || last.starts_with('J'), "{name}");
        }
        assert!(names.iter().any(|name| !name.starts_with('J')));
        assert!(names.iter().any(|name| name.starts_with('J')));
    }

    #[test]
    fn unmatched_name_filter_is_fully_random() {
        let name = run(
            &NameGenerator,
            json!({"starts_with": "ZZZZ", "ends_with": "son"}),
            4,
        );
        let (first, last) = name.split_once(' ').expect("two words");
        assert!(FIRST_NAMES.contains(&first));
        assert!(LAST_NAMES.contains(&last));
    }

    #[test]
    fn email_host_rules() {
        let both = run(&EmailGenerator, json!({"domain": "@acme", "extension": ".io"}), 1);
        assert!(both.ends_with("@acme.io"), "{both}");

        let domain_only = run(&EmailGenerator, json!({"domain": "corp.example"}), 1);
        assert!(domain_only.ends_with("@corp.example"));

        let extension_only = run(&EmailGenerator, json!({"extension": "org"}), 1);
        assert!(extension_only.ends_with("@example.org"));

        let neither = run(&EmailGenerator, json!({}), 1);
        let host = neither.split_once('@').map(|(_, host)| host).expect("host");
        assert!(FREE_MAIL_DOMAINS.contains(&host));

        let (handle, _) = neither.split_once('@').expect("handle");
        let digits: String = handle.chars().filter(char::is_ascii_digit).collect();
        let number: u32 = digits.parse().expect("numeric suffix");
        assert!((1..=999).contains(&number));
    }

    #[test]
    fn phone_uses_country_template_and_dial_code() {
        let us = run(&PhoneGenerator, json!({"country": "US"}), 2);
        assert!(us.starts_with("+1 ("), "{us}");
        assert_eq!(us.len(), "+1 (555) 555-5555".len());

        let uk = run(&PhoneGenerator, json!({"country": "UK"}), 2);
        assert!(uk.starts_with("+44 "), "{uk}");

        let bare = run(&PhoneGenerator, json!({"country": "US", "include_code": false}), 2);
        assert!(bare.starts_with('('));

        let unknown = run(&PhoneGenerator, json!({"country": "ZZ"}), 2);
        assert!(unknown.starts_with("+1 "));
        assert_eq!(unknown.len(), "+1 ### ### ###".len());
    }

    #[test]
    fn address_layouts_by_country() {
        let us = run(&AddressGenerator, json!({"country": "US"}), 6);
        assert_eq!(us.matches(", ").count(), 2, "{us}");
        assert!(!us.contains('\n'));

        let india = run(&AddressGenerator, json!({"country": "IN"}), 6);
        let (_, last_line) = india.rsplit_once('\n').expect("multi-line");
        let (_, pin) = last_line.rsplit_once(" - ").expect("pin separator");
        let pin: u32 = pin.parse().expect("numeric pin");
        assert!((100_000..=699_999).contains(&pin));

        let unknown = run(&AddressGenerator, json!({"country": "ZZ"}), 6);
        assert_eq!(unknown.matches(", ").count(), 2);

        let canada = run(&AddressGenerator, json!({"country": "CA"}), 6);
        let postal: Vec<char> = canada.chars().rev().take(7).collect();
        assert_eq!(postal[3], ' ');
    }

    #[test]
    fn street_uses_country_list() {
        let street = run(&StreetGenerator, json!({"country": "DE"}), 8);
        let (number, name) = street.split_once(' ').expect("number and street");
        let number: u32 = number.parse().expect("house number");
        assert!((100..=9999).contains(&number));
        assert!(fixturegen_core::tables::address::DE_STREETS.contains(&name));
    }

    #[test]
    fn username_styles() {
        let mrx = run(&UsernameGenerator, json!({"style": "mrx", "prefix": "qa_"}), 3);
        assert!(mrx.starts_with("qa_mrx"), "{mrx}");

        let year = run(&UsernameGenerator, json!({}), 3);
        let digits: String = year.chars().filter(char::is_ascii_digit).collect();
        let year: u32 = digits.parse().expect("year");
        assert!((1980..=2024).contains(&year));
    }

    #[test]
    fn ssn_shape() {
        let ssn = run(&SsnGenerator, json!({}), 12);
        let parts: Vec<&str> = ssn.split('-').collect();
        assert_eq!(parts.iter().map(|part| part.len()).collect::<Vec<_>>(), [3, 2, 4]);
    }

    #[test]
    fn country_and_city_prefix_filters() {
        for seed in 0..10 {
            let country = run(&CountryGenerator, json!({"starts_with": "uni"}), seed);
            assert!(country.starts_with("United"), "{country}");
            let city = run(&CityGenerator, json!({"starts_with": "san"}), seed);
            assert!(city.starts_with("San"), "{city}");
        }
        let fallback = run(&CityGenerator, json!({"starts_with": "qqq"}), 1);
        assert!(WORLD_CITIES.contains(&fallback.as_str()));
    }
}
