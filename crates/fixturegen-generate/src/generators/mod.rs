use fixturegen_core::TypeId;
use rand::{Rng, RngCore};

use crate::params::OptionMap;

pub mod domain;
pub mod network;
pub mod primitives;
pub mod semantic;

/// One value generator per catalog type.
///
/// Generators cannot fail: every option has already been coerced to a usable
/// value, and empty candidate sets fall back to an unconstrained pick.
pub trait Generator: Send + Sync {
    fn type_id(&self) -> TypeId;

    fn generate(&self, options: &OptionMap, rng: &mut dyn RngCore) -> String;
}

/// Resolve the generator for a type. Total over `TypeId`.
pub fn generator_for(type_id: TypeId) -> &'static dyn Generator {
    match type_id {
        TypeId::Uuid => &primitives::UuidGenerator,
        TypeId::Phone => &semantic::PhoneGenerator,
        TypeId::Email => &semantic::EmailGenerator,
        TypeId::Address => &semantic::AddressGenerator,
        TypeId::Name => &semantic::NameGenerator,
        TypeId::Imei => &domain::devices::ImeiGenerator,
        TypeId::CreditCard => &domain::finance::CreditCardGenerator,
        TypeId::Ssn => &semantic::SsnGenerator,
        TypeId::Ip => &network::IpGenerator,
        TypeId::Datetime => &primitives::DatetimeGenerator,
        TypeId::Username => &semantic::UsernameGenerator,
        TypeId::Password => &primitives::PasswordGenerator,
        TypeId::Company => &domain::org::CompanyGenerator,
        TypeId::Job => &domain::org::JobGenerator,
        TypeId::Country => &semantic::CountryGenerator,
        TypeId::City => &semantic::CityGenerator,
        TypeId::Street => &semantic::StreetGenerator,
        TypeId::Zipcode => &primitives::ZipcodeGenerator,
        TypeId::Text => &primitives::TextGenerator,
        TypeId::Sentence => &primitives::SentenceGenerator,
        TypeId::Paragraph => &primitives::ParagraphGenerator,
        TypeId::HexColor => &primitives::HexColorGenerator,
        TypeId::RgbColor => &primitives::RgbColorGenerator,
        TypeId::Url => &network::UrlGenerator,
        TypeId::MacAddress => &network::MacAddressGenerator,
        TypeId::Isbn => &domain::publishing::IsbnGenerator,
        TypeId::Barcode => &domain::publishing::BarcodeGenerator,
    }
}

pub(crate) fn pick<'a>(values: &[&'a str], rng: &mut dyn RngCore) -> Option<&'a str> {
    if values.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..values.len());
    values.get(idx).copied()
}

/// Pick from `filtered`, or from `all` when the filter matched nothing.
pub(crate) fn pick_filtered<'a>(
    filtered: &[&'a str],
    all: &[&'a str],
    rng: &mut dyn RngCore,
) -> &'a str {
    pick(filtered, rng)
        .or_else(|| pick(all, rng))
        .unwrap_or_default()
}

/// Entries whose name starts with `prefix`, ignoring case.
pub(crate) fn starting_with<'a>(values: &[&'a str], prefix: &str) -> Vec<&'a str> {
    let prefix = prefix.to_lowercase();
    values
        .iter()
        .copied()
        .filter(|value| value.to_lowercase().starts_with(&prefix))
        .collect()
}

pub(crate) fn random_digits(rng: &mut dyn RngCore, count: usize) -> Vec<u8> {
    (0..count).map(|_| rng.random_range(0..=9u8)).collect()
}

/// Expand a template: `#` any digit, `N` a digit 2-9, `L` an upper-case
/// letter. Other characters are copied through.
pub(crate) fn expand_pattern(template: &str, rng: &mut dyn RngCore) -> String {
    template
        .chars()
        .map(|ch| match ch {
            '#' => char::from(b'0' + rng.random_range(0..=9u8)),
            'N' => char::from(b'0' + rng.random_range(2..=9u8)),
            'L' => char::from(b'A' + rng.random_range(0..26u8)),
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn every_type_resolves_to_its_generator() {
        for id in TypeId::ALL {
            assert_eq!(generator_for(id).type_id(), id);
        }
    }

    #[test]
    fn patterns_expand_by_class() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let value = expand_pattern("(N#) L-#", &mut rng);
            let chars: Vec<char> = value.chars().collect();
            assert_eq!(chars.len(), 8);
            assert_eq!(chars[0], '(');
            assert!(('2'..='9').contains(&chars[1]));
            assert!(chars[2].is_ascii_digit());
            assert!(chars[5].is_ascii_uppercase());
            assert_eq!(chars[6], '-');
        }
    }

    #[test]
    fn empty_filters_fall_back_to_all() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let all = ["Paris", "Prague", "Lisbon"];
        assert_eq!(starting_with(&all, "pa"), vec!["Paris"]);
        let picked = pick_filtered(&starting_with(&all, "zz"), &all, &mut rng);
        assert!(all.contains(&picked));
    }
}
