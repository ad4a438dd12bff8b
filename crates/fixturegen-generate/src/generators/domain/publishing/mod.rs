use fixturegen_core::TypeId;
use rand::RngCore;

use crate::checksum::{digits_to_string, isbn10_check_digit, isbn13_check_digit};
use crate::generators::{Generator, random_digits};
use crate::params::OptionMap;

const BOOKLAND: [u8; 3] = [9, 7, 8];

pub struct IsbnGenerator;

impl Generator for IsbnGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::Isbn
    }

    fn generate(&self, options: &OptionMap, rng: &mut dyn RngCore) -> String {
        let body = random_digits(rng, 9);
        let group = digits_to_string(&body[..1]);
        let publisher = digits_to_string(&body[1..4]);
        let title = digits_to_string(&body[4..]);

        if options.get_choice("format") == "isbn10" {
            let check = isbn10_check_digit(&body);
            return format!("{group}-{publisher}-{title}-{check}");
        }

        let mut digits = BOOKLAND.to_vec();
        digits.extend_from_slice(&body);
        let check = isbn13_check_digit(&digits);
        format!("978-{group}-{publisher}-{title}-{check}")
    }
}

/// EAN-13: twelve random digits and the ISBN-13 check digit.
pub struct BarcodeGenerator;

impl Generator for BarcodeGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::Barcode
    }

    fn generate(&self, _options: &OptionMap, rng: &mut dyn RngCore) -> String {
        let mut digits = random_digits(rng, 12);
        digits.push(isbn13_check_digit(&digits));
        digits_to_string(&digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::parse_digits;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use serde_json::json;

    fn run(generator: &dyn Generator, options: serde_json::Value, seed: u64) -> String {
        let options = OptionMap::for_type(generator.type_id(), &options);
        generator.generate(&options, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn isbn10_layout() {
        let isbn = run(&IsbnGenerator, json!({"format": "isbn10"}), 5);
        let parts: Vec<&str> = isbn.split('-').collect();
        assert_eq!(parts.iter().map(|part| part.len()).collect::<Vec<_>>(), [1, 3, 5, 1]);
        let payload = parse_digits(&parts[..3].concat()).expect("digits");
        assert_eq!(parts[3].chars().next(), Some(isbn10_check_digit(&payload)));
    }

    #[test]
    fn barcode_is_valid_ean13() {
        for seed in 0..10 {
            let code = run(&BarcodeGenerator, json!({}), seed);
            let digits = parse_digits(&code).expect("digits");
            assert_eq!(digits.len(), 13);
            assert_eq!(digits[12], isbn13_check_digit(&digits[..12]));
        }
    }
}
