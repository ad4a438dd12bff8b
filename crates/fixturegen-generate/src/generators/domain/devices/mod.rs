use fixturegen_core::TypeId;
use fixturegen_core::tables::{GENERIC_TAC_RANGE, imei_brand};
use rand::{Rng, RngCore};

use crate::checksum::{digits_to_string, luhn_check_digit, luhn_invalidate};
use crate::generators::{Generator, random_digits};
use crate::params::OptionMap;

const SERIAL_DIGITS: usize = 12;

pub struct ImeiGenerator;

impl Generator for ImeiGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::Imei
    }

    fn generate(&self, options: &OptionMap, rng: &mut dyn RngCore) -> String {
        let mut digits: Vec<u8> = match imei_brand(&options.get_choice("brand")) {
            Some(brand) => brand.tac.bytes().map(|byte| byte - b'0').collect(),
            None => {
                let (low, high) = GENERIC_TAC_RANGE;
                let code: u32 = rng.random_range(low..=high);
                vec![(code / 10) as u8, (code % 10) as u8]
            }
        };
        digits.extend(random_digits(rng, SERIAL_DIGITS));

        digits.push(luhn_check_digit(&digits));
        let imei = digits_to_string(&digits);
        if options.get_bool("valid_checksum") {
            imei
        } else {
            luhn_invalidate(&imei)
        }
    }
}
