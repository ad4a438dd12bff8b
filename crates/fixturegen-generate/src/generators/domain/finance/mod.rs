use fixturegen_core::TypeId;
use fixturegen_core::tables::{CARD_ISSUERS, CardIssuer, card_issuer};
use rand::{Rng, RngCore};

use crate::checksum::{digits_to_string, luhn_check_digit, luhn_invalidate};
use crate::generators::{Generator, random_digits};
use crate::params::OptionMap;

pub struct CreditCardGenerator;

impl Generator for CreditCardGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::CreditCard
    }

    fn generate(&self, options: &OptionMap, rng: &mut dyn RngCore) -> String {
        let issuer = resolve_issuer(&options.get_choice("card_type"), rng);
        let prefix = issuer.prefixes[rng.random_range(0..issuer.prefixes.len())];

        let mut digits: Vec<u8> = prefix.bytes().map(|byte| byte - b'0').collect();
        let padding = issuer.length.saturating_sub(digits.len() + 1);
        digits.extend(random_digits(rng, padding));

        digits.push(luhn_check_digit(&digits));
        let mut number = digits_to_string(&digits);
        if !options.get_bool("valid") {
            number = luhn_invalidate(&number);
        }
        group(&number, issuer.grouping)
    }
}

fn resolve_issuer(name: &str, rng: &mut dyn RngCore) -> &'static CardIssuer {
    card_issuer(name).unwrap_or_else(|| &CARD_ISSUERS[rng.random_range(0..CARD_ISSUERS.len())])
}

/// Split `number` into dash-joined groups of the given widths.
fn group(number: &str, widths: &[usize]) -> String {
    let mut groups = Vec::with_capacity(widths.len());
    let mut rest = number;
    for width in widths {
        let (head, tail) = rest.split_at((*width).min(rest.len()));
        if !head.is_empty() {
            groups.push(head);
        }
        rest = tail;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.join("-")
}
