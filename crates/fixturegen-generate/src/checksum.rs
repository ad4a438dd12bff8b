//! Check-digit algorithms over decimal digit slices.
//!
//! Digit slices hold values `0..=9`, not ASCII bytes.

/// Luhn check digit for `payload`, the number without its final digit.
pub fn luhn_check_digit(payload: &[u8]) -> u8 {
    let total: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(index, digit)| {
            let digit = u32::from(*digit);
            if index % 2 == 0 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();
    ((10 - total % 10) % 10) as u8
}

/// True when `value` is a non-empty run of ASCII digits with a valid Luhn sum.
pub fn luhn_is_valid(value: &str) -> bool {
    let Some(digits) = parse_digits(value) else {
        return false;
    };
    match digits.split_last() {
        Some((check, payload)) => luhn_check_digit(payload) == *check,
        None => false,
    }
}

/// Same-shape string that fails Luhn: the final digit is bumped modulo 10.
///
/// Any single-digit change breaks the Luhn sum, so a valid input always
/// yields an invalid output.
pub fn luhn_invalidate(value: &str) -> String {
    let mut chars: Vec<char> = value.chars().collect();
    if let Some(last) = chars.iter_mut().rev().find(|ch| ch.is_ascii_digit()) {
        let digit = last.to_digit(10).unwrap_or(0);
        *last = char::from_digit((digit + 1) % 10, 10).unwrap_or('0');
    }
    chars.into_iter().collect()
}

/// Weights alternate 1/3 over the first 12 digits. Also the EAN-13 rule.
pub fn isbn13_check_digit(payload: &[u8]) -> u8 {
    let total: u32 = payload
        .iter()
        .take(12)
        .enumerate()
        .map(|(index, digit)| {
            let weight = if index % 2 == 0 { 1 } else { 3 };
            u32::from(*digit) * weight
        })
        .sum();
    ((10 - total % 10) % 10) as u8
}

/// Weights 10 down to 2 over the first 9 digits; 10 is written `X`.
pub fn isbn10_check_digit(payload: &[u8]) -> char {
    let total: u32 = payload
        .iter()
        .take(9)
        .zip((2..=10u32).rev())
        .map(|(digit, weight)| u32::from(*digit) * weight)
        .sum();
    match (11 - total % 11) % 11 {
        10 => 'X',
        digit => char::from_digit(digit, 10).unwrap_or('0'),
    }
}

pub fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|digit| char::from(b'0' + digit)).collect()
}

/// Digits of `value`, or `None` if it is empty or has a non-digit.
pub fn parse_digits(value: &str) -> Option<Vec<u8>> {
    if value.is_empty() {
        return None;
    }
    value
        .chars()
        .map(|ch| ch.to_digit(10).map(|digit| digit as u8))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luhn_matches_known_numbers() {
        let payload = parse_digits("7992739871").expect("digits");
        assert_eq!(luhn_check_digit(&payload), 3);
        assert!(luhn_is_valid("79927398713"));
        assert!(luhn_is_valid("4111111111111111"));
        assert!(luhn_is_valid("490154203237518"));
        assert!(!luhn_is_valid("79927398710"));
    }

    #[test]
    fn luhn_rejects_non_digits() {
        assert!(!luhn_is_valid(""));
        assert!(!luhn_is_valid("4111-1111-1111-1111"));
    }

    #[test]
    fn invalidate_bumps_last_digit_and_wraps() {
        assert_eq!(luhn_invalidate("79927398713"), "79927398714");
        assert_eq!(luhn_invalidate("4111111111111119"), "4111111111111110");
        assert!(!luhn_is_valid(&luhn_invalidate("4111111111111111")));
    }

    #[test]
    fn isbn_check_digits() {
        let isbn13 = parse_digits("978030640615").expect("digits");
        assert_eq!(isbn13_check_digit(&isbn13), 7);

        let isbn10 = parse_digits("030640615").expect("digits");
        assert_eq!(isbn10_check_digit(&isbn10), '2');

        let with_x = parse_digits("080442957").expect("digits");
        assert_eq!(isbn10_check_digit(&with_x), 'X');
    }
}
