use chrono::{NaiveDate, NaiveTime};
use fixturegen_core::TypeId;
use fixturegen_core::tables::words::TEXT_WORDS;
use rand::{Rng, RngCore};

use crate::generators::{Generator, pick};
use crate::params::OptionMap;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

pub struct UuidGenerator;

impl Generator for UuidGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::Uuid
    }

    fn generate(&self, _options: &OptionMap, rng: &mut dyn RngCore) -> String {
        let mut bytes = [0_u8; 16];
        rng.fill_bytes(&mut bytes);
        uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .hyphenated()
            .to_string()
    }
}

pub struct DatetimeGenerator;

impl Generator for DatetimeGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::Datetime
    }

    fn generate(&self, options: &OptionMap, rng: &mut dyn RngCore) -> String {
        let include_date = options.get_bool("include_date");
        let include_time = options.get_bool("include_time");
        let include_seconds = options.get_bool("include_seconds");
        let include_timezone = options.get_bool("include_timezone");

        let date = NaiveDate::from_ymd_opt(
            rng.random_range(2020..=2025),
            rng.random_range(1..=12),
            rng.random_range(1..=28),
        )
        .unwrap_or_default();
        let time = NaiveTime::from_hms_opt(
            rng.random_range(0..=23),
            rng.random_range(0..=59),
            rng.random_range(0..=59),
        )
        .unwrap_or_default();

        let mut out = String::new();
        if include_date {
            out.push_str(&date.format("%Y-%m-%d").to_string());
        }
        if include_time {
            if include_date {
                out.push('T');
            }
            let pattern = if include_seconds { "%H:%M:%S" } else { "%H:%M" };
            out.push_str(&time.format(pattern).to_string());
        }
        // A bare zone marker is not a timestamp.
        if include_timezone && !out.is_empty() {
            out.push('Z');
        }
        out
    }
}

pub struct PasswordGenerator;

impl Generator for PasswordGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::Password
    }

    fn generate(&self, options: &OptionMap, rng: &mut dyn RngCore) -> String {
        let mut pool = String::new();
        for (key, class) in [
            ("uppercase", UPPERCASE),
            ("lowercase", LOWERCASE),
            ("numbers", DIGITS),
            ("special", SPECIAL),
        ] {
            if options.get_bool(key) {
                pool.push_str(class);
            }
        }
        if pool.is_empty() {
            pool.push_str(LOWERCASE);
        }

        let pool: Vec<char> = pool.chars().collect();
        let length = options.get_i64("length").max(0) as usize;
        (0..length)
            .map(|_| pool[rng.random_range(0..pool.len())])
            .collect()
    }
}

pub struct ZipcodeGenerator;

impl Generator for ZipcodeGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::Zipcode
    }

    fn generate(&self, options: &OptionMap, rng: &mut dyn RngCore) -> String {
        let from = options.get_i64("zip_from");
        let to = options.get_i64("zip_to");
        rng.random_range(from.min(to)..=from.max(to)).to_string()
    }
}

pub struct TextGenerator;

impl Generator for TextGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::Text
    }

    fn generate(&self, options: &OptionMap, rng: &mut dyn RngCore) -> String {
        let count = options.get_i64("length").max(1) as usize;
        words(rng, count).join(" ")
    }
}

pub struct SentenceGenerator;

impl Generator for SentenceGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::Sentence
    }

    fn generate(&self, _options: &OptionMap, rng: &mut dyn RngCore) -> String {
        sentence(rng)
    }
}

pub struct ParagraphGenerator;

impl Generator for ParagraphGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::Paragraph
    }

    fn generate(&self, options: &OptionMap, rng: &mut dyn RngCore) -> String {
        let count = options.get_i64("sentences").max(1);
        (0..count)
            .map(|_| sentence(rng))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub struct HexColorGenerator;

impl Generator for HexColorGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::HexColor
    }

    fn generate(&self, options: &OptionMap, rng: &mut dyn RngCore) -> String {
        let color: u32 = rng.random_range(0..=0xFF_FFFF);
        if options.get_bool("uppercase") {
            format!("#{color:06X}")
        } else {
            format!("#{color:06x}")
        }
    }
}

pub struct RgbColorGenerator;

impl Generator for RgbColorGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::RgbColor
    }

    fn generate(&self, _options: &OptionMap, rng: &mut dyn RngCore) -> String {
        let r: u8 = rng.random();
        let g: u8 = rng.random();
        let b: u8 = rng.random();
        format!("rgb({r}, {g}, {b})")
    }
}

fn words(rng: &mut dyn RngCore, count: usize) -> Vec<&'static str> {
    (0..count)
        .map(|_| pick(TEXT_WORDS, rng).unwrap_or("lorem"))
        .collect()
}

fn sentence(rng: &mut dyn RngCore) -> String {
    let count = rng.random_range(5..=10);
    let text = words(rng, count).join(" ");
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::from("."),
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
    fn datetime_shapes_follow_flags() {
        let full = run(
            &DatetimeGenerator,
            json!({"include_seconds": true, "include_timezone": true}),
            3,
        );
        assert_eq!(full.len(), "2024-01-01T00:00:00Z".len());
        assert_eq!(&full[10..11], "T");
        assert!(full.ends_with('Z'));

        let date_only = run(&DatetimeGenerator, json!({"include_time": false}), 3);
        assert_eq!(date_only.len(), 10);
        let year: i32 = date_only[..4].parse().expect("year");
        assert!((2020..=2025).contains(&year));

        let time_only = run(&DatetimeGenerator, json!({"include_date": false}), 3);
        assert_eq!(time_only.len(), 5);

        let empty = run(
            &DatetimeGenerator,
            json!({"include_date": false, "include_time": false, "include_timezone": true}),
            3,
        );
        assert_eq!(empty, "");
    }

    #[test]
    fn password_respects_length_and_classes() {
        let digits_only = run(
            &PasswordGenerator,
            json!({"uppercase": false, "lowercase": false, "numbers": true, "length": 12}),
            11,
        );
        assert_eq!(digits_only.len(), 12);
        assert!(digits_only.chars().all(|ch| ch.is_ascii_digit()));

        let nothing = run(
            &PasswordGenerator,
            json!({"uppercase": false, "lowercase": false, "numbers": false, "length": 1}),
            11,
        );
        assert_eq!(nothing.len(), 4);
        assert!(nothing.chars().all(|ch| ch.is_ascii_lowercase()));
    }

    #[test]
    fn zipcode_corrects_inverted_bounds() {
        for seed in 0..20 {
            let value: i64 = run(
                &ZipcodeGenerator,
                json!({"zip_from": 99999, "zip_to": 10000}),
                seed,
            )
            .parse()
            .expect("zip");
            assert!((10000..=99999).contains(&value));
        }
        assert_eq!(
            run(&ZipcodeGenerator, json!({"zip_from": 500, "zip_to": 500}), 1),
            "500"
        );
    }

    #[test]
    fn text_shapes() {
        let text = run(&TextGenerator, json!({"length": 7}), 5);
        assert_eq!(text.split(' ').count(), 7);

        let sentence = run(&SentenceGenerator, json!({}), 5);
        assert!(sentence.ends_with('.'));
        assert!(sentence.chars().next().is_some_and(char::is_uppercase));
        let words = sentence.split(' ').count();
        assert!((5..=10).contains(&words));

        let paragraph = run(&ParagraphGenerator, json!({"sentences": 4}), 5);
        assert_eq!(paragraph.matches('.').count(), 4);
    }

    #[test]
    fn colors_are_well_formed() {
        let hex = run(&HexColorGenerator, json!({"uppercase": true}), 9);
        assert_eq!(hex.len(), 7);
        assert!(hex.starts_with('#'));
        assert!(hex[1..].chars().all(|ch| ch.is_ascii_digit() || ch.is_ascii_uppercase()));

        let rgb = run(&RgbColorGenerator, json!({}), 9);
        assert!(rgb.starts_with("rgb(") && rgb.ends_with(')'));
        assert_eq!(rgb.split(", ").count(), 3);
    }
}
