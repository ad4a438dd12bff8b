use fixturegen_core::TypeId;
use fixturegen_core::tables::words::{URL_DOMAINS, URL_PATHS, URL_TLDS};
use rand::{Rng, RngCore};

use crate::generators::{Generator, pick};
use crate::params::OptionMap;

pub struct IpGenerator;

impl Generator for IpGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::Ip
    }

    fn generate(&self, options: &OptionMap, rng: &mut dyn RngCore) -> String {
        if options.get_choice("version") == "ipv6" {
            return (0..8)
                .map(|_| format!("{:x}", rng.random::<u16>()))
                .collect::<Vec<_>>()
                .join(":");
        }
        let first: u8 = rng.random_range(1..=255);
        let [b, c, d]: [u8; 3] = rng.random();
        format!("{first}.{b}.{c}.{d}")
    }
}

pub struct MacAddressGenerator;

impl Generator for MacAddressGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::MacAddress
    }

    fn generate(&self, options: &OptionMap, rng: &mut dyn RngCore) -> String {
        let separator = match options.get_choice("separator").as_str() {
            "none" => "",
            "-" => "-",
            _ => ":",
        };
        let uppercase = options.get_bool("uppercase");
        let mut octets = [0_u8; 6];
        rng.fill_bytes(&mut octets);
        octets
            .iter()
            .map(|octet| {
                if uppercase {
                    format!("{octet:02X}")
                } else {
                    format!("{octet:02x}")
                }
            })
            .collect::<Vec<_>>()
            .join(separator)
    }
}

pub struct UrlGenerator;

impl Generator for UrlGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::Url
    }

    fn generate(&self, options: &OptionMap, rng: &mut dyn RngCore) -> String {
        let domain = options
            .get_text("domain")
            .unwrap_or_else(|| pick(URL_DOMAINS, rng).unwrap_or("example").to_string());
        let tld = options
            .get_text("tld")
            .map(|tld| tld.trim_start_matches('.').to_string())
            .unwrap_or_else(|| pick(URL_TLDS, rng).unwrap_or("com").to_string());
        let path = pick(URL_PATHS, rng).unwrap_or("about");
        format!("https://{domain}.{tld}/{path}")
    }
}
