//! Static locale and format tables.
//!
//! Everything here is read-only data compiled into the binary. Lookups never
//! fail: callers get `None` and apply the documented fallback.

pub mod address;
pub mod cards;
pub mod countries;
pub mod phone;
pub mod words;

pub use address::{
    ADDRESS_FORMATS, AddressFormat, PostalRule, address_format, fallback_address_format,
};
pub use cards::{
    CARD_ISSUERS, CardIssuer, GENERIC_TAC_RANGE, IMEI_BRANDS, ImeiBrand, card_issuer, imei_brand,
};
pub use countries::{COUNTRIES, Country, country, normalize_country_code};
pub use phone::{GENERIC_PHONE_TEMPLATE, PHONE_FORMATS, PhoneFormat, phone_template};
