use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Closed set of generatable data types.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TypeId {
    Uuid,
    Phone,
    Email,
    Address,
    Name,
    Imei,
    CreditCard,
    Ssn,
    Ip,
    Datetime,
    Username,
    Password,
    Company,
    Job,
    Country,
    City,
    Street,
    Zipcode,
    Text,
    Sentence,
    Paragraph,
    HexColor,
    RgbColor,
    Url,
    MacAddress,
    Isbn,
    Barcode,
}

impl TypeId {
    /// Every type in catalog order.
    pub const ALL: [TypeId; 27] = [
        TypeId::Uuid,
        TypeId::Phone,
        TypeId::Email,
        TypeId::Address,
        TypeId::Name,
        TypeId::Imei,
        TypeId::CreditCard,
        TypeId::Ssn,
        TypeId::Ip,
        TypeId::Datetime,
        TypeId::Username,
        TypeId::Password,
        TypeId::Company,
        TypeId::Job,
        TypeId::Country,
        TypeId::City,
        TypeId::Street,
        TypeId::Zipcode,
        TypeId::Text,
        TypeId::Sentence,
        TypeId::Paragraph,
        TypeId::HexColor,
        TypeId::RgbColor,
        TypeId::Url,
        TypeId::MacAddress,
        TypeId::Isbn,
        TypeId::Barcode,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TypeId::Uuid => "uuid",
            TypeId::Phone => "phone",
            TypeId::Email => "email",
            TypeId::Address => "address",
            TypeId::Name => "name",
            TypeId::Imei => "imei",
            TypeId::CreditCard => "credit_card",
            TypeId::Ssn => "ssn",
            TypeId::Ip => "ip",
            TypeId::Datetime => "datetime",
            TypeId::Username => "username",
            TypeId::Password => "password",
            TypeId::Company => "company",
            TypeId::Job => "job",
            TypeId::Country => "country",
            TypeId::City => "city",
            TypeId::Street => "street",
            TypeId::Zipcode => "zipcode",
            TypeId::Text => "text",
            TypeId::Sentence => "sentence",
            TypeId::Paragraph => "paragraph",
            TypeId::HexColor => "hex_color",
            TypeId::RgbColor => "rgb_color",
            TypeId::Url => "url",
            TypeId::MacAddress => "mac_address",
            TypeId::Isbn => "isbn",
            TypeId::Barcode => "barcode",
        }
    }

    /// Exact, case-sensitive lookup by wire id.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == value)
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TypeId {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| Error::UnknownType(value.to_string()))
    }
}

/// Display grouping for the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Identifiers,
    Personal,
    Contact,
    Location,
    Financial,
    Device,
    Network,
    Temporal,
    Organization,
    Text,
    Color,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Identifiers => "identifiers",
            Category::Personal => "personal",
            Category::Contact => "contact",
            Category::Location => "location",
            Category::Financial => "financial",
            Category::Device => "device",
            Category::Network => "network",
            Category::Temporal => "temporal",
            Category::Organization => "organization",
            Category::Text => "text",
            Category::Color => "color",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
