use std::sync::OnceLock;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::options::{OptionChoice, OptionSpec};
use crate::tables::cards::{CARD_ISSUERS, IMEI_BRANDS};
use crate::tables::countries::COUNTRIES;
use crate::tables::words::SENIORITY_LEVELS;
use crate::types::{Category, TypeId};

/// Catalog entry describing one generatable type and its options.
#[derive(Debug, Clone, Serialize)]
pub struct TypeDescriptor {
    pub id: TypeId,
    pub display_name: &'static str,
    pub icon: &'static str,
    pub category: Category,
    /// Whether request prefix/suffix are spliced into generated values.
    pub supports_affix: bool,
    pub options: Vec<OptionSpec>,
}

impl TypeDescriptor {
    fn new(
        id: TypeId,
        display_name: &'static str,
        icon: &'static str,
        category: Category,
    ) -> Self {
        Self {
            id,
            display_name,
            icon,
            category,
            supports_affix: false,
            options: Vec::new(),
        }
    }

    fn affix(mut self) -> Self {
        self.supports_affix = true;
        self
    }

    fn option(mut self, spec: OptionSpec) -> Self {
        self.options.push(spec);
        self
    }

    pub fn option_spec(&self, key: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|spec| spec.key == key)
    }

    pub fn summary(&self) -> TypeSummary {
        TypeSummary {
            id: self.id,
            display_name: self.display_name,
            icon: self.icon,
            category: self.category,
        }
    }
}

/// Display-only projection returned by [`list_types`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeSummary {
    pub id: TypeId,
    pub display_name: &'static str,
    pub icon: &'static str,
    pub category: Category,
}

fn registry() -> &'static [TypeDescriptor] {
    static REGISTRY: OnceLock<Vec<TypeDescriptor>> = OnceLock::new();
    REGISTRY.get_or_init(|| TypeId::ALL.into_iter().map(describe).collect())
}

/// Summaries for every type, in catalog order.
pub fn list_types() -> Vec<TypeSummary> {
    registry().iter().map(TypeDescriptor::summary).collect()
}

/// Full descriptor for a wire id.
pub fn get_type(id: &str) -> Result<&'static TypeDescriptor> {
    let type_id = TypeId::parse(id).ok_or_else(|| Error::UnknownType(id.to_string()))?;
    Ok(descriptor(type_id))
}

pub fn get_type_options(id: &str) -> Result<&'static [OptionSpec]> {
    get_type(id).map(|descriptor| descriptor.options.as_slice())
}

/// Descriptor for an already-resolved id; the catalog is total over `TypeId`.
pub fn descriptor(type_id: TypeId) -> &'static TypeDescriptor {
    let index = TypeId::ALL
        .iter()
        .position(|candidate| *candidate == type_id)
        .unwrap_or_default();
    &registry()[index]
}

fn describe(id: TypeId) -> TypeDescriptor {
    match id {
        TypeId::Uuid => TypeDescriptor::new(id, "UUID", "🎲", Category::Identifiers)
            .affix()
            .option(OptionSpec::text("prefix", "Prefix").with_placeholder("e.g., ab"))
            .option(OptionSpec::text("suffix", "Suffix").with_placeholder("e.g., ff")),
        TypeId::Phone => TypeDescriptor::new(id, "Phone", "📞", Category::Contact)
            .option(OptionSpec::select_search(
                "country",
                "Country",
                dial_code_choices(),
                "US",
            ))
            .option(OptionSpec::checkbox(
                "include_code",
                "Include Country Code",
                true,
            )),
        TypeId::Email => TypeDescriptor::new(id, "Email", "📧", Category::Contact)
            .option(
                OptionSpec::text("domain", "Domain")
                    .with_placeholder("e.g., gmail.com or company.com"),
            )
            .option(OptionSpec::text("extension", "Extension").with_placeholder("e.g., com, org, net")),
        TypeId::Address => TypeDescriptor::new(id, "Address", "🏠", Category::Location).option(
            OptionSpec::select_search("country", "Country", country_choices(), "US"),
        ),
        TypeId::Name => TypeDescriptor::new(id, "Name", "👤", Category::Personal)
            .option(OptionSpec::text("starts_with", "Starts With").with_placeholder("Letter or word"))
            .option(OptionSpec::text("ends_with", "Ends With").with_placeholder("e.g., son")),
        TypeId::Imei => TypeDescriptor::new(id, "IMEI", "📱", Category::Device)
            .option(OptionSpec::select("brand", "Brand", imei_brand_choices(), "Random"))
            .option(OptionSpec::checkbox(
                "valid_checksum",
                "Valid Checksum",
                true,
            )),
        TypeId::CreditCard => {
            TypeDescriptor::new(id, "Credit Card", "💳", Category::Financial)
                .option(OptionSpec::select(
                    "card_type",
                    "Card Type",
                    card_type_choices(),
                    "Random",
                ))
                .option(OptionSpec::checkbox("valid", "Valid Checksum", true))
        }
        TypeId::Ssn => TypeDescriptor::new(id, "SSN", "🔢", Category::Personal),
        TypeId::Ip => TypeDescriptor::new(id, "IP Address", "🌐", Category::Network)
            .affix()
            .option(OptionSpec::radio(
                "version",
                "IP Version",
                vec![
                    OptionChoice::new("ipv4", "IPv4"),
                    OptionChoice::new("ipv6", "IPv6"),
                ],
                "ipv4",
            )),
        TypeId::Datetime => TypeDescriptor::new(id, "DateTime", "🕐", Category::Temporal)
            .option(OptionSpec::checkbox("include_date", "Include Date", true))
            .option(OptionSpec::checkbox("include_time", "Include Time", true))
            .option(OptionSpec::checkbox(
                "include_seconds",
                "Include Seconds",
                false,
            ))
            .option(OptionSpec::checkbox(
                "include_timezone",
                "Include Timezone (Z)",
                false,
            )),
        TypeId::Username => TypeDescriptor::new(id, "Username", "🎮", Category::Personal)
            .option(OptionSpec::text("prefix", "Prefix").with_placeholder("e.g., user_"))
            .option(OptionSpec::select(
                "style",
                "Style",
                vec![
                    OptionChoice::new("name_year", "name + year"),
                    OptionChoice::new("adj_noun", "adjective + noun"),
                    OptionChoice::new("name_random", "name + random"),
                    OptionChoice::new("mrx", "mrx + name"),
                ],
                "name_year",
            )),
        TypeId::Password => TypeDescriptor::new(id, "Password", "🔐", Category::Personal)
            .option(OptionSpec::checkbox("uppercase", "Uppercase (A-Z)", true))
            .option(OptionSpec::checkbox("lowercase", "Lowercase (a-z)", true))
            .option(OptionSpec::checkbox("numbers", "Numbers (0-9)", true))
            .option(OptionSpec::checkbox("special", "Special (!@#$)", false))
            .option(OptionSpec::number("length", "Length", 16, 4, 128)),
        TypeId::Company => TypeDescriptor::new(id, "Company", "🏢", Category::Organization)
            .option(OptionSpec::text("starts_with", "Starts With").with_placeholder("e.g., Tech")),
        TypeId::Job => TypeDescriptor::new(id, "Job Title", "💼", Category::Organization).option(
            OptionSpec::select(
                "seniority",
                "Seniority",
                SENIORITY_LEVELS
                    .iter()
                    .map(|level| OptionChoice::new(*level, *level))
                    .collect(),
                "any",
            ),
        ),
        TypeId::Country => TypeDescriptor::new(id, "Country", "🌍", Category::Location)
            .option(OptionSpec::text("starts_with", "Starts With").with_placeholder("e.g., U")),
        TypeId::City => TypeDescriptor::new(id, "City", "🏙️", Category::Location)
            .option(OptionSpec::text("starts_with", "Starts With").with_placeholder("e.g., N")),
        TypeId::Street => TypeDescriptor::new(id, "Street", "🛣️", Category::Location).option(
            OptionSpec::select_search("country", "Country", country_choices(), "US"),
        ),
        TypeId::Zipcode => TypeDescriptor::new(id, "ZIP Code", "📮", Category::Location)
            .option(OptionSpec::number("zip_from", "From", 10000, 0, 99999))
            .option(OptionSpec::number("zip_to", "To", 99999, 0, 99999)),
        TypeId::Text => TypeDescriptor::new(id, "Text", "📝", Category::Text)
            .option(OptionSpec::number("length", "Word Count", 5, 1, 50)),
        TypeId::Sentence => TypeDescriptor::new(id, "Sentence", "📚", Category::Text),
        TypeId::Paragraph => TypeDescriptor::new(id, "Paragraph", "📖", Category::Text)
            .option(OptionSpec::number("sentences", "Sentences", 3, 1, 20)),
        TypeId::HexColor => TypeDescriptor::new(id, "Hex Color", "🎨", Category::Color)
            .option(OptionSpec::checkbox("uppercase", "Uppercase", false)),
        TypeId::RgbColor => TypeDescriptor::new(id, "RGB Color", "🌈", Category::Color),
        TypeId::Url => TypeDescriptor::new(id, "URL", "🔗", Category::Network)
            .option(OptionSpec::text("domain", "Domain").with_placeholder("e.g., google"))
            .option(OptionSpec::text("tld", "TLD").with_placeholder("e.g., com")),
        TypeId::MacAddress => TypeDescriptor::new(id, "MAC Address", "🔌", Category::Network)
            .affix()
            .option(OptionSpec::checkbox("uppercase", "Uppercase", false))
            .option(OptionSpec::select(
                "separator",
                "Separator",
                vec![
                    OptionChoice::new(":", "Colon (:)"),
                    OptionChoice::new("-", "Dash (-)"),
                    OptionChoice::new("none", "None"),
                ],
                ":",
            )),
        TypeId::Isbn => TypeDescriptor::new(id, "ISBN", "📚", Category::Identifiers)
            .affix()
            .option(OptionSpec::radio(
                "format",
                "Format",
                vec![
                    OptionChoice::new("isbn13", "ISBN-13"),
                    OptionChoice::new("isbn10", "ISBN-10"),
                ],
                "isbn13",
            )),
        TypeId::Barcode => TypeDescriptor::new(id, "Barcode", "📊", Category::Identifiers).affix(),
    }
}

fn dial_code_choices() -> Vec<OptionChoice> {
    COUNTRIES
        .iter()
        .map(|country| {
            OptionChoice::new(
                country.code,
                format!("{} - {}", country.dial_code, country.name),
            )
        })
        .collect()
}

fn country_choices() -> Vec<OptionChoice> {
    COUNTRIES
        .iter()
        .map(|country| OptionChoice::new(country.code, country.name))
        .collect()
}

fn imei_brand_choices() -> Vec<OptionChoice> {
    let mut choices: Vec<OptionChoice> = IMEI_BRANDS
        .iter()
        .map(|brand| OptionChoice::new(brand.name, brand.name))
        .collect();
    choices.push(OptionChoice::new("Generic", "Generic"));
    choices.push(OptionChoice::new("Random", "Random"));
    choices
}

fn card_type_choices() -> Vec<OptionChoice> {
    let mut choices: Vec<OptionChoice> = CARD_ISSUERS
        .iter()
        .map(|issuer| OptionChoice::new(issuer.name, issuer.name))
        .collect();
    choices.push(OptionChoice::new("Random", "Random"));
    choices
}
