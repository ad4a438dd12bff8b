use super::countries::normalize_country_code;

/// How a country's postal code is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostalRule {
    /// Uniform integer in `[min, max]`, zero-padded to `width`.
    Range { min: u32, max: u32, width: usize },
    /// Pattern over `#` (digit) and `L` (upper-case letter); other characters literal.
    Pattern(&'static str),
}

/// Everything needed to render an address for one country.
///
/// `layout` placeholders: `{number}`, `{street}`, `{city}`, `{region}`, `{postal}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressFormat {
    pub country: &'static str,
    pub streets: &'static [&'static str],
    pub cities: &'static [&'static str],
    pub regions: &'static [&'static str],
    pub house_numbers: (u32, u32),
    pub postal: PostalRule,
    pub layout: &'static str,
}

pub const US_STREETS: &[&str] = &[
    "Main St",
    "Oak Ave",
    "Park Blvd",
    "First St",
    "Second St",
    "Elm St",
    "Maple Dr",
    "Cedar Ln",
    "Pine St",
    "Elmwood Ave",
    "Washington St",
    "Lake Dr",
    "Hill Rd",
    "River Rd",
    "Forest Ave",
    "Broadway",
    "Market St",
    "Church St",
    "School Ave",
    "Mill Rd",
];

pub const UK_STREETS: &[&str] = &[
    "High Street",
    "Station Road",
    "London Road",
    "Victoria Road",
    "Church Lane",
    "Manor Road",
    "Park Road",
    "Queens Road",
    "Kings Road",
    "Church Street",
    "Main Road",
    "River Close",
    "Hill View",
    "Station Lane",
    "Park Lane",
];

pub const DE_STREETS: &[&str] = &[
    "Hauptstraße",
    "Bahnhofstraße",
    "Schulstraße",
    "Gartenstraße",
    "Dorfstraße",
    "Bergstraße",
    "Waldstraße",
    "Kirchstraße",
    "Lindenstraße",
    "Brunnenstraße",
    "Schloßstraße",
    "Friedrichstraße",
    "Bismarckstraße",
    "Goethestraße",
    "Schillerstraße",
];

pub const FR_STREETS: &[&str] = &[
    "Rue de la Paix",
    "Avenue des Champs-Élysées",
    "Boulevard Saint-Michel",
    "Place de la République",
    "Rue Victor Hugo",
    "Rue du Commerce",
    "Avenue Jean Jaurès",
    "Rue de la Gare",
    "Place du Marché",
    "Avenue de la Libération",
];

const IN_STREETS: &[&str] = &[
    "Main Road",
    "MG Road",
    "Station Road",
    "Gandhi Nagar",
    "Nehru Colony",
    "Sector 12",
    "Park Street",
];

const AU_STREETS: &[&str] = &[
    "George St",
    "Collins St",
    "Queen St",
    "King William St",
    "Hay St",
    "Elizabeth St",
    "Bourke St",
];

const BR_STREETS: &[&str] = &[
    "Rua das Flores",
    "Avenida Paulista",
    "Rua do Comercio",
    "Avenida Central",
    "Rua da Praia",
];

const JP_STREETS: &[&str] = &["Chuo-dori", "Meiji-dori", "Omotesando", "Yasukuni-dori", "Sotobori-dori"];

const CA_STREETS: &[&str] = &[
    "Yonge St",
    "Queen St W",
    "Rue Sainte-Catherine",
    "Granville St",
    "Jasper Ave",
    "Portage Ave",
];

const US_CITIES: &[&str] = &[
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
    "Dallas",
    "San Jose",
    "Austin",
    "Jacksonville",
    "Fort Worth",
    "Columbus",
    "Charlotte",
    "San Francisco",
    "Indianapolis",
    "Seattle",
    "Denver",
    "Boston",
];

const US_STATES: &[&str] = &["CA", "NY", "TX", "FL", "IL", "PA", "OH", "GA", "NC", "MI"];

pub const ADDRESS_FORMATS: &[AddressFormat] = &[
    AddressFormat {
        country: "US",
        streets: US_STREETS,
        cities: US_CITIES,
        regions: US_STATES,
        house_numbers: (100, 9999),
        postal: PostalRule::Range {
            min: 10000,
            max: 99999,
            width: 5,
        },
        layout: "{number} {street}, {city}, {region} {postal}",
    },
    AddressFormat {
        country: "GB",
        streets: UK_STREETS,
        cities: &["London", "Manchester", "Birmingham", "Edinburgh", "Glasgow"],
        regions: &[],
        house_numbers: (1, 200),
        postal: PostalRule::Pattern("LL# #LL"),
        layout: "{number} {street}\n{city}\n{postal}",
    },
    AddressFormat {
        country: "IN",
        streets: IN_STREETS,
        cities: &[
            "Mumbai",
            "Delhi",
            "Bangalore",
            "Chennai",
            "Kolkata",
            "Hyderabad",
            "Pune",
        ],
        regions: &[],
        house_numbers: (1, 500),
        postal: PostalRule::Range {
            min: 100000,
            max: 699999,
            width: 6,
        },
        layout: "{number}, {street}\n{city} - {postal}",
    },
    AddressFormat {
        country: "DE",
        streets: DE_STREETS,
        cities: &["Berlin", "Hamburg", "Munich", "Cologne", "Frankfurt"],
        regions: &[],
        house_numbers: (1, 200),
        postal: PostalRule::Range {
            min: 10000,
            max: 99999,
            width: 5,
        },
        layout: "{street} {number}\n{postal} {city}",
    },
    AddressFormat {
        country: "FR",
        streets: FR_STREETS,
        cities: &["Paris", "Lyon", "Marseille", "Toulouse", "Bordeaux"],
        regions: &[],
        house_numbers: (1, 200),
        postal: PostalRule::Range {
            min: 10000,
            max: 95999,
            width: 5,
        },
        layout: "{number} {street}\n{postal} {city}",
    },
    AddressFormat {
        country: "CA",
        streets: CA_STREETS,
        cities: &["Toronto", "Montreal", "Vancouver", "Calgary", "Ottawa", "Winnipeg"],
        regions: &["ON", "QC", "BC", "AB", "MB"],
        house_numbers: (1, 9999),
        postal: PostalRule::Pattern("L#L #L#"),
        layout: "{number} {street}, {city}, {region} {postal}",
    },
    AddressFormat {
        country: "AU",
        streets: AU_STREETS,
        cities: &["Sydney", "Melbourne", "Brisbane", "Perth", "Adelaide"],
        regions: &["NSW", "VIC", "QLD", "WA", "SA"],
        house_numbers: (1, 999),
        postal: PostalRule::Range {
            min: 2000,
            max: 7999,
            width: 4,
        },
        layout: "{number} {street}\n{city} {region} {postal}",
    },
    AddressFormat {
        country: "BR",
        streets: BR_STREETS,
        cities: &["Sao Paulo", "Rio de Janeiro", "Belo Horizonte", "Curitiba", "Recife"],
        regions: &["SP", "RJ", "MG", "PR", "PE"],
        house_numbers: (1, 9999),
        postal: PostalRule::Pattern("#####-###"),
        layout: "{street}, {number}\n{city} - {region}\n{postal}",
    },
    AddressFormat {
        country: "JP",
        streets: JP_STREETS,
        cities: &["Tokyo", "Osaka", "Kyoto", "Yokohama", "Sapporo"],
        regions: &[],
        house_numbers: (1, 30),
        postal: PostalRule::Pattern("###-####"),
        layout: "{postal}\n{city}, {street} {number}",
    },
];

/// Format for `code`, or `None` when the caller should use the US fallback.
pub fn address_format(code: &str) -> Option<&'static AddressFormat> {
    let code = normalize_country_code(code);
    ADDRESS_FORMATS.iter().find(|format| format.country == code)
}

/// The US format, used for every unknown country.
pub fn fallback_address_format() -> &'static AddressFormat {
    &ADDRESS_FORMATS[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::countries::country;

    #[test]
    fn every_format_is_complete_and_known() {
        for format in ADDRESS_FORMATS {
            assert!(country(format.country).is_some(), "{}", format.country);
            assert!(!format.streets.is_empty(), "{}", format.country);
            assert!(!format.cities.is_empty(), "{}", format.country);
            assert!(format.house_numbers.0 <= format.house_numbers.1);
            if format.layout.contains("{region}") {
                assert!(!format.regions.is_empty(), "{}", format.country);
            }
        }
    }

    #[test]
    fn unknown_country_has_no_format() {
        assert!(address_format("ZZ").is_none());
        assert_eq!(fallback_address_format().country, "US");
    }
}
