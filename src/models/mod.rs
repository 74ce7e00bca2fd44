use serde_json::Value;
use std::fmt;

/// Placeholder written for any attribute missing from the source page
pub const UNAVAILABLE: &str = "N/A";

/// Column order of the output file
pub const CSV_HEADER: [&str; 9] = [
    "Neighborhood",
    "Type",
    "Price",
    "Beds",
    "Baths",
    "Built Year",
    "Longitude",
    "Latitude",
    "Link",
];

/// A single scalar attribute of a property
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Available(String),
    Unavailable,
}

impl Field {
    /// Strings and numbers are kept as rendered text. Anything else is
    /// unavailable.
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(s)) => Field::Available(s.clone()),
            Some(Value::Number(n)) => Field::Available(n.to_string()),
            _ => Field::Unavailable,
        }
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::Available(value.to_string())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Available(s) => f.write_str(s),
            Field::Unavailable => f.write_str(UNAVAILABLE),
        }
    }
}

/// Attributes of one property, parsed from its detail page
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRecord {
    pub neighborhood: Field,
    pub home_type: Field,
    pub price: Field,
    pub bedrooms: Field,
    pub bathrooms: Field,
    pub built_year: Field,
    pub longitude: Field,
    pub latitude: Field,
    pub link: String,
}

impl PropertyRecord {
    /// Row in [`CSV_HEADER`] order
    pub fn to_csv_record(&self) -> [String; 9] {
        [
            self.neighborhood.to_string(),
            self.home_type.to_string(),
            self.price.to_string(),
            self.bedrooms.to_string(),
            self.bathrooms.to_string(),
            self.built_year.to_string(),
            self.longitude.to_string(),
            self.latitude.to_string(),
            self.link.clone(),
        ]
    }
}
