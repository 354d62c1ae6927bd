use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalogue entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub String);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    Condo,
    Detached,
    SemiDetached,
    Townhouse,
}

impl PropertyType {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Condo,
            Self::Detached,
            Self::SemiDetached,
            Self::Townhouse,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Condo => "condo",
            Self::Detached => "detached",
            Self::SemiDetached => "semi-detached",
            Self::Townhouse => "townhouse",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown property type '{0}' (expected condo, detached, semi-detached, or townhouse)")]
pub struct UnknownPropertyType(pub String);

impl FromStr for PropertyType {
    type Err = UnknownPropertyType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|kind| kind.label() == normalized)
            .ok_or_else(|| UnknownPropertyType(value.to_string()))
    }
}

/// A property shown on the listing and detail pages. Prices are whole
/// Canadian dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListing {
    pub id: ListingId,
    pub title: String,
    pub price_cad: u64,
    pub city: String,
    pub province: String,
    pub neighbourhood: String,
    pub beds: u8,
    pub baths: f32,
    pub area_sqft: u32,
    pub mls_id: String,
    pub property_taxes_annual_cad: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condo_fees_monthly_cad: Option<u32>,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub images: Vec<String>,
    pub description: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
}
