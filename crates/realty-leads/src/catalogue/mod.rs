//! Static property catalogue backing the listing, filter, and detail pages.

mod filter;
mod listing;
pub mod router;
mod seed;

pub use filter::ListingFilter;
pub use listing::{ListingId, PropertyListing, PropertyType, UnknownPropertyType};
pub use router::catalogue_router;
pub use seed::seed_listings;

/// Errors raised when reading the catalogue.
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    #[error("property {0} not found")]
    NotFound(String),
    #[error(transparent)]
    UnknownPropertyType(#[from] UnknownPropertyType),
    #[error("invalid {field} '{value}'")]
    InvalidPrice { field: &'static str, value: String },
}

/// Read-only, in-memory listing store loaded once per process.
#[derive(Debug, Clone)]
pub struct PropertyCatalogue {
    listings: Vec<PropertyListing>,
}

impl PropertyCatalogue {
    pub fn new(listings: Vec<PropertyListing>) -> Self {
        Self { listings }
    }

    /// Catalogue populated with the agency's seed listings.
    pub fn seeded() -> Self {
        Self::new(seed_listings())
    }

    pub fn all(&self) -> &[PropertyListing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&PropertyListing> {
        self.listings.iter().find(|listing| listing.id.0 == id)
    }

    pub fn get(&self, id: &str) -> Result<&PropertyListing, CatalogueError> {
        self.find(id)
            .ok_or_else(|| CatalogueError::NotFound(id.to_string()))
    }

    pub fn featured(&self) -> Vec<&PropertyListing> {
        self.listings
            .iter()
            .filter(|listing| listing.is_featured)
            .collect()
    }

    pub fn filter(&self, filter: &ListingFilter) -> Vec<&PropertyListing> {
        self.listings
            .iter()
            .filter(|listing| filter.matches(listing))
            .collect()
    }

    /// Distinct cities in catalogue order, for populating the city selector.
    pub fn cities(&self) -> Vec<&str> {
        let mut cities: Vec<&str> = Vec::new();
        for listing in &self.listings {
            if !cities.contains(&listing.city.as_str()) {
                cities.push(&listing.city);
            }
        }
        cities
    }
}

impl Default for PropertyCatalogue {
    fn default() -> Self {
        Self::seeded()
    }
}
