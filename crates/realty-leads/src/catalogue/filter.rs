use super::listing::{PropertyListing, PropertyType};

/// Combination filter used by the listings page. Every `None` field matches
/// all listings; price bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub city: Option<String>,
    pub property_type: Option<PropertyType>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
}

impl ListingFilter {
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn property_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = Some(property_type);
        self
    }

    pub fn min_price(mut self, min_price: u64) -> Self {
        self.min_price = Some(min_price);
        self
    }

    pub fn max_price(mut self, max_price: u64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn matches(&self, listing: &PropertyListing) -> bool {
        if let Some(city) = &self.city {
            if listing.city != *city {
                return false;
            }
        }
        if let Some(property_type) = self.property_type {
            if listing.property_type != property_type {
                return false;
            }
        }
        if let Some(min_price) = self.min_price {
            if listing.price_cad < min_price {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if listing.price_cad > max_price {
                return false;
            }
        }
        true
    }
}
