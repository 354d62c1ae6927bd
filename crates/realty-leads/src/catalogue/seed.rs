use super::listing::{ListingId, PropertyListing, PropertyType};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// The agency's current listings, in display order.
pub fn seed_listings() -> Vec<PropertyListing> {
    vec![
        PropertyListing {
            id: ListingId("1".to_string()),
            title: "Modern Downtown Condo with Skyline Views".to_string(),
            price_cad: 850_000,
            city: "Toronto".to_string(),
            province: "Ontario".to_string(),
            neighbourhood: "Downtown Core".to_string(),
            beds: 2,
            baths: 2.0,
            area_sqft: 1_100,
            mls_id: "C5847392".to_string(),
            property_taxes_annual_cad: 4_200,
            condo_fees_monthly_cad: Some(650),
            property_type: PropertyType::Condo,
            images: strings(&[
                "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?w=800&h=600&fit=crop",
                "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?w=800&h=600&fit=crop",
                "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=800&h=600&fit=crop",
            ]),
            description: "Stunning 2-bedroom, 2-bathroom condo in the heart of Toronto's downtown core. Floor-to-ceiling windows offer breathtaking skyline views. Open-concept living with high-end finishes throughout. Walking distance to transit, restaurants, and entertainment.".to_string(),
            features: strings(&[
                "Floor-to-ceiling windows",
                "Stainless steel appliances",
                "In-suite laundry",
                "Concierge service",
                "Gym and party room",
                "1 parking spot included",
                "Locker storage",
            ]),
            is_featured: true,
        },
        PropertyListing {
            id: ListingId("2".to_string()),
            title: "Spacious Family Home in Established Neighbourhood".to_string(),
            price_cad: 1_450_000,
            city: "Vancouver".to_string(),
            province: "British Columbia".to_string(),
            neighbourhood: "Kitsilano".to_string(),
            beds: 4,
            baths: 3.0,
            area_sqft: 2_400,
            mls_id: "R2834756".to_string(),
            property_taxes_annual_cad: 7_800,
            condo_fees_monthly_cad: None,
            property_type: PropertyType::Detached,
            images: strings(&[
                "https://images.unsplash.com/photo-1568605114967-8130f3a36994?w=800&h=600&fit=crop",
                "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=800&h=600&fit=crop",
                "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?w=800&h=600&fit=crop",
            ]),
            description: "Beautiful 4-bedroom detached home in sought-after Kitsilano. Fully renovated with modern kitchen, hardwood floors, and updated bathrooms. Large backyard perfect for families. Close to beaches, parks, and top-rated schools.".to_string(),
            features: strings(&[
                "Recently renovated kitchen",
                "Hardwood floors throughout",
                "Large backyard with deck",
                "Updated bathrooms",
                "Double car garage",
                "Near beaches and parks",
                "Top-rated school catchment",
            ]),
            is_featured: true,
        },
        PropertyListing {
            id: ListingId("3".to_string()),
            title: "Charming Semi-Detached Home Near Transit".to_string(),
            price_cad: 725_000,
            city: "Calgary".to_string(),
            province: "Alberta".to_string(),
            neighbourhood: "Marda Loop".to_string(),
            beds: 3,
            baths: 2.5,
            area_sqft: 1_650,
            mls_id: "A2029485".to_string(),
            property_taxes_annual_cad: 3_900,
            condo_fees_monthly_cad: None,
            property_type: PropertyType::SemiDetached,
            images: strings(&[
                "https://images.unsplash.com/photo-1572120360610-d971b9d7767c?w=800&h=600&fit=crop",
                "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=800&h=600&fit=crop",
                "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?w=800&h=600&fit=crop",
            ]),
            description: "Well-maintained 3-bedroom semi-detached home in vibrant Marda Loop. Open-concept main floor with modern finishes. Finished basement adds extra living space. Steps to shops, restaurants, and public transit.".to_string(),
            features: strings(&[
                "Open-concept main floor",
                "Modern kitchen with island",
                "Finished basement",
                "Attached single garage",
                "Fenced backyard",
                "Close to transit and amenities",
                "Low-maintenance exterior",
            ]),
            is_featured: true,
        },
        PropertyListing {
            id: ListingId("4".to_string()),
            title: "Contemporary Townhouse in Family-Friendly Community".to_string(),
            price_cad: 620_000,
            city: "Ottawa".to_string(),
            province: "Ontario".to_string(),
            neighbourhood: "Barrhaven".to_string(),
            beds: 3,
            baths: 2.5,
            area_sqft: 1_550,
            mls_id: "O5923847".to_string(),
            property_taxes_annual_cad: 4_500,
            condo_fees_monthly_cad: Some(275),
            property_type: PropertyType::Townhouse,
            images: strings(&[
                "https://images.unsplash.com/photo-1600607687644-c7171b42498b?w=800&h=600&fit=crop",
                "https://images.unsplash.com/photo-1600573472556-e636b3a5f3e1?w=800&h=600&fit=crop",
                "https://images.unsplash.com/photo-1600573472555-7b8e7f69e89c?w=800&h=600&fit=crop",
            ]),
            description: "Move-in ready 3-bedroom townhouse in family-friendly Barrhaven. Modern kitchen, spacious bedrooms, and finished basement. Part of well-maintained complex with great amenities. Perfect for first-time buyers or growing families.".to_string(),
            features: strings(&[
                "Modern kitchen with stainless appliances",
                "Primary bedroom with ensuite",
                "Finished basement rec room",
                "Private patio",
                "Single car garage",
                "Near schools and parks",
                "Community playground",
            ]),
            is_featured: false,
        },
        PropertyListing {
            id: ListingId("5".to_string()),
            title: "Luxury Waterfront Condo with Stunning Views".to_string(),
            price_cad: 1_250_000,
            city: "Vancouver".to_string(),
            province: "British Columbia".to_string(),
            neighbourhood: "Coal Harbour".to_string(),
            beds: 2,
            baths: 2.0,
            area_sqft: 1_300,
            mls_id: "R2845623".to_string(),
            property_taxes_annual_cad: 5_200,
            condo_fees_monthly_cad: Some(890),
            property_type: PropertyType::Condo,
            images: strings(&[
                "https://images.unsplash.com/photo-1613490493576-7fde63acd811?w=800&h=600&fit=crop",
                "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?w=800&h=600&fit=crop",
                "https://images.unsplash.com/photo-1600047509807-ba8f99d2cdde?w=800&h=600&fit=crop",
            ]),
            description: "Exceptional waterfront living in prestigious Coal Harbour. This luxury 2-bedroom condo offers panoramic water and mountain views. Premium finishes, spa-like bathrooms, and a chef's kitchen. World-class amenities including concierge, fitness centre, and pool.".to_string(),
            features: strings(&[
                "Panoramic water views",
                "High-end appliances",
                "Marble countertops",
                "Spa-like bathrooms",
                "24-hour concierge",
                "Indoor pool and hot tub",
                "State-of-the-art fitness centre",
                "2 parking stalls + storage",
            ]),
            is_featured: true,
        },
        PropertyListing {
            id: ListingId("6".to_string()),
            title: "Renovated Bungalow with Character".to_string(),
            price_cad: 895_000,
            city: "Toronto".to_string(),
            province: "Ontario".to_string(),
            neighbourhood: "East York".to_string(),
            beds: 3,
            baths: 2.0,
            area_sqft: 1_800,
            mls_id: "C5892034".to_string(),
            property_taxes_annual_cad: 5_100,
            condo_fees_monthly_cad: None,
            property_type: PropertyType::Detached,
            images: strings(&[
                "https://images.unsplash.com/photo-1600585154526-990dced4db0d?w=800&h=600&fit=crop",
                "https://images.unsplash.com/photo-1600566752355-35792bedcfea?w=800&h=600&fit=crop",
                "https://images.unsplash.com/photo-1600563438938-a9a27216b4f5?w=800&h=600&fit=crop",
            ]),
            description: "Charming renovated bungalow in desirable East York. Beautifully updated while maintaining original character. Hardwood floors, modern kitchen, and updated bathrooms. Large lot with mature trees and private backyard. Great location close to transit and parks.".to_string(),
            features: strings(&[
                "Original hardwood floors",
                "Updated kitchen and bathrooms",
                "Finished basement",
                "Large lot with mature trees",
                "Private backyard",
                "Single car garage",
                "Close to TTC and amenities",
            ]),
            is_featured: false,
        },
    ]
}
