use clap::Args;
use realty_leads::catalogue::{
    CatalogueError, ListingFilter, PropertyCatalogue, PropertyListing, PropertyType,
};
use realty_leads::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct ListArgs {
    /// Only include listings in this city (exact match)
    #[arg(long)]
    pub(crate) city: Option<String>,
    /// Only include this property type (condo, detached, semi-detached, townhouse)
    #[arg(long = "type", value_parser = parse_property_type)]
    pub(crate) property_type: Option<PropertyType>,
    /// Inclusive lower price bound in CAD
    #[arg(long)]
    pub(crate) min_price: Option<u64>,
    /// Inclusive upper price bound in CAD
    #[arg(long)]
    pub(crate) max_price: Option<u64>,
    /// Only include featured listings
    #[arg(long)]
    pub(crate) featured: bool,
    /// Print full listings as JSON instead of a summary table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ShowArgs {
    /// Listing identifier
    pub(crate) id: String,
}

fn parse_property_type(raw: &str) -> Result<PropertyType, String> {
    raw.parse::<PropertyType>().map_err(|err| err.to_string())
}

impl ListArgs {
    fn filter(&self) -> ListingFilter {
        ListingFilter {
            city: self.city.clone(),
            property_type: self.property_type,
            min_price: self.min_price,
            max_price: self.max_price,
        }
    }
}

pub(crate) fn select_listings<'a>(
    catalogue: &'a PropertyCatalogue,
    args: &ListArgs,
) -> Vec<&'a PropertyListing> {
    let filter = args.filter();
    catalogue
        .filter(&filter)
        .into_iter()
        .filter(|listing| !args.featured || listing.is_featured)
        .collect()
}

pub(crate) fn run_properties_list(args: ListArgs) -> Result<(), AppError> {
    let catalogue = PropertyCatalogue::seeded();
    let listings = select_listings(&catalogue, &args);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&listings)?);
        return Ok(());
    }

    println!(
        "Showing {} of {} properties",
        listings.len(),
        catalogue.len()
    );
    for listing in listings {
        println!("  {}", summary_line(listing));
    }
    Ok(())
}

pub(crate) fn run_properties_show(args: ShowArgs) -> Result<(), AppError> {
    let catalogue = PropertyCatalogue::seeded();
    let listing = catalogue
        .find(&args.id)
        .ok_or_else(|| CatalogueError::NotFound(args.id.clone()))?;
    println!("{}", serde_json::to_string_pretty(listing)?);
    Ok(())
}

pub(crate) fn summary_line(listing: &PropertyListing) -> String {
    format!(
        "[{}] {} | {} | {}, {} | {} bd / {} ba | {} sqft | MLS {}",
        listing.id,
        listing.title,
        format_price(listing.price_cad),
        listing.neighbourhood,
        listing.city,
        listing.beds,
        listing.baths,
        listing.area_sqft,
        listing.mls_id,
    )
}

/// `$1,450,000` style formatting without cents.
pub(crate) fn format_price(price_cad: u64) -> String {
    let digits = price_cad.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${grouped}")
}
