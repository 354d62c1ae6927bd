use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::{CatalogueError, ListingFilter, PropertyCatalogue, PropertyType};

/// Query string accepted by the listings endpoint. `all` (or an empty value)
/// disables the city and type constraints, matching the page's selectors. An
/// empty price bound is likewise unconstrained.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingQuery {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default, rename = "type")]
    pub property_type: Option<String>,
    #[serde(default)]
    pub min_price: Option<String>,
    #[serde(default)]
    pub max_price: Option<String>,
}

fn constrained(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case("all"))
}

fn price_bound(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<u64>, CatalogueError> {
    let Some(raw) = value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
    else {
        return Ok(None);
    };
    raw.parse::<u64>()
        .map(Some)
        .map_err(|_| CatalogueError::InvalidPrice { field, value: raw })
}

impl TryFrom<ListingQuery> for ListingFilter {
    type Error = CatalogueError;

    fn try_from(query: ListingQuery) -> Result<Self, Self::Error> {
        let property_type = constrained(query.property_type)
            .map(|raw| raw.parse::<PropertyType>())
            .transpose()?;

        Ok(ListingFilter {
            city: constrained(query.city),
            property_type,
            min_price: price_bound("minPrice", query.min_price)?,
            max_price: price_bound("maxPrice", query.max_price)?,
        })
    }
}

/// Router builder exposing read-only catalogue endpoints.
pub fn catalogue_router(catalogue: Arc<PropertyCatalogue>) -> Router {
    Router::new()
        .route("/api/properties", get(list_handler))
        .route("/api/properties/featured", get(featured_handler))
        .route("/api/properties/cities", get(cities_handler))
        .route("/api/properties/:property_id", get(detail_handler))
        .with_state(catalogue)
}

pub(crate) async fn list_handler(
    State(catalogue): State<Arc<PropertyCatalogue>>,
    Query(query): Query<ListingQuery>,
) -> Response {
    match ListingFilter::try_from(query) {
        Ok(filter) => Json(catalogue.filter(&filter)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn featured_handler(State(catalogue): State<Arc<PropertyCatalogue>>) -> Response {
    Json(catalogue.featured()).into_response()
}

pub(crate) async fn cities_handler(State(catalogue): State<Arc<PropertyCatalogue>>) -> Response {
    Json(catalogue.cities()).into_response()
}

pub(crate) async fn detail_handler(
    State(catalogue): State<Arc<PropertyCatalogue>>,
    Path(property_id): Path<String>,
) -> Response {
    match catalogue.get(&property_id) {
        Ok(listing) => Json(listing).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: CatalogueError) -> Response {
    let status = match err {
        CatalogueError::NotFound(_) => StatusCode::NOT_FOUND,
        CatalogueError::UnknownPropertyType(_) | CatalogueError::InvalidPrice { .. } => {
            StatusCode::BAD_REQUEST
        }
    };
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
