use std::sync::OnceLock;

use regex::Regex;

use super::domain::{LeadSource, LeadSubmission, ValuationSubmission};

/// Client-caused rejections. The message is returned to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Invalid lead source: {0}")]
    UnknownSource(String),
}

/// Lead fields in the order they are reported when missing.
pub const LEAD_REQUIRED_FIELDS: [&str; 3] = ["source", "name", "email"];

/// Lead submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidLead {
    pub source: LeadSource,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub property_id: Option<String>,
    pub preferred_time: Option<String>,
}

/// Valuation submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidValuation {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub property_address: String,
    pub city: String,
    pub province: String,
    pub property_type: String,
    pub timeframe_to_sell: String,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
    })
}

/// Basic `local@domain.tld` shape check. Not an RFC 5322 validator.
pub fn is_valid_email(candidate: &str) -> bool {
    email_pattern().is_match(candidate)
}

/// Trimmed value, or `None` when absent or blank.
fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn optional(value: &Option<String>) -> Option<String> {
    present(value).map(str::to_string)
}

pub fn validate_lead(submission: &LeadSubmission) -> Result<ValidLead, ValidationError> {
    let fields = [
        present(&submission.source),
        present(&submission.name),
        present(&submission.email),
    ];

    let missing: Vec<&'static str> = LEAD_REQUIRED_FIELDS
        .into_iter()
        .zip(fields)
        .filter_map(|(field, value)| value.is_none().then_some(field))
        .collect();

    let [Some(source), Some(name), Some(email)] = fields else {
        return Err(ValidationError::MissingFields(missing));
    };

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    let source = source
        .parse::<LeadSource>()
        .map_err(|err| ValidationError::UnknownSource(err.0))?;

    Ok(ValidLead {
        source,
        name: name.to_string(),
        email: email.to_string(),
        phone: optional(&submission.phone),
        message: optional(&submission.message),
        property_id: optional(&submission.property_id),
        preferred_time: optional(&submission.preferred_time),
    })
}

fn required<'a>(
    field: &'static str,
    value: &'a Option<String>,
) -> Result<&'a str, ValidationError> {
    present(value).ok_or(ValidationError::MissingField(field))
}

pub fn validate_valuation(
    submission: &ValuationSubmission,
) -> Result<ValidValuation, ValidationError> {
    let name = required("name", &submission.name)?;
    let email = required("email", &submission.email)?;
    let property_address = required("propertyAddress", &submission.property_address)?;
    let city = required("city", &submission.city)?;
    let province = required("province", &submission.province)?;
    let property_type = required("propertyType", &submission.property_type)?;
    let timeframe_to_sell = required("timeframeToSell", &submission.timeframe_to_sell)?;

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(ValidValuation {
        name: name.to_string(),
        email: email.to_string(),
        phone: optional(&submission.phone),
        property_address: property_address.to_string(),
        city: city.to_string(),
        province: province.to_string(),
        property_type: property_type.to_string(),
        timeframe_to_sell: timeframe_to_sell.to_string(),
    })
}
