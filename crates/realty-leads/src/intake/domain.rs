use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Placeholder recorded when the submitter left the phone number blank.
pub const PHONE_NOT_PROVIDED: &str = "Not provided";
/// Placeholder recorded for any other optional lead field left blank.
pub const NOT_APPLICABLE: &str = "N/A";
/// Response time promised to homeowners requesting a valuation.
pub const VALUATION_RESPONSE_TIME: &str = "24 hours";

/// Form a lead originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadSource {
    Contact,
    PropertyViewing,
    PropertyQuestion,
    Valuation,
}

impl LeadSource {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Contact,
            Self::PropertyViewing,
            Self::PropertyQuestion,
            Self::Valuation,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::PropertyViewing => "property-viewing",
            Self::PropertyQuestion => "property-question",
            Self::Valuation => "valuation",
        }
    }
}

impl fmt::Display for LeadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown lead source '{0}'")]
pub struct UnknownLeadSource(pub String);

impl FromStr for LeadSource {
    type Err = UnknownLeadSource;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|source| source.label() == value.trim())
            .ok_or_else(|| UnknownLeadSource(value.to_string()))
    }
}

/// Form fields arrive as whatever JSON value the page sent. Anything that is
/// not a string is kept as its JSON text; `null` counts as absent.
fn form_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}

/// Raw lead form body. Every field is optional so that validation, not
/// deserialization, decides which ones are missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    #[serde(default, deserialize_with = "form_text")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "form_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "form_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "form_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "form_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "form_text")]
    pub property_id: Option<String>,
    #[serde(default, deserialize_with = "form_text")]
    pub preferred_time: Option<String>,
}

/// Raw valuation form body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationSubmission {
    #[serde(default, deserialize_with = "form_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "form_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "form_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "form_text")]
    pub property_address: Option<String>,
    #[serde(default, deserialize_with = "form_text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "form_text")]
    pub province: Option<String>,
    #[serde(default, deserialize_with = "form_text")]
    pub property_type: Option<String>,
    #[serde(default, deserialize_with = "form_text")]
    pub timeframe_to_sell: Option<String>,
}

/// Identifier handed back to the submitter of a contact or property form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(pub String);

/// Identifier handed back to the submitter of a valuation form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValuationRequestId(pub String);

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ValuationRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Line appended to the lead log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub lead_id: LeadId,
    pub timestamp: DateTime<Utc>,
    pub source: LeadSource,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property_id: String,
    pub message: String,
    pub preferred_time: String,
}

/// Line appended to the valuation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRecord {
    pub request_id: ValuationRequestId,
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property_address: String,
    pub city: String,
    pub province: String,
    pub property_type: String,
    pub timeframe_to_sell: String,
}

/// Success envelope returned by the lead endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadReceipt {
    pub success: bool,
    pub message: String,
    pub lead_id: LeadId,
}

impl LeadReceipt {
    pub fn accepted(lead_id: LeadId) -> Self {
        Self {
            success: true,
            message: "Lead received successfully".to_string(),
            lead_id,
        }
    }
}

/// Success envelope returned by the valuation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationReceipt {
    pub success: bool,
    pub message: String,
    pub request_id: ValuationRequestId,
    pub estimated_response_time: String,
}

impl ValuationReceipt {
    pub fn accepted(request_id: ValuationRequestId) -> Self {
        Self {
            success: true,
            message: "Valuation request received successfully".to_string(),
            request_id,
            estimated_response_time: VALUATION_RESPONSE_TIME.to_string(),
        }
    }
}
