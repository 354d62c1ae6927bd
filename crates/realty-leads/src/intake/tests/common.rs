use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::intake::domain::{LeadSubmission, ValuationSubmission};
use crate::intake::sink::{MemorySink, RecordSink, SinkError};
use crate::intake::{intake_router, IntakeService};

pub(super) fn contact_lead() -> LeadSubmission {
    LeadSubmission {
        source: Some("contact".to_string()),
        name: Some("Jane Doe".to_string()),
        email: Some("jane@example.com".to_string()),
        message: Some("Hi".to_string()),
        ..LeadSubmission::default()
    }
}

pub(super) fn viewing_lead() -> LeadSubmission {
    LeadSubmission {
        source: Some("property-viewing".to_string()),
        name: Some("Priya Shah".to_string()),
        email: Some("priya.shah@example.ca".to_string()),
        phone: Some("416-555-0199".to_string()),
        message: Some("Is parking included?".to_string()),
        property_id: Some("1".to_string()),
        preferred_time: Some("Saturday morning".to_string()),
    }
}

pub(super) fn valuation_request() -> ValuationSubmission {
    ValuationSubmission {
        name: Some("Marc Tremblay".to_string()),
        email: Some("marc@example.ca".to_string()),
        phone: None,
        property_address: Some("12 Elm Street".to_string()),
        city: Some("Ottawa".to_string()),
        province: Some("Ontario".to_string()),
        property_type: Some("townhouse".to_string()),
        timeframe_to_sell: Some("3-6 months".to_string()),
    }
}

pub(super) fn build_service() -> (
    IntakeService<MemorySink>,
    Arc<MemorySink>,
    Arc<MemorySink>,
) {
    let leads = Arc::new(MemorySink::default());
    let valuations = Arc::new(MemorySink::default());
    let service = IntakeService::new(leads.clone(), valuations.clone());
    (service, leads, valuations)
}

pub(super) fn router_with_service(service: IntakeService<MemorySink>) -> axum::Router {
    intake_router(Arc::new(service))
}

pub(super) struct UnavailableSink;

impl RecordSink for UnavailableSink {
    fn append(&self, _line: &str) -> Result<(), SinkError> {
        Err(SinkError::Write(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk full",
        )))
    }
}

pub(super) fn parse_line(line: &str) -> Value {
    serde_json::from_str(line).expect("log line is json")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body")
        .to_vec()
}
