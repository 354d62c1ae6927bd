use super::common::*;
use crate::intake::domain::LeadSubmission;
use crate::intake::validation::ValidationError;
use crate::intake::{IntakeError, IntakeService, MemorySink};
use std::collections::HashSet;
use std::sync::Arc;

#[test]
fn submit_lead_appends_one_record_with_defaults() {
    let (service, leads, valuations) = build_service();

    let receipt = service.submit_lead(contact_lead()).expect("lead accepted");

    assert!(receipt.success);
    assert_eq!(receipt.message, "Lead received successfully");
    assert!(receipt.lead_id.0.starts_with("LEAD-"));

    let lines = leads.lines();
    assert_eq!(lines.len(), 1);
    assert!(valuations.is_empty());

    let record = parse_line(&lines[0]);
    assert_eq!(record["leadId"], receipt.lead_id.0.as_str());
    assert_eq!(record["source"], "contact");
    assert_eq!(record["name"], "Jane Doe");
    assert_eq!(record["email"], "jane@example.com");
    assert_eq!(record["message"], "Hi");
    assert_eq!(record["phone"], "Not provided");
    assert_eq!(record["propertyId"], "N/A");
    assert_eq!(record["preferredTime"], "N/A");
    assert!(!record["timestamp"].as_str().unwrap_or_default().is_empty());
}

#[test]
fn submit_lead_keeps_every_supplied_field() {
    let (service, leads, _) = build_service();

    service.submit_lead(viewing_lead()).expect("lead accepted");

    let record = parse_line(&leads.lines()[0]);
    assert_eq!(record["source"], "property-viewing");
    assert_eq!(record["phone"], "416-555-0199");
    assert_eq!(record["propertyId"], "1");
    assert_eq!(record["preferredTime"], "Saturday morning");
    assert_eq!(record["message"], "Is parking included?");
}

#[test]
fn rejected_lead_writes_nothing() {
    let (service, leads, _) = build_service();

    let mut missing_email = contact_lead();
    missing_email.email = None;
    let mut bad_email = contact_lead();
    bad_email.email = Some("jane-at-example.com".to_string());

    for submission in [LeadSubmission::default(), missing_email, bad_email] {
        match service.submit_lead(submission) {
            Err(IntakeError::Validation(_)) => {}
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    assert!(leads.is_empty());
}

#[test]
fn submit_valuation_appends_record_and_promises_response_time() {
    let (service, leads, valuations) = build_service();

    let receipt = service
        .submit_valuation(valuation_request())
        .expect("valuation accepted");

    assert!(receipt.success);
    assert_eq!(receipt.estimated_response_time, "24 hours");
    assert!(receipt.request_id.0.starts_with("VAL-"));
    assert!(leads.is_empty());

    let lines = valuations.lines();
    assert_eq!(lines.len(), 1);
    let record = parse_line(&lines[0]);
    assert_eq!(record["requestId"], receipt.request_id.0.as_str());
    assert_eq!(record["propertyAddress"], "12 Elm Street");
    assert_eq!(record["city"], "Ottawa");
    assert_eq!(record["province"], "Ontario");
    assert_eq!(record["propertyType"], "townhouse");
    assert_eq!(record["timeframeToSell"], "3-6 months");
    assert_eq!(record["phone"], "Not provided");
    assert!(!record["timestamp"].as_str().unwrap_or_default().is_empty());
}

#[test]
fn rejected_valuation_names_the_field_and_writes_nothing() {
    let (service, _, valuations) = build_service();
    let mut submission = valuation_request();
    submission.city = Some(String::new());

    match service.submit_valuation(submission) {
        Err(IntakeError::Validation(ValidationError::MissingField(field))) => {
            assert_eq!(field, "city")
        }
        other => panic!("expected missing field, got {other:?}"),
    }
    assert!(valuations.is_empty());
}

#[test]
fn identifiers_are_unique_within_a_run() {
    let (service, _, _) = build_service();

    let ids: HashSet<String> = (0..200)
        .map(|_| {
            service
                .submit_lead(contact_lead())
                .expect("lead accepted")
                .lead_id
                .0
        })
        .collect();

    assert_eq!(ids.len(), 200);
}

#[test]
fn sink_failures_surface_as_internal_errors() {
    let service = IntakeService::new(Arc::new(UnavailableSink), Arc::new(UnavailableSink));

    match service.submit_lead(contact_lead()) {
        Err(IntakeError::Sink(_)) => {}
        other => panic!("expected sink error, got {other:?}"),
    }
    match service.submit_valuation(valuation_request()) {
        Err(IntakeError::Sink(_)) => {}
        other => panic!("expected sink error, got {other:?}"),
    }
}

#[test]
fn concurrent_submissions_each_append_one_line() {
    let leads = Arc::new(MemorySink::default());
    let service = Arc::new(IntakeService::new(
        leads.clone(),
        Arc::new(MemorySink::default()),
    ));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let service = service.clone();
            std::thread::spawn(move || {
                for _ in 0..25 {
                    service.submit_lead(viewing_lead()).expect("lead accepted");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker thread");
    }

    let ids: HashSet<String> = leads
        .lines()
        .iter()
        .map(|line| parse_line(line)["leadId"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(ids.len(), 100);
}
