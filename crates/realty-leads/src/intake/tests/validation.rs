use super::common::*;
use crate::intake::domain::{LeadSource, LeadSubmission, ValuationSubmission};
use crate::intake::validation::{
    is_valid_email, validate_lead, validate_valuation, ValidationError,
};

#[test]
fn accepts_basic_email_shapes() {
    assert!(is_valid_email("jane@example.com"));
    assert!(is_valid_email("first.last+tag@sub.example.co.uk"));
}

#[test]
fn rejects_emails_without_at_or_dot_after_it() {
    for candidate in [
        "jane.example.com",
        "jane@example",
        "jane@@example.com",
        "jane doe@example.com",
        "@example.com",
        "jane@.com",
        "jane@example.",
    ] {
        assert!(!is_valid_email(candidate), "{candidate} should be rejected");
    }
}

#[test]
fn lead_reports_every_missing_field() {
    let error = validate_lead(&LeadSubmission::default()).expect_err("empty lead rejected");
    assert_eq!(
        error,
        ValidationError::MissingFields(vec!["source", "name", "email"])
    );
    assert_eq!(
        error.to_string(),
        "Missing required fields: source, name, email"
    );
}

#[test]
fn lead_treats_blank_values_as_missing() {
    let mut submission = contact_lead();
    submission.name = Some("   ".to_string());

    let error = validate_lead(&submission).expect_err("blank name rejected");
    assert_eq!(error, ValidationError::MissingFields(vec!["name"]));
}

#[test]
fn lead_checks_presence_before_email_shape() {
    let mut submission = contact_lead();
    submission.source = None;
    submission.email = Some("not-an-email".to_string());

    let error = validate_lead(&submission).expect_err("rejected");
    assert_eq!(error, ValidationError::MissingFields(vec!["source"]));
}

#[test]
fn lead_rejects_malformed_email() {
    let mut submission = contact_lead();
    submission.email = Some("jane@example".to_string());

    assert_eq!(
        validate_lead(&submission),
        Err(ValidationError::InvalidEmail)
    );
}

#[test]
fn lead_rejects_unknown_source() {
    let mut submission = contact_lead();
    submission.source = Some("open-house".to_string());

    let error = validate_lead(&submission).expect_err("rejected");
    assert_eq!(error.to_string(), "Invalid lead source: open-house");
}

#[test]
fn lead_normalises_optional_fields() {
    let mut submission = viewing_lead();
    submission.phone = Some(String::new());
    submission.name = Some("  Priya Shah ".to_string());

    let lead = validate_lead(&submission).expect("valid lead");
    assert_eq!(lead.source, LeadSource::PropertyViewing);
    assert_eq!(lead.name, "Priya Shah");
    assert!(lead.phone.is_none());
    assert_eq!(lead.property_id.as_deref(), Some("1"));
}

#[test]
fn valuation_reports_first_missing_field_in_order() {
    let mut submission = valuation_request();
    submission.province = None;
    submission.timeframe_to_sell = Some(String::new());

    let error = validate_valuation(&submission).expect_err("rejected");
    assert_eq!(error, ValidationError::MissingField("province"));
    assert_eq!(error.to_string(), "Missing required field: province");
}

#[test]
fn valuation_requires_every_field() {
    let fields: [(&str, fn(&mut ValuationSubmission)); 7] = [
        ("name", |s| s.name = None),
        ("email", |s| s.email = None),
        ("propertyAddress", |s| s.property_address = None),
        ("city", |s| s.city = None),
        ("province", |s| s.province = None),
        ("propertyType", |s| s.property_type = None),
        ("timeframeToSell", |s| s.timeframe_to_sell = None),
    ];

    for (field, clear) in fields {
        let mut submission = valuation_request();
        clear(&mut submission);
        assert_eq!(
            validate_valuation(&submission),
            Err(ValidationError::MissingField(field))
        );
    }
}

#[test]
fn valuation_rejects_malformed_email() {
    let mut submission = valuation_request();
    submission.email = Some("marc.example.ca".to_string());

    assert_eq!(
        validate_valuation(&submission),
        Err(ValidationError::InvalidEmail)
    );
}
