use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{
    LeadId, LeadReceipt, LeadRecord, LeadSubmission, ValuationReceipt, ValuationRecord,
    ValuationRequestId, ValuationSubmission, NOT_APPLICABLE, PHONE_NOT_PROVIDED,
};
use super::ids::IdGenerator;
use super::sink::{RecordSink, SinkError};
use super::validation::{validate_lead, validate_valuation, ValidationError};

/// Validate → persist → respond pipeline shared by every intake transport.
pub struct IntakeService<S> {
    leads: Arc<S>,
    valuations: Arc<S>,
    lead_ids: IdGenerator,
    valuation_ids: IdGenerator,
}

impl<S> IntakeService<S>
where
    S: RecordSink + 'static,
{
    pub fn new(leads: Arc<S>, valuations: Arc<S>) -> Self {
        Self {
            leads,
            valuations,
            lead_ids: IdGenerator::new("LEAD"),
            valuation_ids: IdGenerator::new("VAL"),
        }
    }

    /// Record a contact, viewing, or property-question lead.
    pub fn submit_lead(&self, submission: LeadSubmission) -> Result<LeadReceipt, IntakeError> {
        let lead = validate_lead(&submission).inspect_err(|err| {
            warn!(error = %err, "lead submission rejected");
        })?;

        let record = LeadRecord {
            lead_id: LeadId(self.lead_ids.next_id()),
            timestamp: Utc::now(),
            source: lead.source,
            name: lead.name,
            email: lead.email,
            phone: lead.phone.unwrap_or_else(|| PHONE_NOT_PROVIDED.to_string()),
            property_id: lead
                .property_id
                .unwrap_or_else(|| NOT_APPLICABLE.to_string()),
            message: lead.message.unwrap_or_else(|| NOT_APPLICABLE.to_string()),
            preferred_time: lead
                .preferred_time
                .unwrap_or_else(|| NOT_APPLICABLE.to_string()),
        };

        let line = serde_json::to_string(&record)?;
        self.leads.append(&line)?;

        info!(lead_id = %record.lead_id, source = %record.source, "lead recorded");
        Ok(LeadReceipt::accepted(record.lead_id))
    }

    /// Record a home valuation request.
    pub fn submit_valuation(
        &self,
        submission: ValuationSubmission,
    ) -> Result<ValuationReceipt, IntakeError> {
        let valuation = validate_valuation(&submission).inspect_err(|err| {
            warn!(error = %err, "valuation submission rejected");
        })?;

        let record = ValuationRecord {
            request_id: ValuationRequestId(self.valuation_ids.next_id()),
            timestamp: Utc::now(),
            name: valuation.name,
            email: valuation.email,
            phone: valuation
                .phone
                .unwrap_or_else(|| PHONE_NOT_PROVIDED.to_string()),
            property_address: valuation.property_address,
            city: valuation.city,
            province: valuation.province,
            property_type: valuation.property_type,
            timeframe_to_sell: valuation.timeframe_to_sell,
        };

        let line = serde_json::to_string(&record)?;
        self.valuations.append(&line)?;

        info!(
            request_id = %record.request_id,
            city = %record.city,
            "valuation request recorded"
        );
        Ok(ValuationReceipt::accepted(record.request_id))
    }
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Sink(#[from] SinkError),
}
