//! Lead and valuation intake.
//!
//! Both form endpoints share one pipeline: validate the JSON body, append a
//! single JSON line to an injected [`RecordSink`], and answer with a generated
//! identifier. The router mounts the same handlers under the server-rendered
//! paths and the legacy `.php` paths used by the static export.

pub mod domain;
mod ids;
pub mod router;
pub mod service;
pub mod sink;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    LeadId, LeadReceipt, LeadRecord, LeadSource, LeadSubmission, ValuationReceipt,
    ValuationRecord, ValuationRequestId, ValuationSubmission,
};
pub use ids::IdGenerator;
pub use router::intake_router;
pub use service::{IntakeError, IntakeService};
pub use sink::{JsonlFileSink, MemorySink, RecordSink, SinkError};
pub use validation::ValidationError;
