use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{post, MethodRouter},
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

use super::domain::{LeadSubmission, ValuationSubmission};
use super::service::{IntakeError, IntakeService};
use super::sink::RecordSink;

/// Paths served by the server-rendered deployment.
pub const LEAD_PATH: &str = "/api/lead";
pub const VALUATION_PATH: &str = "/api/valuation";
/// Paths the statically exported site posts to.
pub const LEAD_SCRIPT_PATH: &str = "/api/lead.php";
pub const VALUATION_SCRIPT_PATH: &str = "/api/valuation.php";

/// Router builder exposing the lead and valuation intake endpoints.
pub fn intake_router<S>(service: Arc<IntakeService<S>>) -> Router
where
    S: RecordSink + 'static,
{
    let lead = intake_methods(post(lead_handler::<S>));
    let valuation = intake_methods(post(valuation_handler::<S>));

    Router::new()
        .route(LEAD_PATH, lead.clone())
        .route(LEAD_SCRIPT_PATH, lead)
        .route(VALUATION_PATH, valuation.clone())
        .route(VALUATION_SCRIPT_PATH, valuation)
        .layer(cors_layer())
        .with_state(service)
}

fn intake_methods<T>(route: MethodRouter<T>) -> MethodRouter<T>
where
    T: Clone + Send + Sync + 'static,
{
    route.fallback(method_not_allowed)
}

/// Answers every `OPTIONS` request itself with an empty 200.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

pub(crate) async fn method_not_allowed() -> Response {
    let payload = json!({ "error": "Method not allowed" });
    (StatusCode::METHOD_NOT_ALLOWED, Json(payload)).into_response()
}

pub(crate) async fn lead_handler<S>(
    State(service): State<Arc<IntakeService<S>>>,
    body: Bytes,
) -> Response
where
    S: RecordSink + 'static,
{
    let submission = match decode_body::<LeadSubmission>(&body) {
        Ok(submission) => submission,
        Err(err) => {
            error!(error = %err, "error processing lead: undecodable body");
            return internal_error();
        }
    };

    // Log appends block on file I/O.
    match tokio::task::spawn_blocking(move || service.submit_lead(submission)).await {
        Ok(Ok(receipt)) => (StatusCode::OK, Json(receipt)).into_response(),
        Ok(Err(err)) => error_response(err, "lead"),
        Err(err) => {
            error!(error = %err, "lead task did not complete");
            internal_error()
        }
    }
}

pub(crate) async fn valuation_handler<S>(
    State(service): State<Arc<IntakeService<S>>>,
    body: Bytes,
) -> Response
where
    S: RecordSink + 'static,
{
    let submission = match decode_body::<ValuationSubmission>(&body) {
        Ok(submission) => submission,
        Err(err) => {
            error!(error = %err, "error processing valuation request: undecodable body");
            return internal_error();
        }
    };

    match tokio::task::spawn_blocking(move || service.submit_valuation(submission)).await {
        Ok(Ok(receipt)) => (StatusCode::OK, Json(receipt)).into_response(),
        Ok(Err(err)) => error_response(err, "valuation request"),
        Err(err) => {
            error!(error = %err, "valuation task did not complete");
            internal_error()
        }
    }
}

/// An empty body decodes as an empty submission so the caller learns which
/// fields are missing.
fn decode_body<T>(body: &[u8]) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
}

fn error_response(err: IntakeError, subject: &str) -> Response {
    match err {
        IntakeError::Validation(violation) => {
            let payload = json!({ "error": violation.to_string() });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        other => {
            error!(error = %other, "error processing {}", subject);
            internal_error()
        }
    }
}

fn internal_error() -> Response {
    let payload = json!({ "error": "Internal server error" });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}
