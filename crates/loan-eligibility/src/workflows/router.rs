use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};

use super::fintech::{ApplicantProfile, ScoredVerdict};
use super::products::{LoanType, RuleVerdict};
use super::service::{EligibilityService, EligibilityServiceError};

/// Router builder exposing HTTP endpoints for both evaluators.
pub fn eligibility_router(service: Arc<EligibilityService>) -> Router {
    Router::new()
        .route("/api/v1/eligibility/fintech", post(fintech_handler))
        .route("/api/v1/eligibility/products", post(product_handler))
        .with_state(service)
}

#[derive(Debug, Serialize)]
pub(crate) struct FintechVerdictView {
    #[serde(flatten)]
    pub(crate) verdict: ScoredVerdict,
    pub(crate) summary: String,
    pub(crate) remarks: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProductVerdictView {
    pub(crate) loan_type: Option<LoanType>,
    #[serde(flatten)]
    pub(crate) verdict: RuleVerdict,
    pub(crate) summary: String,
}

pub(crate) async fn fintech_handler(
    State(service): State<Arc<EligibilityService>>,
    Json(profile): Json<ApplicantProfile>,
) -> Response {
    match service.assess_fintech(profile) {
        Ok(verdict) => {
            let view = FintechVerdictView {
                summary: verdict.summary(),
                remarks: verdict.remarks(),
                verdict,
            };
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn product_handler(
    State(service): State<Arc<EligibilityService>>,
    Json(payload): Json<Value>,
) -> Response {
    match service.assess_product_payload(payload) {
        Ok(assessment) => {
            let view = ProductVerdictView {
                summary: assessment.summary(),
                loan_type: assessment.loan_type,
                verdict: assessment.verdict,
            };
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: EligibilityServiceError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}
