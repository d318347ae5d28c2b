//! E-filing handlers

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use tracing::info;

use crate::dto::efiling::{EfilingRequest, EfilingResponse};
use crate::{error::ApiError, AppState};

/// Runs the e-filing automation for a case
///
/// Body deserialization failures surface through the same flat error
/// contract as filing failures, so the rejection is mapped here instead
/// of letting Axum answer with a 4xx.
pub async fn submit_filing(
    State(state): State<AppState>,
    payload: Result<Json<EfilingRequest>, JsonRejection>,
) -> Result<Json<EfilingResponse>, ApiError> {
    let Json(request) =
        payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    info!(
        case_id = %request.case_id,
        account_id = %request.account_id,
        package_uri = request.package_uri.as_deref(),
        "E-filing requested"
    );

    let outcome = state
        .engine
        .submit(request.case_id, request.account_id)
        .await?;

    Ok(Json(EfilingResponse {
        success: true,
        receipt_number: outcome.receipt_number.to_string(),
        confirmation_url: outcome.confirmation_url,
        message: "E-filing completed successfully".to_string(),
    }))
}
