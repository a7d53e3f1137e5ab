use axum::Json;
use serde::Deserialize;

use tranquil_core::models::dass21::AssessmentResult;
use tranquil_instruments::{collect_responses, compute_assessment};

use crate::error::ApiError;
use crate::extract::{ApiJson, ResponseEntries};

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    /// Item number (1–21) to response value (0–3).
    pub responses: ResponseEntries,
    /// Defaults to the time of the request.
    #[serde(default)]
    pub assessed_at: Option<jiff::Timestamp>,
}

/// Score a response set without storing it.
pub async fn score(
    ApiJson(req): ApiJson<ScoreRequest>,
) -> Result<Json<AssessmentResult>, ApiError> {
    let responses = collect_responses(req.responses.0)?;
    let assessed_at = req.assessed_at.unwrap_or_else(jiff::Timestamp::now);
    let result = compute_assessment(&responses, assessed_at)?;
    Ok(Json(result))
}
