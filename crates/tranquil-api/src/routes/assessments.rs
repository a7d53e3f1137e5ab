use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use tranquil_core::models::assessment::AssessmentRecord;
use tranquil_instruments::{collect_responses, compute_assessment};
use tranquil_storage::{RecordStore, assessments};

use crate::audit::{AuditAction, AuditEvent};
use crate::error::ApiError;
use crate::extract::{ApiJson, ResponseEntries};
use crate::middleware::auth::Clinician;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateAssessment {
    pub responses: ResponseEntries,
    #[serde(default)]
    pub assessed_at: Option<jiff::Timestamp>,
    #[serde(default)]
    pub notes: Option<String>,
}

pub async fn list_assessments<S: RecordStore>(
    State(state): State<AppState<S>>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<Vec<AssessmentRecord>>, ApiError> {
    let records = assessments::list_assessments(&state.store, patient_id).await?;
    Ok(Json(records))
}

pub async fn get_assessment<S: RecordStore>(
    State(state): State<AppState<S>>,
    Path((patient_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<AssessmentRecord>, ApiError> {
    let record = assessments::load_assessment(&state.store, patient_id, id).await?;
    Ok(Json(record))
}

/// Score a completed questionnaire and store it under the patient.
pub async fn create_assessment<S: RecordStore>(
    State(state): State<AppState<S>>,
    Path(patient_id): Path<Uuid>,
    Extension(clinician): Extension<Clinician>,
    ApiJson(req): ApiJson<CreateAssessment>,
) -> Result<(StatusCode, Json<AssessmentRecord>), ApiError> {
    let now = jiff::Timestamp::now();
    let assessed_at = req.assessed_at.unwrap_or(now);
    // Keys order records by epoch second, which only sorts for non-negative values.
    if assessed_at < jiff::Timestamp::UNIX_EPOCH {
        return Err(ApiError::Unprocessable(format!(
            "assessed_at {assessed_at} is before 1970-01-01T00:00:00Z"
        )));
    }
    let responses = collect_responses(req.responses.0)?;
    let result = compute_assessment(&responses, assessed_at)?;

    let record = AssessmentRecord {
        id: Uuid::new_v4(),
        patient_id,
        responses,
        result,
        notes: req.notes,
        recorded_by: Some(clinician.sub.clone()),
        created_at: now,
    };
    assessments::save_assessment(&state.store, &record).await?;

    AuditEvent::assessment(AuditAction::Create, record.id, patient_id, clinician.sub)
        .with_details(json!({
            "grand_total": record.result.grand_total,
            "assessed_at": record.result.assessed_at,
        }))
        .emit();

    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn delete_assessment<S: RecordStore>(
    State(state): State<AppState<S>>,
    Path((patient_id, id)): Path<(Uuid, Uuid)>,
    Extension(clinician): Extension<Clinician>,
) -> Result<StatusCode, ApiError> {
    assessments::delete_assessment(&state.store, patient_id, id).await?;

    AuditEvent::assessment(AuditAction::Delete, id, patient_id, clinician.sub).emit();

    Ok(StatusCode::NO_CONTENT)
}
