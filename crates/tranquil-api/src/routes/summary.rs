use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use tranquil_core::models::dass21::AssessmentResult;
use tranquil_instruments::history::{HistorySummary, summarize};
use tranquil_storage::{RecordStore, assessments};

use crate::error::ApiError;
use crate::state::AppState;

/// Dashboard aggregates over every stored assessment for a patient.
pub async fn patient_summary<S: RecordStore>(
    State(state): State<AppState<S>>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<HistorySummary>, ApiError> {
    let results: Vec<AssessmentResult> = assessments::list_assessments(&state.store, patient_id)
        .await?
        .into_iter()
        .map(|record| record.result)
        .collect();

    summarize(&results)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("no assessments for patient {patient_id}")))
}
