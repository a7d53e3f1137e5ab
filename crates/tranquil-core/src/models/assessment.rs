use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::dass21::AssessmentResult;

/// A scored DASS-21 questionnaire as persisted for a patient.
///
/// The raw responses are stored alongside the computed result so a record
/// can be re-scored and audited later.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    /// Item number (1–21) to response value (0–3).
    pub responses: BTreeMap<u8, u8>,
    pub result: AssessmentResult,
    #[serde(default)]
    pub notes: Option<String>,
    /// Subject of the clinician token that submitted the questionnaire.
    #[serde(default)]
    pub recorded_by: Option<String>,
    pub created_at: jiff::Timestamp,
}

impl AssessmentRecord {
    pub fn assessed_at(&self) -> jiff::Timestamp {
        self.result.assessed_at
    }
}
