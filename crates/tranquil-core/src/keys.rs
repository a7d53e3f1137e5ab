//! Storage key conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the canonical
//! layout of assessment records in the Tranquil bucket. Records are keyed by
//! patient and assessment time, so a lexicographic listing of a patient
//! prefix is also chronological. That holds only for assessment times at or
//! after the Unix epoch; earlier seconds format with a leading `-`.

use uuid::Uuid;

use crate::error::CoreError;

pub const PATIENTS_PREFIX: &str = "patients/";

const ASSESSMENTS_SEGMENT: &str = "assessments";

pub fn patient_assessments_prefix(patient_id: Uuid) -> String {
    format!("{PATIENTS_PREFIX}{patient_id}/{ASSESSMENTS_SEGMENT}/")
}

pub fn assessment(patient_id: Uuid, assessed_at: jiff::Timestamp, id: Uuid) -> String {
    format!(
        "{}{:012}_{id}.json",
        patient_assessments_prefix(patient_id),
        assessed_at.as_second()
    )
}

/// The components encoded in an assessment record key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssessmentKey {
    pub patient_id: Uuid,
    pub assessed_at_second: i64,
    pub id: Uuid,
}

pub fn parse_assessment_key(key: &str) -> Result<AssessmentKey, CoreError> {
    let invalid = || CoreError::InvalidKey(key.to_string());

    let rest = key.strip_prefix(PATIENTS_PREFIX).ok_or_else(invalid)?;
    let mut parts = rest.splitn(3, '/');
    let patient = parts.next().ok_or_else(invalid)?;
    if parts.next() != Some(ASSESSMENTS_SEGMENT) {
        return Err(invalid());
    }
    let file = parts
        .next()
        .and_then(|f| f.strip_suffix(".json"))
        .ok_or_else(invalid)?;
    let (seconds, id) = file.split_once('_').ok_or_else(invalid)?;

    Ok(AssessmentKey {
        patient_id: Uuid::parse_str(patient)?,
        assessed_at_second: seconds.parse().map_err(|_| invalid())?,
        id: Uuid::parse_str(id)?,
    })
}
