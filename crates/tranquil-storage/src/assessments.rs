//! Assessment record persistence, keyed by patient and assessment time.

use tranquil_core::keys;
use tranquil_core::models::assessment::AssessmentRecord;
use uuid::Uuid;

use crate::error::StorageError;
use crate::store::RecordStore;

/// Persist a record. Returns the key it was written under.
pub async fn save_assessment<S: RecordStore>(
    store: &S,
    record: &AssessmentRecord,
) -> Result<String, StorageError> {
    let key = keys::assessment(record.patient_id, record.assessed_at(), record.id);
    let body = serde_json::to_vec_pretty(record)?;
    store.put(&key, body).await?;

    tracing::info!(
        patient_id = %record.patient_id,
        assessment_id = %record.id,
        key = %key,
        "assessment saved"
    );
    Ok(key)
}

/// All records for a patient, oldest first.
pub async fn list_assessments<S: RecordStore>(
    store: &S,
    patient_id: Uuid,
) -> Result<Vec<AssessmentRecord>, StorageError> {
    let prefix = keys::patient_assessments_prefix(patient_id);
    let object_keys = store.list(&prefix).await?;

    let mut records = Vec::with_capacity(object_keys.len());
    for key in &object_keys {
        if keys::parse_assessment_key(key).is_err() {
            tracing::warn!(key = %key, "skipping object with unrecognized key");
            continue;
        }
        let body = store.get(key).await?;
        let record: AssessmentRecord = serde_json::from_slice(&body)?;
        records.push(record);
    }

    records.sort_by_key(|r| (r.assessed_at(), r.id));
    tracing::debug!(patient_id = %patient_id, count = records.len(), "assessments listed");
    Ok(records)
}

/// Resolve the storage key of a record from its id. The key embeds the
/// assessment time, so this lists the patient prefix.
async fn find_key<S: RecordStore>(
    store: &S,
    patient_id: Uuid,
    id: Uuid,
) -> Result<String, StorageError> {
    let prefix = keys::patient_assessments_prefix(patient_id);
    store
        .list(&prefix)
        .await?
        .into_iter()
        .find(|key| keys::parse_assessment_key(key).is_ok_and(|k| k.id == id))
        .ok_or_else(|| StorageError::NotFound {
            key: format!("{prefix}*_{id}.json"),
        })
}

pub async fn load_assessment<S: RecordStore>(
    store: &S,
    patient_id: Uuid,
    id: Uuid,
) -> Result<AssessmentRecord, StorageError> {
    let key = find_key(store, patient_id, id).await?;
    let body = store.get(&key).await?;
    Ok(serde_json::from_slice(&body)?)
}

pub async fn delete_assessment<S: RecordStore>(
    store: &S,
    patient_id: Uuid,
    id: Uuid,
) -> Result<(), StorageError> {
    let key = find_key(store, patient_id, id).await?;
    store.delete(&key).await?;

    tracing::info!(patient_id = %patient_id, assessment_id = %id, key = %key, "assessment deleted");
    Ok(())
}
