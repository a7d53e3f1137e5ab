use std::collections::BTreeMap;

use tranquil_core::models::dass21::{AssessmentResult, Dass21Subscale, SubscaleResult};

use crate::error::ScoringError;
use crate::instruments::dass21::{self, ITEM_COUNT, MAX_RESPONSE};
use crate::severity::classify_subscale;

/// Multiplier that puts a short-form subscale sum on the DASS-42 scale.
pub const RESCALE_FACTOR: u32 = 2;

/// Check that `responses` holds exactly the 21 DASS-21 items with values
/// in 0–3.
///
/// Unknown item numbers are reported first, then out-of-range values, then
/// missing items.
pub fn validate_responses(responses: &BTreeMap<u8, u8>) -> Result<(), ScoringError> {
    for (&item, &value) in responses {
        if dass21::subscale_of(item).is_none() {
            return Err(ScoringError::UnknownItem(item.into()));
        }
        if value > MAX_RESPONSE {
            return Err(ScoringError::InvalidResponseValue {
                item,
                value: value.into(),
            });
        }
    }

    let missing: Vec<u8> = (1..=ITEM_COUNT)
        .filter(|item| !responses.contains_key(item))
        .collect();
    if !missing.is_empty() {
        return Err(ScoringError::IncompleteResponseSet { missing });
    }

    Ok(())
}

/// Build a response map from `(item, value)` pairs as they arrive over the
/// wire, before any narrowing. Each item may appear once.
///
/// Entries are checked in order; the first bad entry is reported.
/// Completeness is left to [`validate_responses`].
pub fn collect_responses(
    entries: impl IntoIterator<Item = (i64, i64)>,
) -> Result<BTreeMap<u8, u8>, ScoringError> {
    let mut responses = BTreeMap::new();
    for (item, value) in entries {
        let number = u8::try_from(item)
            .ok()
            .filter(|&n| dass21::subscale_of(n).is_some())
            .ok_or(ScoringError::UnknownItem(item))?;
        let response = u8::try_from(value)
            .ok()
            .filter(|&v| v <= MAX_RESPONSE)
            .ok_or(ScoringError::InvalidResponseValue {
                item: number,
                value,
            })?;
        if responses.insert(number, response).is_some() {
            return Err(ScoringError::DuplicateItem(number));
        }
    }
    Ok(responses)
}

/// Score a complete DASS-21 response set.
///
/// Deterministic: the same responses always produce the same scores.
/// `assessed_at` is carried onto the result unchanged.
pub fn compute_assessment(
    responses: &BTreeMap<u8, u8>,
    assessed_at: jiff::Timestamp,
) -> Result<AssessmentResult, ScoringError> {
    validate_responses(responses)?;

    let mut raw_sums: BTreeMap<Dass21Subscale, u32> = BTreeMap::new();
    for (&item, &value) in responses {
        if let Some(subscale) = dass21::subscale_of(item) {
            *raw_sums.entry(subscale).or_default() += u32::from(value);
        }
    }

    let result_for = |subscale: Dass21Subscale| {
        let raw_sum = raw_sums.get(&subscale).copied().unwrap_or(0);
        let score = raw_sum * RESCALE_FACTOR;
        SubscaleResult {
            subscale,
            raw_sum,
            score,
            severity: classify_subscale(subscale, score),
        }
    };

    let depression = result_for(Dass21Subscale::Depression);
    let anxiety = result_for(Dass21Subscale::Anxiety);
    let stress = result_for(Dass21Subscale::Stress);

    Ok(AssessmentResult {
        grand_total: depression.score + anxiety.score + stress.score,
        depression,
        anxiety,
        stress,
        assessed_at,
    })
}
