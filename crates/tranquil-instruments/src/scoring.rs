use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// The type of score a field produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreType {
    /// Unscaled sum of item ratings.
    Raw,
    /// Raw sum multiplied onto the long-form scale.
    Rescaled,
    /// Likert-style item rating (e.g., 0–3).
    Rating,
}

/// Inclusive bounds for an integer score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: u32,
    pub max: u32,
}

impl ScoreRange {
    pub fn contains(&self, value: i64) -> bool {
        value >= i64::from(self.min) && value <= i64::from(self.max)
    }
}

/// A single scored field within a domain. For questionnaire instruments
/// these are the individual items.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoredField {
    pub id: String,
    pub name: String,
    pub score_type: ScoreType,
    pub range: ScoreRange,
    pub description: Option<String>,
}

/// A top-level domain within an instrument, containing scored fields.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub fields: Vec<ScoredField>,
    pub composite_score_type: Option<ScoreType>,
    pub composite_range: Option<ScoreRange>,
    pub description: Option<String>,
}

/// One selectable answer on a rating item.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResponseOption {
    pub value: u8,
    pub label: &'static str,
}

/// A score entered by hand, checked against an instrument's fields.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEntry {
    pub field_id: String,
    pub value: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field_id: String,
    pub value: i64,
    pub expected_range: Option<ScoreRange>,
    pub message: String,
}
