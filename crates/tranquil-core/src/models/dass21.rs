use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One of the three dimensions measured by the DASS-21.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Dass21Subscale {
    Depression,
    Anxiety,
    Stress,
}

impl Dass21Subscale {
    pub const ALL: [Dass21Subscale; 3] = [Self::Depression, Self::Anxiety, Self::Stress];

    pub fn id(self) -> &'static str {
        match self {
            Self::Depression => "depression",
            Self::Anxiety => "anxiety",
            Self::Stress => "stress",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Depression => "Depression",
            Self::Anxiety => "Anxiety",
            Self::Stress => "Stress",
        }
    }
}

impl fmt::Display for Dass21Subscale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordinal clinical interpretation of a rescaled subscale score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityBand {
    Normal,
    Mild,
    Moderate,
    Severe,
    ExtremelySevere,
}

impl SeverityBand {
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
            Self::ExtremelySevere => "Extremely Severe",
        }
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score and classification for a single subscale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubscaleResult {
    pub subscale: Dass21Subscale,
    /// Unscaled sum of the seven item values (0–21).
    pub raw_sum: u32,
    /// `raw_sum` × 2, on the long-form DASS-42 scale (0–42).
    pub score: u32,
    pub severity: SeverityBand,
}

/// The outcome of one completed DASS-21 questionnaire.
///
/// `assessed_at` is caller-supplied metadata; it never influences the
/// computed numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub depression: SubscaleResult,
    pub anxiety: SubscaleResult,
    pub stress: SubscaleResult,
    /// Sum of the three rescaled subscale scores (0–126).
    pub grand_total: u32,
    pub assessed_at: jiff::Timestamp,
}

impl AssessmentResult {
    pub fn subscale(&self, subscale: Dass21Subscale) -> &SubscaleResult {
        match subscale {
            Dass21Subscale::Depression => &self.depression,
            Dass21Subscale::Anxiety => &self.anxiety,
            Dass21Subscale::Stress => &self.stress,
        }
    }

    pub fn subscales(&self) -> [&SubscaleResult; 3] {
        [&self.depression, &self.anxiety, &self.stress]
    }
}
