//! Severity cut points for rescaled DASS-21 subscale scores.
//!
//! Each table lists inclusive upper bounds for Normal, Mild, Moderate and
//! Severe. Scores above the last bound are Extremely Severe. Bounds apply to
//! the score after the ×2 rescaling and differ per subscale.

use serde::Serialize;
use ts_rs::TS;

use tranquil_core::models::dass21::{Dass21Subscale, SeverityBand};

pub const DEPRESSION_CUTOFFS: [u32; 4] = [9, 13, 20, 27];
pub const ANXIETY_CUTOFFS: [u32; 4] = [7, 9, 14, 19];
pub const STRESS_CUTOFFS: [u32; 4] = [14, 18, 25, 33];

const BOUNDED_BANDS: [SeverityBand; 4] = [
    SeverityBand::Normal,
    SeverityBand::Mild,
    SeverityBand::Moderate,
    SeverityBand::Severe,
];

pub fn cutoffs(subscale: Dass21Subscale) -> &'static [u32; 4] {
    match subscale {
        Dass21Subscale::Depression => &DEPRESSION_CUTOFFS,
        Dass21Subscale::Anxiety => &ANXIETY_CUTOFFS,
        Dass21Subscale::Stress => &STRESS_CUTOFFS,
    }
}

/// Classify a rescaled subscale score. Total over all scores, including
/// values above the instrument maximum of 42.
pub fn classify_subscale(subscale: Dass21Subscale, score: u32) -> SeverityBand {
    cutoffs(subscale)
        .iter()
        .zip(BOUNDED_BANDS)
        .find(|&(&upper, _)| score <= upper)
        .map_or(SeverityBand::ExtremelySevere, |(_, band)| band)
}

/// The score interval covered by one severity band, for legends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct SeverityRange {
    pub severity: SeverityBand,
    pub min: u32,
    /// `None` for the open-ended Extremely Severe band.
    pub max: Option<u32>,
}

/// The full band legend for one domain of an instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct SeverityTable {
    pub domain_id: String,
    pub ranges: Vec<SeverityRange>,
}

pub fn severity_table(subscale: Dass21Subscale) -> Vec<SeverityRange> {
    let mut min = 0;
    let mut table = Vec::with_capacity(BOUNDED_BANDS.len() + 1);
    for (&upper, severity) in cutoffs(subscale).iter().zip(BOUNDED_BANDS) {
        table.push(SeverityRange {
            severity,
            min,
            max: Some(upper),
        });
        min = upper + 1;
    }
    table.push(SeverityRange {
        severity: SeverityBand::ExtremelySevere,
        min,
        max: None,
    });
    table
}
