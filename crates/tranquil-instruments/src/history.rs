//! Aggregates over a patient's DASS-21 history, as shown on the clinical
//! dashboard.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use tranquil_core::models::dass21::{AssessmentResult, Dass21Subscale, SeverityBand};

/// Minimum grand-total movement, first to latest, that counts as a trend.
pub const TREND_THRESHOLD: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Trend {
    /// Grand total fell by at least [`TREND_THRESHOLD`].
    Improving,
    Stable,
    /// Grand total rose by at least [`TREND_THRESHOLD`].
    Worsening,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubscaleHistory {
    pub subscale: Dass21Subscale,
    pub latest_score: u32,
    pub latest_severity: SeverityBand,
    pub mean_score: f64,
    pub min_score: u32,
    pub max_score: u32,
    pub peak_severity: SeverityBand,
    /// Latest score minus first score.
    pub change: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistorySummary {
    pub count: u32,
    pub first_assessed_at: jiff::Timestamp,
    pub latest_assessed_at: jiff::Timestamp,
    pub latest: AssessmentResult,
    pub depression: SubscaleHistory,
    pub anxiety: SubscaleHistory,
    pub stress: SubscaleHistory,
    pub mean_grand_total: f64,
    pub grand_total_change: i32,
    pub trend: Trend,
}

/// Summarize a set of results. Input order is irrelevant; results are
/// ordered by `assessed_at`. Returns `None` for an empty history.
pub fn summarize(results: &[AssessmentResult]) -> Option<HistorySummary> {
    let mut ordered: Vec<&AssessmentResult> = results.iter().collect();
    ordered.sort_by_key(|r| r.assessed_at);

    let first = *ordered.first()?;
    let latest = *ordered.last()?;
    let count = ordered.len() as f64;

    let subscale_history = |subscale: Dass21Subscale| {
        let scores = ordered.iter().map(|r| r.subscale(subscale));
        let latest_result = latest.subscale(subscale);
        SubscaleHistory {
            subscale,
            latest_score: latest_result.score,
            latest_severity: latest_result.severity,
            mean_score: scores.clone().map(|s| f64::from(s.score)).sum::<f64>() / count,
            min_score: scores.clone().map(|s| s.score).min().unwrap_or(0),
            max_score: scores.clone().map(|s| s.score).max().unwrap_or(0),
            peak_severity: scores
                .map(|s| s.severity)
                .max()
                .unwrap_or(SeverityBand::Normal),
            change: delta(first.subscale(subscale).score, latest_result.score),
        }
    };

    let grand_total_change = delta(first.grand_total, latest.grand_total);

    Some(HistorySummary {
        count: ordered.len() as u32,
        first_assessed_at: first.assessed_at,
        latest_assessed_at: latest.assessed_at,
        latest: latest.clone(),
        depression: subscale_history(Dass21Subscale::Depression),
        anxiety: subscale_history(Dass21Subscale::Anxiety),
        stress: subscale_history(Dass21Subscale::Stress),
        mean_grand_total: ordered.iter().map(|r| f64::from(r.grand_total)).sum::<f64>() / count,
        grand_total_change,
        trend: trend(grand_total_change),
    })
}

fn delta(from: u32, to: u32) -> i32 {
    to as i32 - from as i32
}

fn trend(grand_total_change: i32) -> Trend {
    if grand_total_change <= -TREND_THRESHOLD {
        Trend::Improving
    } else if grand_total_change >= TREND_THRESHOLD {
        Trend::Worsening
    } else {
        Trend::Stable
    }
}
