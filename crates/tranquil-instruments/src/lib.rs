//! tranquil-instruments
//!
//! Clinical questionnaire definitions and scoring. Pure computation with no
//! I/O and no AWS dependency. Defines the DASS-21 item table, its
//! severity cut points, and the aggregates the dashboard derives from a
//! patient's assessment history.

pub mod assessment;
pub mod error;
pub mod history;
pub mod instruments;
pub mod questionnaire;
pub mod scoring;
pub mod severity;

use error::InstrumentError;
use scoring::{Domain, ResponseOption, ScoreEntry, ValidationError};
use severity::SeverityTable;

pub use assessment::{collect_responses, compute_assessment};
pub use severity::classify_subscale;

/// Trait implemented by each clinical assessment instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "dass21").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "DASS-21").
    fn name(&self) -> &str;

    /// The domains and scored fields this instrument measures.
    fn domains(&self) -> &[Domain];

    /// Answer choices shared by every item, for rating questionnaires.
    fn response_options(&self) -> &[ResponseOption] {
        &[]
    }

    /// Score-to-severity legends, one per classified domain.
    fn severity_tables(&self) -> Vec<SeverityTable> {
        Vec::new()
    }

    /// Validate hand-entered scores against this instrument's fields.
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        let fields: Vec<_> = self.domains().iter().flat_map(|d| &d.fields).collect();

        scores
            .iter()
            .filter_map(|entry| {
                let Some(field) = fields.iter().find(|f| f.id == entry.field_id) else {
                    return Some(ValidationError {
                        field_id: entry.field_id.clone(),
                        value: entry.value,
                        expected_range: None,
                        message: format!("{}: unknown field '{}'", self.name(), entry.field_id),
                    });
                };

                (!field.range.contains(entry.value)).then(|| ValidationError {
                    field_id: entry.field_id.clone(),
                    value: entry.value,
                    expected_range: Some(field.range),
                    message: format!(
                        "{}: {} value {} is outside range [{}, {}]",
                        self.name(),
                        field.id,
                        entry.value,
                        field.range.min,
                        field.range.max,
                    ),
                })
            })
            .collect()
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::dass21::Dass21)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    all_instruments()
        .into_iter()
        .find(|i| i.id() == id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
