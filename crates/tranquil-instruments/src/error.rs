use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),
}

/// Rejection of a DASS-21 response set. Raised before any score is
/// computed; partial or clamped scores are never produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("incomplete response set: items {missing:?} are unanswered")]
    IncompleteResponseSet { missing: Vec<u8> },

    #[error("item {item}: response value {value} is outside 0-3")]
    InvalidResponseValue { item: u8, value: i64 },

    #[error("unknown item {0}: DASS-21 items are numbered 1-21")]
    UnknownItem(i64),

    #[error("item {0} is answered more than once")]
    DuplicateItem(u8),
}
