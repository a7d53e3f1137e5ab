use std::collections::BTreeMap;

use tranquil_core::models::dass21::AssessmentResult;

use crate::assessment::compute_assessment;
use crate::error::ScoringError;
use crate::instruments::dass21::{self, ITEMS, Item, MAX_RESPONSE};

/// An in-progress DASS-21 administration, one item at a time.
///
/// The cursor always points at a valid item (index in `0..21`); `next` and
/// `prev` stop at either end instead of wrapping.
#[derive(Debug, Clone, Default)]
pub struct Questionnaire {
    current: usize,
    answers: BTreeMap<u8, u8>,
}

impl Questionnaire {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_item(&self) -> &'static Item {
        &ITEMS[self.current]
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current == ITEMS.len() - 1
    }

    /// Record an answer for the item under the cursor. The cursor does not
    /// move.
    pub fn answer(&mut self, value: u8) -> Result<(), ScoringError> {
        let number = self.current_item().number;
        self.answer_item(number, value)
    }

    /// Record or overwrite the answer for an arbitrary item.
    pub fn answer_item(&mut self, item: u8, value: u8) -> Result<(), ScoringError> {
        if dass21::item_by_number(item).is_none() {
            return Err(ScoringError::UnknownItem(item.into()));
        }
        if value > MAX_RESPONSE {
            return Err(ScoringError::InvalidResponseValue {
                item,
                value: value.into(),
            });
        }
        self.answers.insert(item, value);
        Ok(())
    }

    pub fn response(&self, item: u8) -> Option<u8> {
        self.answers.get(&item).copied()
    }

    /// Advance to the next item. Returns `false` if already on the last one.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Step back to the previous item. Returns `false` if already on the first.
    pub fn prev(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn is_complete(&self) -> bool {
        self.unanswered().is_empty()
    }

    /// Item numbers still without an answer, ascending.
    pub fn unanswered(&self) -> Vec<u8> {
        ITEMS
            .iter()
            .map(|i| i.number)
            .filter(|n| !self.answers.contains_key(n))
            .collect()
    }

    pub fn responses(&self) -> &BTreeMap<u8, u8> {
        &self.answers
    }

    /// Score the answers collected so far. Fails with
    /// [`ScoringError::IncompleteResponseSet`] until every item is answered.
    pub fn submit(&self, assessed_at: jiff::Timestamp) -> Result<AssessmentResult, ScoringError> {
        compute_assessment(&self.answers, assessed_at)
    }
}
