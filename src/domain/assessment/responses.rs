//! Response model - the 45 survey items of one submission.

use serde::{Deserialize, Serialize};

use super::dimensions::{DIMENSION_COUNT, ITEMS_PER_DIMENSION};
use super::ScoringError;
use crate::domain::foundation::LikertResponse;

/// Number of survey items in a submission.
pub const ITEM_COUNT: usize = DIMENSION_COUNT * ITEMS_PER_DIMENSION;

/// An item slot as delivered by the input decoder, before validation.
///
/// `response` is kept wide so any JSON integer reaches scale validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    #[serde(default)]
    pub response: Option<i64>,
    #[serde(default)]
    pub reverse_scored: bool,
}

impl RawItem {
    pub fn answered(response: i64, reverse_scored: bool) -> Self {
        Self {
            response: Some(response),
            reverse_scored,
        }
    }

    pub fn unanswered(reverse_scored: bool) -> Self {
        Self {
            response: None,
            reverse_scored,
        }
    }
}

/// A validated survey item. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyItem {
    index: usize,
    response: Option<LikertResponse>,
    reverse_scored: bool,
}

impl SurveyItem {
    pub fn new(index: usize, response: Option<LikertResponse>, reverse_scored: bool) -> Self {
        Self {
            index,
            response,
            reverse_scored,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn response(&self) -> Option<LikertResponse> {
        self.response
    }

    pub fn is_reverse_scored(&self) -> bool {
        self.reverse_scored
    }

    pub fn is_answered(&self) -> bool {
        self.response.is_some()
    }
}

/// All 45 items of one submission, index-addressed 0-44.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseSet {
    items: Vec<SurveyItem>,
}

impl ResponseSet {
    /// Validates decoded item slots.
    ///
    /// A missing slot counts as an unanswered, non-reverse-scored item.
    ///
    /// # Errors
    /// - `MalformedInput` if there are not exactly [`ITEM_COUNT`] slots
    /// - `InvalidResponse` if an answered item is off the 1-5 scale
    pub fn from_raw(slots: &[Option<RawItem>]) -> Result<Self, ScoringError> {
        if slots.len() != ITEM_COUNT {
            return Err(ScoringError::malformed_input(ITEM_COUNT, slots.len()));
        }

        let items = slots
            .iter()
            .enumerate()
            .map(|(index, slot)| {
                let raw = slot.unwrap_or_default();
                let response = raw
                    .response
                    .map(LikertResponse::try_from_value)
                    .transpose()
                    .map_err(|e| ScoringError::invalid_response(index, e))?;
                Ok(SurveyItem::new(index, response, raw.reverse_scored))
            })
            .collect::<Result<Vec<_>, ScoringError>>()?;

        Ok(Self { items })
    }

    pub fn items(&self) -> &[SurveyItem] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&SurveyItem> {
        self.items.get(index)
    }

    /// Number of items with a response.
    pub fn answered_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_answered()).count()
    }

    /// Indices of items without a response, ascending.
    pub fn unanswered_items(&self) -> Vec<usize> {
        self.items
            .iter()
            .filter(|i| !i.is_answered())
            .map(|i| i.index())
            .collect()
    }
}
