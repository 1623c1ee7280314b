//! Dimension Scorer - raw totals and normalized indices per dimension.

use serde::Serialize;

use super::dimensions::{Dimension, RiskDimension, StrengthDimension};
use super::responses::ResponseSet;
use super::tiers::Tier;
use super::ScoringError;
use crate::domain::foundation::TrustIndex;

/// Result of scoring one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScoreOutcome {
    /// All five items answered.
    Complete { raw_total: u8, index: TrustIndex },
    /// At least one item unanswered; no number is reported.
    Incomplete { missing_items: Vec<usize> },
}

/// Score of a single risk or strength dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionScore<D> {
    dimension: D,
    outcome: ScoreOutcome,
}

/// Score of a risk dimension.
pub type RiskScore = DimensionScore<RiskDimension>;

/// Score of a strength dimension.
pub type StrengthScore = DimensionScore<StrengthDimension>;

impl<D: Dimension> DimensionScore<D> {
    /// Creates a complete score from a five-item raw total.
    ///
    /// # Errors
    /// `RawTotalOutOfRange` unless `raw_total` is within 5-25.
    pub fn complete(dimension: D, raw_total: u8) -> Result<Self, ScoringError> {
        let index = TrustIndex::from_raw_total(raw_total)
            .map_err(|_| ScoringError::RawTotalOutOfRange { raw_total })?;
        Ok(Self {
            dimension,
            outcome: ScoreOutcome::Complete { raw_total, index },
        })
    }

    /// Creates a score for a dimension with unanswered items.
    pub fn incomplete(dimension: D, missing_items: Vec<usize>) -> Self {
        Self {
            dimension,
            outcome: ScoreOutcome::Incomplete { missing_items },
        }
    }

    pub fn dimension(&self) -> D {
        self.dimension
    }

    pub fn outcome(&self) -> &ScoreOutcome {
        &self.outcome
    }

    pub fn raw_total(&self) -> Option<u8> {
        match self.outcome {
            ScoreOutcome::Complete { raw_total, .. } => Some(raw_total),
            ScoreOutcome::Incomplete { .. } => None,
        }
    }

    pub fn index(&self) -> Option<TrustIndex> {
        match self.outcome {
            ScoreOutcome::Complete { index, .. } => Some(index),
            ScoreOutcome::Incomplete { .. } => None,
        }
    }

    /// Tier for a complete score.
    pub fn tier(&self) -> Option<D::Tier> {
        self.index().map(<D::Tier as Tier>::from_index)
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.outcome, ScoreOutcome::Complete { .. })
    }

    /// Unanswered item indices; empty for a complete score.
    pub fn missing_items(&self) -> &[usize] {
        match &self.outcome {
            ScoreOutcome::Complete { .. } => &[],
            ScoreOutcome::Incomplete { missing_items } => missing_items,
        }
    }
}

/// Every risk and strength score of one submission, in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreSheet {
    risks: Vec<RiskScore>,
    strengths: Vec<StrengthScore>,
}

impl ScoreSheet {
    pub fn new(risks: Vec<RiskScore>, strengths: Vec<StrengthScore>) -> Self {
        Self { risks, strengths }
    }

    pub fn risks(&self) -> &[RiskScore] {
        &self.risks
    }

    pub fn strengths(&self) -> &[StrengthScore] {
        &self.strengths
    }

    pub fn risk(&self, dimension: RiskDimension) -> Option<&RiskScore> {
        self.risks.iter().find(|s| s.dimension() == dimension)
    }

    pub fn strength(&self, dimension: StrengthDimension) -> Option<&StrengthScore> {
        self.strengths.iter().find(|s| s.dimension() == dimension)
    }

    /// Number of complete scores across both kinds.
    pub fn complete_count(&self) -> usize {
        self.risks.iter().filter(|s| s.is_complete()).count()
            + self.strengths.iter().filter(|s| s.is_complete()).count()
    }

    /// Number of incomplete scores across both kinds.
    pub fn incomplete_count(&self) -> usize {
        self.risks.len() + self.strengths.len() - self.complete_count()
    }
}

/// Scorer turning a response set into dimension scores.
///
/// Scoring cannot fail: a [`ResponseSet`] only holds responses on the 1-5
/// scale, so five of them always total 5-25.
pub struct DimensionScorer;

impl DimensionScorer {
    /// Scores one dimension from its five items.
    ///
    /// Any unanswered item makes the score incomplete; the missing item
    /// indices are recorded instead of a number.
    pub fn score<D: Dimension>(responses: &ResponseSet, dimension: D) -> DimensionScore<D> {
        let mut raw_total: u8 = 0;
        let mut missing_items = Vec::new();

        for item_index in dimension.item_block().indices() {
            match responses.item(item_index).and_then(|item| {
                item.response()
                    .map(|response| (response, item.is_reverse_scored()))
            }) {
                Some((response, reverse_scored)) => {
                    raw_total += D::ORIENTATION.scored_value(response, reverse_scored);
                }
                None => missing_items.push(item_index),
            }
        }

        if !missing_items.is_empty() {
            return DimensionScore::incomplete(dimension, missing_items);
        }

        DimensionScore {
            dimension,
            outcome: ScoreOutcome::Complete {
                raw_total,
                index: TrustIndex::from_raw_total_clamped(raw_total),
            },
        }
    }

    /// Scores every dimension of one kind, in canonical order.
    pub fn score_each<D: Dimension>(responses: &ResponseSet) -> Vec<DimensionScore<D>> {
        D::all()
            .iter()
            .map(|dimension| Self::score(responses, *dimension))
            .collect()
    }

    /// Scores all nine risk and nine strength dimensions.
    pub fn score_all(responses: &ResponseSet) -> ScoreSheet {
        ScoreSheet::new(
            Self::score_each::<RiskDimension>(responses),
            Self::score_each::<StrengthDimension>(responses),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::responses::{RawItem, ITEM_COUNT};
    use crate::domain::assessment::tiers::{SeverityTier, StrengthTier};

    fn responses(slots: Vec<Option<RawItem>>) -> ResponseSet {
        ResponseSet::from_raw(&slots).unwrap()
    }

    fn uniform(value: i64, reverse_scored: bool) -> Vec<Option<RawItem>> {
        vec![Some(RawItem::answered(value, reverse_scored)); ITEM_COUNT]
    }

    #[test]
    fn neutral_answers_score_fifty_everywhere() {
        let sheet = DimensionScorer::score_all(&responses(uniform(3, false)));

        for score in sheet.risks() {
            assert_eq!(score.raw_total(), Some(15));
            assert_eq!(score.index(), Some(TrustIndex::new(50)));
            assert_eq!(score.tier(), Some(SeverityTier::ModerateTension));
        }
        for score in sheet.strengths() {
            assert_eq!(score.index(), Some(TrustIndex::new(50)));
            assert_eq!(score.tier(), Some(StrengthTier::Emerging));
        }
    }

    #[test]
    fn reverse_scored_block_mirrors_risk_and_strength() {
        // All answers 5, Micromanaging's block (25-29) reverse-scored.
        let mut slots = uniform(5, false);
        for slot in slots.iter_mut().skip(25).take(5) {
            *slot = Some(RawItem::answered(5, true));
        }
        let set = responses(slots);

        let risk = DimensionScorer::score(&set, RiskDimension::Micromanaging);
        assert_eq!(risk.raw_total(), Some(5));
        assert_eq!(risk.index(), Some(TrustIndex::ZERO));
        assert_eq!(risk.tier(), Some(SeverityTier::BackgroundStatic));

        let strength = DimensionScorer::score(&set, StrengthDimension::EmpoweredAutonomy);
        assert_eq!(strength.raw_total(), Some(25));
        assert_eq!(strength.index(), Some(TrustIndex::HUNDRED));
        assert_eq!(strength.tier(), Some(StrengthTier::Cornerstone));

        let other = DimensionScorer::score(&set, RiskDimension::Inauthenticity);
        assert_eq!(other.index(), Some(TrustIndex::HUNDRED));
        assert_eq!(other.tier(), Some(SeverityTier::CriticalPressurePoints));
    }

    #[test]
    fn mixed_items_sum_per_orientation() {
        // Block 0: 5, 4 (reversed), 3, 2 (reversed), 1
        let mut slots = uniform(3, false);
        slots[0] = Some(RawItem::answered(5, false));
        slots[1] = Some(RawItem::answered(4, true));
        slots[2] = Some(RawItem::answered(3, false));
        slots[3] = Some(RawItem::answered(2, true));
        slots[4] = Some(RawItem::answered(1, false));
        let set = responses(slots);

        // risk: 5 + 2 + 3 + 4 + 1 = 15
        let risk = DimensionScorer::score(&set, RiskDimension::Inauthenticity);
        assert_eq!(risk.raw_total(), Some(15));
        // strength: 1 + 4 + 3 + 2 + 5 = 15
        let strength = DimensionScorer::score(&set, StrengthDimension::AuthenticPresence);
        assert_eq!(strength.raw_total(), Some(15));
    }

    #[test]
    fn complete_pairs_sum_to_one_hundred() {
        let mut slots = uniform(2, false);
        slots[5] = Some(RawItem::answered(5, false));
        slots[6] = Some(RawItem::answered(4, true));
        slots[40] = Some(RawItem::answered(1, true));
        let sheet = DimensionScorer::score_all(&responses(slots));

        for (risk, strength) in sheet.risks().iter().zip(sheet.strengths()) {
            let total = risk.index().unwrap().value() + strength.index().unwrap().value();
            assert_eq!(total, 100, "{}", risk.dimension());
        }
    }

    #[test]
    fn unanswered_item_marks_score_incomplete() {
        let mut slots = uniform(4, false);
        slots[12] = Some(RawItem::unanswered(false));
        slots[14] = None;
        let set = responses(slots);

        let risk = DimensionScorer::score(&set, RiskDimension::LackOfFollowThrough);
        assert!(!risk.is_complete());
        assert_eq!(risk.index(), None);
        assert_eq!(risk.raw_total(), None);
        assert_eq!(risk.tier(), None);
        assert_eq!(risk.missing_items(), &[12, 14]);

        let strength = DimensionScorer::score(&set, StrengthDimension::ReliableExecution);
        assert!(!strength.is_complete());

        let neighbour = DimensionScorer::score(&set, RiskDimension::UndercurrentOfNegativity);
        assert!(neighbour.is_complete());
        assert!(neighbour.missing_items().is_empty());
    }

    #[test]
    fn score_sheet_counts_and_lookups() {
        let mut slots = uniform(4, false);
        slots[0] = None;
        let sheet = DimensionScorer::score_all(&responses(slots));

        assert_eq!(sheet.risks().len(), 9);
        assert_eq!(sheet.strengths().len(), 9);
        assert_eq!(sheet.complete_count(), 16);
        assert_eq!(sheet.incomplete_count(), 2);
        assert!(!sheet.risk(RiskDimension::Inauthenticity).unwrap().is_complete());
        assert_eq!(
            sheet.strength(StrengthDimension::CuriousOpenness).unwrap().index(),
            Some(TrustIndex::new(25))
        );
    }

    #[test]
    fn extreme_answers_score_within_range() {
        for value in [1, 5] {
            for reverse_scored in [false, true] {
                let sheet = DimensionScorer::score_all(&responses(uniform(value, reverse_scored)));
                assert_eq!(sheet.complete_count(), 18);
                for score in sheet.risks() {
                    let raw = score.raw_total().unwrap();
                    assert!(raw == 5 || raw == 25);
                    assert_eq!(
                        RiskScore::complete(score.dimension(), raw).as_ref(),
                        Ok(score)
                    );
                }
            }
        }
    }

    #[test]
    fn complete_rejects_unreachable_raw_total() {
        assert_eq!(
            RiskScore::complete(RiskDimension::Micromanaging, 26),
            Err(ScoringError::RawTotalOutOfRange { raw_total: 26 })
        );
        assert!(RiskScore::complete(RiskDimension::Micromanaging, 4).is_err());
    }

    #[test]
    fn incomplete_score_serializes_with_status() {
        let score = StrengthScore::incomplete(StrengthDimension::EmotionalWisdom, vec![31]);
        let json = serde_json::to_value(&score).unwrap();
        assert_eq!(json["dimension"], "emotional_wisdom");
        assert_eq!(json["outcome"]["status"], "incomplete");
        assert_eq!(json["outcome"]["missing_items"][0], 31);
    }
}
