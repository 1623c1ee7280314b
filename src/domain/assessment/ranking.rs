//! Ranking & Bucketing Engine - top-3 selection, tiers, and density.
//!
//! Risk dimensions are ordered by a strict total order:
//!
//! 1. index, descending
//! 2. category priority (CONTAMINATE > CONTROL > CONCEAL > COLLAPSE)
//! 3. within-category priority
//! 4. canonical dimension order
//!
//! With the current tables no two dimensions share keys 2 and 3, so the last
//! key never decides between real ties; it keeps the order independent of the
//! order scores are supplied in if the tables change.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::dimensions::{Category, Dimension, RiskDimension, StrengthDimension};
use super::scorer::{DimensionScore, RiskScore, ScoreSheet};
use super::tiers::{SeverityTier, Tier, TierBand};
use crate::domain::foundation::TrustIndex;

/// Number of risk dimensions selected for the report focus.
pub const TOP_RISK_COUNT: usize = 3;

/// A risk dimension selected into the top three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedDimension {
    rank: u8,
    dimension: RiskDimension,
    index: TrustIndex,
    raw_total: u8,
}

impl RankedDimension {
    /// 1-based position.
    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn dimension(&self) -> RiskDimension {
        self.dimension
    }

    pub fn index(&self) -> TrustIndex {
        self.index
    }

    pub fn raw_total(&self) -> u8 {
        self.raw_total
    }

    pub fn category(&self) -> Category {
        self.dimension.category()
    }

    pub fn tier(&self) -> SeverityTier {
        SeverityTier::from_index(self.index)
    }
}

/// Complete scores of one tier, highest index first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierBucket<D: Dimension> {
    tier: D::Tier,
    scores: Vec<DimensionScore<D>>,
}

impl<D: Dimension> TierBucket<D> {
    pub fn tier(&self) -> D::Tier {
        self.tier
    }

    pub fn scores(&self) -> &[DimensionScore<D>] {
        &self.scores
    }

    pub fn dimensions(&self) -> Vec<D> {
        self.scores.iter().map(|s| s.dimension()).collect()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// How concentrated the top three risks are across categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "pattern", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DensityPattern {
    /// Three distinct categories.
    Dispersed,
    /// Two distinct categories.
    Concentrated,
    /// A single category.
    DeepPattern { dominant: Category },
}

impl DensityPattern {
    /// Classifies a multiset of categories by how many distinct values it holds.
    ///
    /// Returns `None` only for an empty input.
    pub fn classify(categories: &[Category]) -> Option<Self> {
        let distinct: BTreeSet<Category> = categories.iter().copied().collect();
        let mut iter = distinct.iter();
        match (iter.next(), distinct.len()) {
            (None, _) => None,
            (Some(only), 1) => Some(DensityPattern::DeepPattern { dominant: *only }),
            (Some(_), 2) => Some(DensityPattern::Concentrated),
            (Some(_), _) => Some(DensityPattern::Dispersed),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DensityPattern::Dispersed => "DISPERSED",
            DensityPattern::Concentrated => "CONCENTRATED",
            DensityPattern::DeepPattern { .. } => "DEEP_PATTERN",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DensityPattern::Dispersed => "Dispersed",
            DensityPattern::Concentrated => "Concentrated",
            DensityPattern::DeepPattern { .. } => "Deep Pattern",
        }
    }

    /// Category-specific insight; only a deep pattern carries one.
    pub fn insight(&self) -> Option<&'static str> {
        match self {
            DensityPattern::DeepPattern { dominant } => Some(dominant.deep_pattern_insight()),
            _ => None,
        }
    }
}

/// Everything the ranking stage derives from a score sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingOutcome {
    top_three: Vec<RankedDimension>,
    density: Option<DensityPattern>,
    severity_buckets: Vec<TierBucket<RiskDimension>>,
    strength_buckets: Vec<TierBucket<StrengthDimension>>,
}

impl RankingOutcome {
    pub fn top_three(&self) -> &[RankedDimension] {
        &self.top_three
    }

    pub fn density(&self) -> Option<DensityPattern> {
        self.density
    }

    pub fn severity_buckets(&self) -> &[TierBucket<RiskDimension>] {
        &self.severity_buckets
    }

    pub fn strength_buckets(&self) -> &[TierBucket<StrengthDimension>] {
        &self.strength_buckets
    }
}

/// Ranking and bucketing over scored dimensions.
pub struct RankingEngine;

impl RankingEngine {
    /// Orders two scores: higher index first, ties by dimension precedence,
    /// incomplete scores last.
    pub fn compare<D: Dimension>(a: &DimensionScore<D>, b: &DimensionScore<D>) -> Ordering {
        match (a.index(), b.index()) {
            (Some(x), Some(y)) => y
                .cmp(&x)
                .then_with(|| a.dimension().precedence(&b.dimension())),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.dimension().precedence(&b.dimension()),
        }
    }

    /// Complete risk scores in ranking order.
    pub fn rank_risks(scores: &[RiskScore]) -> Vec<&RiskScore> {
        let mut ranked: Vec<&RiskScore> = scores.iter().filter(|s| s.is_complete()).collect();
        ranked.sort_by(|a, b| Self::compare(*a, *b));
        ranked
    }

    /// The first three complete risk scores in ranking order.
    ///
    /// Fewer than three are returned only when fewer are complete.
    pub fn top_three(scores: &[RiskScore]) -> Vec<RankedDimension> {
        Self::rank_risks(scores)
            .into_iter()
            .filter_map(|score| {
                Some((score.dimension(), score.index()?, score.raw_total()?))
            })
            .take(TOP_RISK_COUNT)
            .zip(1u8..)
            .map(|((dimension, index, raw_total), rank)| RankedDimension {
                rank,
                dimension,
                index,
                raw_total,
            })
            .collect()
    }

    /// Partitions complete scores into the four tiers, highest tier first.
    ///
    /// Every tier is present, possibly empty. Incomplete scores are left out.
    pub fn bucket<D: Dimension>(scores: &[DimensionScore<D>]) -> Vec<TierBucket<D>> {
        TierBand::ALL
            .iter()
            .map(|band| {
                let tier = <D::Tier as Tier>::from_band(*band);
                let mut members: Vec<DimensionScore<D>> = scores
                    .iter()
                    .filter(|s| s.tier() == Some(tier))
                    .cloned()
                    .collect();
                members.sort_by(Self::compare);
                TierBucket {
                    tier,
                    scores: members,
                }
            })
            .collect()
    }

    pub fn classify_density(top_three: &[RankedDimension]) -> Option<DensityPattern> {
        let categories: Vec<Category> = top_three.iter().map(|r| r.category()).collect();
        DensityPattern::classify(&categories)
    }

    /// Runs ranking, bucketing, and density classification.
    pub fn evaluate(sheet: &ScoreSheet) -> RankingOutcome {
        let top_three = Self::top_three(sheet.risks());
        let density = Self::classify_density(&top_three);

        RankingOutcome {
            top_three,
            density,
            severity_buckets: Self::bucket(sheet.risks()),
            strength_buckets: Self::bucket(sheet.strengths()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::scorer::StrengthScore;
    use crate::domain::assessment::tiers::StrengthTier;

    /// Builds a complete risk score with the given index (a multiple of 5).
    fn risk(dimension: RiskDimension, index: u8) -> RiskScore {
        RiskScore::complete(dimension, 5 + index / 5).unwrap()
    }

    fn strength(dimension: StrengthDimension, index: u8) -> StrengthScore {
        StrengthScore::complete(dimension, 5 + index / 5).unwrap()
    }

    fn all_risks_at(index: u8) -> Vec<RiskScore> {
        RiskDimension::ALL.iter().map(|d| risk(*d, index)).collect()
    }

    fn dims(top: &[RankedDimension]) -> Vec<RiskDimension> {
        top.iter().map(|r| r.dimension()).collect()
    }

    #[test]
    fn top_three_by_index() {
        let mut scores = all_risks_at(20);
        scores[2] = risk(RiskDimension::LackOfFollowThrough, 90);
        scores[8] = risk(RiskDimension::ClosedMindedness, 70);
        scores[4] = risk(RiskDimension::ExcessiveSelfReliance, 65);

        let top = RankingEngine::top_three(&scores);
        assert_eq!(
            dims(&top),
            vec![
                RiskDimension::LackOfFollowThrough,
                RiskDimension::ClosedMindedness,
                RiskDimension::ExcessiveSelfReliance,
            ]
        );
        assert_eq!(top.iter().map(|r| r.rank()).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(top[0].index().value(), 90);
        assert_eq!(top[0].raw_total(), 23);
        assert_eq!(top[0].tier(), SeverityTier::CriticalPressurePoints);
    }

    #[test]
    fn all_equal_falls_back_to_category_then_within_category() {
        let top = RankingEngine::top_three(&all_risks_at(50));
        assert_eq!(
            dims(&top),
            vec![
                RiskDimension::EmotionalVolatility,
                RiskDimension::UndercurrentOfNegativity,
                RiskDimension::Micromanaging,
            ]
        );
    }

    #[test]
    fn full_ranking_order_on_ties() {
        let all = all_risks_at(40);
        let ranked: Vec<RiskDimension> = RankingEngine::rank_risks(&all)
            .iter()
            .map(|s| s.dimension())
            .collect();
        assert_eq!(
            ranked,
            vec![
                RiskDimension::EmotionalVolatility,
                RiskDimension::UndercurrentOfNegativity,
                RiskDimension::Micromanaging,
                RiskDimension::InformationHoarding,
                RiskDimension::ExcessiveSelfReliance,
                RiskDimension::Inauthenticity,
                RiskDimension::ClosedMindedness,
                RiskDimension::ReluctanceToTakeOnChallenges,
                RiskDimension::LackOfFollowThrough,
            ]
        );
    }

    #[test]
    fn category_breaks_tie_before_within_category() {
        let mut scores = all_risks_at(10);
        scores[5] = risk(RiskDimension::Micromanaging, 75);
        scores[1] = risk(RiskDimension::UndercurrentOfNegativity, 75);
        scores[0] = risk(RiskDimension::Inauthenticity, 75);
        scores[2] = risk(RiskDimension::LackOfFollowThrough, 75);

        let top = RankingEngine::top_three(&scores);
        assert_eq!(
            dims(&top),
            vec![
                RiskDimension::UndercurrentOfNegativity,
                RiskDimension::Micromanaging,
                RiskDimension::Inauthenticity,
            ]
        );
    }

    #[test]
    fn within_control_micromanaging_beats_hoarding_beats_self_reliance() {
        let mut scores = all_risks_at(0);
        scores[4] = risk(RiskDimension::ExcessiveSelfReliance, 60);
        scores[7] = risk(RiskDimension::InformationHoarding, 60);
        scores[5] = risk(RiskDimension::Micromanaging, 60);

        let top = RankingEngine::top_three(&scores);
        assert_eq!(
            dims(&top),
            vec![
                RiskDimension::Micromanaging,
                RiskDimension::InformationHoarding,
                RiskDimension::ExcessiveSelfReliance,
            ]
        );
    }

    #[test]
    fn ranking_ignores_input_order() {
        let mut scores = all_risks_at(35);
        scores[3] = risk(RiskDimension::ReluctanceToTakeOnChallenges, 80);
        scores[6] = risk(RiskDimension::EmotionalVolatility, 80);
        let forward = RankingEngine::top_three(&scores);

        scores.reverse();
        let backward = RankingEngine::top_three(&scores);
        assert_eq!(forward, backward);
    }

    #[test]
    fn incomplete_scores_are_not_eligible() {
        let mut scores = all_risks_at(30);
        scores[6] = RiskScore::incomplete(RiskDimension::EmotionalVolatility, vec![30]);
        scores[1] = RiskScore::incomplete(RiskDimension::UndercurrentOfNegativity, vec![5, 6]);

        let top = RankingEngine::top_three(&scores);
        assert_eq!(
            dims(&top),
            vec![
                RiskDimension::Micromanaging,
                RiskDimension::InformationHoarding,
                RiskDimension::ExcessiveSelfReliance,
            ]
        );
    }

    #[test]
    fn top_three_shrinks_when_fewer_are_complete() {
        let scores: Vec<RiskScore> = RiskDimension::ALL
            .iter()
            .map(|d| {
                if *d == RiskDimension::ClosedMindedness || *d == RiskDimension::Inauthenticity {
                    risk(*d, 55)
                } else {
                    RiskScore::incomplete(*d, vec![d.item_block().start()])
                }
            })
            .collect();

        let top = RankingEngine::top_three(&scores);
        assert_eq!(
            dims(&top),
            vec![RiskDimension::Inauthenticity, RiskDimension::ClosedMindedness]
        );
        assert_eq!(
            RankingEngine::classify_density(&top),
            Some(DensityPattern::DeepPattern {
                dominant: Category::Conceal
            })
        );
    }

    #[test]
    fn buckets_partition_complete_scores() {
        let scores = vec![
            risk(RiskDimension::Inauthenticity, 85),
            risk(RiskDimension::UndercurrentOfNegativity, 80),
            risk(RiskDimension::LackOfFollowThrough, 60),
            risk(RiskDimension::ReluctanceToTakeOnChallenges, 45),
            risk(RiskDimension::ExcessiveSelfReliance, 40),
            risk(RiskDimension::Micromanaging, 40),
            risk(RiskDimension::EmotionalVolatility, 35),
            risk(RiskDimension::InformationHoarding, 0),
            RiskScore::incomplete(RiskDimension::ClosedMindedness, vec![44]),
        ];

        let buckets = RankingEngine::bucket(&scores);
        assert_eq!(buckets.len(), 4);
        assert_eq!(buckets[0].tier(), SeverityTier::CriticalPressurePoints);
        assert_eq!(
            buckets[0].dimensions(),
            vec![RiskDimension::Inauthenticity, RiskDimension::UndercurrentOfNegativity]
        );
        assert_eq!(buckets[1].dimensions(), vec![RiskDimension::LackOfFollowThrough]);
        assert_eq!(
            buckets[2].dimensions(),
            vec![
                RiskDimension::ReluctanceToTakeOnChallenges,
                RiskDimension::Micromanaging,
                RiskDimension::ExcessiveSelfReliance,
            ]
        );
        assert_eq!(
            buckets[3].dimensions(),
            vec![RiskDimension::EmotionalVolatility, RiskDimension::InformationHoarding]
        );

        let total: usize = buckets.iter().map(|b| b.len()).sum();
        assert_eq!(total, 8);
    }

    #[test]
    fn strength_buckets_use_strength_labels() {
        let scores = vec![
            strength(StrengthDimension::EmpoweredAutonomy, 100),
            strength(StrengthDimension::AuthenticPresence, 100),
            strength(StrengthDimension::CuriousOpenness, 20),
        ];
        let buckets = RankingEngine::bucket(&scores);
        assert_eq!(buckets[0].tier(), StrengthTier::Cornerstone);
        assert_eq!(
            buckets[0].dimensions(),
            vec![StrengthDimension::AuthenticPresence, StrengthDimension::EmpoweredAutonomy]
        );
        assert!(buckets[1].is_empty());
        assert!(buckets[2].is_empty());
        assert_eq!(buckets[3].tier(), StrengthTier::Fragile);
        assert_eq!(buckets[3].len(), 1);
    }

    #[test]
    fn density_dispersed() {
        let pattern = DensityPattern::classify(&[
            Category::Contaminate,
            Category::Control,
            Category::Conceal,
        ]);
        assert_eq!(pattern, Some(DensityPattern::Dispersed));
        assert_eq!(pattern.unwrap().insight(), None);
    }

    #[test]
    fn density_concentrated() {
        let pattern =
            DensityPattern::classify(&[Category::Control, Category::Collapse, Category::Control]);
        assert_eq!(pattern, Some(DensityPattern::Concentrated));
        assert_eq!(pattern.unwrap().code(), "CONCENTRATED");
    }

    #[test]
    fn density_deep_pattern_carries_category_and_insight() {
        let pattern =
            DensityPattern::classify(&[Category::Control, Category::Control, Category::Control])
                .unwrap();
        assert_eq!(
            pattern,
            DensityPattern::DeepPattern {
                dominant: Category::Control
            }
        );
        assert_eq!(pattern.code(), "DEEP_PATTERN");
        assert_eq!(pattern.insight(), Some(Category::Control.deep_pattern_insight()));
    }

    #[test]
    fn density_of_nothing_is_none() {
        assert_eq!(DensityPattern::classify(&[]), None);
    }

    #[test]
    fn density_is_exhaustive_over_all_category_triples() {
        for a in Category::ALL {
            for b in Category::ALL {
                for c in Category::ALL {
                    let pattern = DensityPattern::classify(&[a, b, c]);
                    assert!(pattern.is_some());
                }
            }
        }
    }

    #[test]
    fn evaluate_collects_everything() {
        let mut risks = all_risks_at(50);
        risks[5] = risk(RiskDimension::Micromanaging, 85);
        let strengths: Vec<StrengthScore> = StrengthDimension::ALL
            .iter()
            .map(|d| strength(*d, 50))
            .collect();
        let sheet = ScoreSheet::new(risks, strengths);

        let outcome = RankingEngine::evaluate(&sheet);
        assert_eq!(outcome.top_three()[0].dimension(), RiskDimension::Micromanaging);
        assert_eq!(outcome.top_three().len(), 3);
        assert_eq!(outcome.density(), Some(DensityPattern::Concentrated));
        assert_eq!(outcome.severity_buckets()[0].len(), 1);
        assert_eq!(outcome.strength_buckets()[2].len(), 9);
    }

    #[test]
    fn density_serializes_with_pattern_tag() {
        let json = serde_json::to_value(DensityPattern::DeepPattern {
            dominant: Category::Conceal,
        })
        .unwrap();
        assert_eq!(json["pattern"], "DEEP_PATTERN");
        assert_eq!(json["dominant"], "CONCEAL");
    }
}
