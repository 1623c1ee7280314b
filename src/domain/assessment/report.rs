//! Result Aggregator - the frozen report of one submission.

use serde::Serialize;

use super::dimensions::{RiskDimension, StrengthDimension};
use super::ranking::{DensityPattern, RankedDimension, RankingOutcome, TierBucket};
use super::relationships::{Compensation, Landscape, Relationship, RelationshipAnalysis};
use super::responses::ResponseSet;
use super::scorer::{RiskScore, ScoreSheet, StrengthScore};

/// Complete scoring result for one submission.
///
/// Built once by [`ResultAggregator::aggregate`]; there are no mutators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustReport {
    responses: ResponseSet,
    scores: ScoreSheet,
    ranking: RankingOutcome,
    analysis: RelationshipAnalysis,
    answered_items: usize,
    incomplete_risks: Vec<RiskDimension>,
    incomplete_strengths: Vec<StrengthDimension>,
}

impl TrustReport {
    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn scores(&self) -> &ScoreSheet {
        &self.scores
    }

    pub fn risk_scores(&self) -> &[RiskScore] {
        self.scores.risks()
    }

    pub fn strength_scores(&self) -> &[StrengthScore] {
        self.scores.strengths()
    }

    pub fn top_three(&self) -> &[RankedDimension] {
        self.ranking.top_three()
    }

    pub fn density(&self) -> Option<DensityPattern> {
        self.ranking.density()
    }

    pub fn severity_buckets(&self) -> &[TierBucket<RiskDimension>] {
        self.ranking.severity_buckets()
    }

    pub fn strength_buckets(&self) -> &[TierBucket<StrengthDimension>] {
        self.ranking.strength_buckets()
    }

    pub fn relationships(&self) -> &[Relationship] {
        self.analysis.relationships()
    }

    pub fn compensations(&self) -> &[Compensation] {
        self.analysis.compensations()
    }

    pub fn landscape(&self) -> &Landscape {
        self.analysis.landscape()
    }

    pub fn combination_key(&self) -> &str {
        self.analysis.combination_key()
    }

    /// Items with a response, out of 45.
    pub fn answered_items(&self) -> usize {
        self.answered_items
    }

    pub fn incomplete_risks(&self) -> &[RiskDimension] {
        &self.incomplete_risks
    }

    pub fn incomplete_strengths(&self) -> &[StrengthDimension] {
        &self.incomplete_strengths
    }

    /// True when every dimension was scored.
    pub fn is_complete(&self) -> bool {
        self.incomplete_risks.is_empty() && self.incomplete_strengths.is_empty()
    }
}

/// Aggregator freezing stage outputs into a [`TrustReport`].
pub struct ResultAggregator;

impl ResultAggregator {
    pub fn aggregate(
        responses: ResponseSet,
        scores: ScoreSheet,
        ranking: RankingOutcome,
        analysis: RelationshipAnalysis,
    ) -> TrustReport {
        let incomplete_risks = scores
            .risks()
            .iter()
            .filter(|s| !s.is_complete())
            .map(|s| s.dimension())
            .collect();
        let incomplete_strengths = scores
            .strengths()
            .iter()
            .filter(|s| !s.is_complete())
            .map(|s| s.dimension())
            .collect();

        TrustReport {
            answered_items: responses.answered_count(),
            responses,
            scores,
            ranking,
            analysis,
            incomplete_risks,
            incomplete_strengths,
        }
    }
}
