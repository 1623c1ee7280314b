//! Narrative payload - the flattened view a report generator consumes.
//!
//! Labels, codes and counts are resolved here so downstream templates never
//! need to know the scoring tables.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{
    Compensation, DensityPattern, Dimension, Landscape, RankedDimension, Relationship,
    RiskScore, StrengthScore, Tier, TierBucket, TrustReport, ITEM_COUNT,
};
use crate::domain::foundation::{SubmissionId, Timestamp};

/// Who filled in the survey. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativePayload {
    pub submission_id: SubmissionId,
    pub generated_at: String,
    pub participant: ParticipantInfo,
    pub summary: CompletionSummary,
    pub risk_scores: Vec<RiskScoreView>,
    pub strength_scores: Vec<StrengthScoreView>,
    pub severity_breakdown: Vec<TierBreakdown>,
    pub strength_breakdown: Vec<TierBreakdown>,
    pub top_three: Vec<TopRiskView>,
    pub density: Option<DensityView>,
    pub relationships: Vec<RelationshipView>,
    pub compensations: Vec<CompensationView>,
    pub landscape: LandscapeView,
    pub narrative_codes: NarrativeCodes,
    pub raw_data: Vec<RawResponseView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionSummary {
    pub answered_items: usize,
    pub total_items: usize,
    pub unanswered_items: Vec<usize>,
    pub complete: bool,
    pub incomplete_risks: Vec<&'static str>,
    pub incomplete_strengths: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskScoreView {
    pub code: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub raw_total: Option<u8>,
    pub index: Option<u8>,
    pub tier: Option<&'static str>,
    pub missing_items: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthScoreView {
    pub name: &'static str,
    pub description: &'static str,
    pub raw_total: Option<u8>,
    pub index: Option<u8>,
    pub tier: Option<&'static str>,
    pub missing_items: Vec<usize>,
}

/// One tier with the dimensions that landed in it, highest index first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierBreakdown {
    pub tier: &'static str,
    pub count: usize,
    pub dimensions: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopRiskView {
    pub rank: u8,
    pub code: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub index: u8,
    pub tier: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityView {
    pub code: &'static str,
    pub label: &'static str,
    pub dominant_category: Option<&'static str>,
    pub insight: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipView {
    pub rank: u8,
    pub risk: &'static str,
    pub strength: &'static str,
    pub risk_index: u8,
    pub strength_index: u8,
    pub gap: u8,
    pub tension: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompensationView {
    pub strength: &'static str,
    pub risk: &'static str,
    pub strength_index: u8,
    pub risk_index: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandscapeView {
    pub code: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub critical_count: usize,
    pub cornerstone_count: usize,
    pub strength_average: f64,
    pub challenge_average: f64,
    pub balance_ratio: f64,
}

/// Keys a narrative generator uses to pick its templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeCodes {
    pub top_three: Vec<&'static str>,
    pub density: Option<&'static str>,
    pub landscape: &'static str,
    pub combination_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResponseView {
    pub item: usize,
    pub response: Option<u8>,
    pub label: Option<&'static str>,
    pub reverse_scored: bool,
}

impl NarrativePayload {
    pub fn from_report(
        report: &TrustReport,
        participant: ParticipantInfo,
        submission_id: SubmissionId,
        generated_at: Timestamp,
    ) -> Self {
        Self {
            submission_id,
            generated_at: generated_at.to_rfc3339(),
            participant,
            summary: CompletionSummary {
                answered_items: report.answered_items(),
                total_items: ITEM_COUNT,
                unanswered_items: report.responses().unanswered_items(),
                complete: report.is_complete(),
                incomplete_risks: report.incomplete_risks().iter().map(|d| d.name()).collect(),
                incomplete_strengths: report
                    .incomplete_strengths()
                    .iter()
                    .map(|d| d.name())
                    .collect(),
            },
            risk_scores: report.risk_scores().iter().map(RiskScoreView::from).collect(),
            strength_scores: report
                .strength_scores()
                .iter()
                .map(StrengthScoreView::from)
                .collect(),
            severity_breakdown: report.severity_buckets().iter().map(breakdown).collect(),
            strength_breakdown: report.strength_buckets().iter().map(breakdown).collect(),
            top_three: report.top_three().iter().map(TopRiskView::from).collect(),
            density: report.density().map(DensityView::from),
            relationships: report
                .relationships()
                .iter()
                .map(RelationshipView::from)
                .collect(),
            compensations: report
                .compensations()
                .iter()
                .map(CompensationView::from)
                .collect(),
            landscape: LandscapeView::from(report.landscape()),
            narrative_codes: NarrativeCodes {
                top_three: report.top_three().iter().map(|r| r.dimension().code()).collect(),
                density: report.density().map(|d| d.code()),
                landscape: report.landscape().kind().code(),
                combination_key: report.combination_key().to_string(),
            },
            raw_data: report
                .responses()
                .items()
                .iter()
                .map(|item| RawResponseView {
                    item: item.index(),
                    response: item.response().map(|r| r.value()),
                    label: item.response().map(|r| r.label()),
                    reverse_scored: item.is_reverse_scored(),
                })
                .collect(),
        }
    }
}

fn breakdown<D: Dimension>(bucket: &TierBucket<D>) -> TierBreakdown {
    TierBreakdown {
        tier: bucket.tier().label(),
        count: bucket.len(),
        dimensions: bucket.scores().iter().map(|s| s.dimension().name()).collect(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl From<&RiskScore> for RiskScoreView {
    fn from(score: &RiskScore) -> Self {
        let dimension = score.dimension();
        Self {
            code: dimension.code(),
            name: dimension.name(),
            category: dimension.category().label(),
            raw_total: score.raw_total(),
            index: score.index().map(|i| i.value()),
            tier: score.tier().map(|t| t.label()),
            missing_items: score.missing_items().to_vec(),
        }
    }
}

impl From<&StrengthScore> for StrengthScoreView {
    fn from(score: &StrengthScore) -> Self {
        let dimension = score.dimension();
        Self {
            name: dimension.name(),
            description: dimension.description(),
            raw_total: score.raw_total(),
            index: score.index().map(|i| i.value()),
            tier: score.tier().map(|t| t.label()),
            missing_items: score.missing_items().to_vec(),
        }
    }
}

impl From<&RankedDimension> for TopRiskView {
    fn from(ranked: &RankedDimension) -> Self {
        Self {
            rank: ranked.rank(),
            code: ranked.dimension().code(),
            name: ranked.dimension().name(),
            category: ranked.category().label(),
            index: ranked.index().value(),
            tier: ranked.tier().label(),
        }
    }
}

impl From<DensityPattern> for DensityView {
    fn from(density: DensityPattern) -> Self {
        let dominant_category = match density {
            DensityPattern::DeepPattern { dominant } => Some(dominant.label()),
            _ => None,
        };
        Self {
            code: density.code(),
            label: density.label(),
            dominant_category,
            insight: density.insight(),
        }
    }
}

impl From<&Relationship> for RelationshipView {
    fn from(relationship: &Relationship) -> Self {
        Self {
            rank: relationship.rank(),
            risk: relationship.risk().name(),
            strength: relationship.strength().name(),
            risk_index: relationship.risk_index().value(),
            strength_index: relationship.strength_index().value(),
            gap: relationship.gap(),
            tension: relationship.tension().label(),
        }
    }
}

impl From<&Compensation> for CompensationView {
    fn from(compensation: &Compensation) -> Self {
        Self {
            strength: compensation.strength().name(),
            risk: compensation.risk().name(),
            strength_index: compensation.strength_index().value(),
            risk_index: compensation.risk_index().value(),
        }
    }
}

impl From<&Landscape> for LandscapeView {
    fn from(landscape: &Landscape) -> Self {
        let kind = landscape.kind();
        Self {
            code: kind.code(),
            label: kind.label(),
            description: kind.description(),
            critical_count: landscape.critical_count(),
            cornerstone_count: landscape.cornerstone_count(),
            strength_average: round2(landscape.strength_average()),
            challenge_average: round2(landscape.challenge_average()),
            balance_ratio: round2(landscape.balance_ratio()),
        }
    }
}
