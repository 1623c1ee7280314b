//! ScoringObserver port - Progress hooks for the scoring pipeline.
//!
//! The domain never logs. The application layer reports each stage
//! boundary here, and adapters decide what to do with it (structured
//! logging, metrics, test recording).

use crate::domain::assessment::{
    DensityPattern, RankedDimension, RelationshipAnalysis, ScoreSheet, ScoringError, TrustReport,
};

/// Port notified as a submission moves through the scoring stages.
///
/// All methods default to no-ops so adapters only implement what they need.
/// Implementations must not block; they run inline with scoring.
pub trait ScoringObserver: Send + Sync {
    /// All 18 dimensions were scored.
    fn dimensions_scored(&self, _scores: &ScoreSheet) {}

    /// The top three risks and their density were selected.
    fn top_three_selected(&self, _top_three: &[RankedDimension], _density: Option<DensityPattern>) {
    }

    /// Relationships, compensations and the landscape were derived.
    fn relationships_analyzed(&self, _analysis: &RelationshipAnalysis) {}

    /// The final report was frozen.
    fn report_assembled(&self, _report: &TrustReport) {}

    /// The submission was rejected before a report could be built.
    fn scoring_failed(&self, _error: &ScoringError) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ScoringObserver for NoopObserver {}
