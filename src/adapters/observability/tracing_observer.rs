//! TracingObserver - `ScoringObserver` adapter emitting `tracing` events.

use tracing::{debug, info, warn};

use crate::domain::assessment::{
    DensityPattern, Dimension, RankedDimension, RelationshipAnalysis, ScoreSheet, ScoringError,
    TrustReport,
};
use crate::ports::ScoringObserver;

/// Logs each scoring stage with structured fields.
///
/// Stage events go out at `debug`, the finished report at `info`, and
/// rejected submissions at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl ScoringObserver for TracingObserver {
    fn dimensions_scored(&self, scores: &ScoreSheet) {
        debug!(
            complete = scores.complete_count(),
            incomplete = scores.incomplete_count(),
            "Dimensions scored"
        );
    }

    fn top_three_selected(&self, top_three: &[RankedDimension], density: Option<DensityPattern>) {
        let names: Vec<&str> = top_three.iter().map(|r| r.dimension().name()).collect();
        debug!(
            top_three = ?names,
            density = density.map(|d| d.code()).unwrap_or("NONE"),
            "Top risks selected"
        );
    }

    fn relationships_analyzed(&self, analysis: &RelationshipAnalysis) {
        debug!(
            relationships = analysis.relationships().len(),
            compensations = analysis.compensations().len(),
            landscape = analysis.landscape().kind().code(),
            balance_ratio = analysis.landscape().balance_ratio(),
            "Relationships analyzed"
        );
    }

    fn report_assembled(&self, report: &TrustReport) {
        info!(
            answered_items = report.answered_items(),
            incomplete_risks = report.incomplete_risks().len(),
            combination_key = %report.combination_key(),
            landscape = report.landscape().kind().code(),
            "Trust report assembled"
        );
    }

    fn scoring_failed(&self, error: &ScoringError) {
        warn!(code = %error.code(), error = %error, "Submission rejected");
    }
}
