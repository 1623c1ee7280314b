//! ScoreAssessmentHandler - Command handler for scoring one survey submission.
//!
//! Runs the pipeline stage by stage and reports each boundary to the
//! injected `ScoringObserver`:
//! validate -> score -> rank -> relate -> aggregate.

use std::sync::Arc;

use crate::domain::assessment::{
    DimensionScorer, RankingEngine, RawItem, RelationshipAnalyzer, ResponseSet,
    ResultAggregator, ScoringError, TrustReport,
};
use crate::domain::foundation::DomainError;
use crate::ports::ScoringObserver;

/// Command to score a submission.
#[derive(Debug, Clone)]
pub struct ScoreAssessmentCommand {
    /// One slot per survey item; `None` is an unanswered item.
    pub responses: Vec<Option<RawItem>>,
}

/// Result of successful scoring.
pub type ScoreAssessmentResult = TrustReport;

/// Handler for scoring submissions.
///
/// Stateless apart from the observer, so one instance can serve
/// concurrent requests.
pub struct ScoreAssessmentHandler {
    observer: Arc<dyn ScoringObserver>,
}

impl ScoreAssessmentHandler {
    pub fn new(observer: Arc<dyn ScoringObserver>) -> Self {
        Self { observer }
    }

    pub fn handle(&self, cmd: ScoreAssessmentCommand) -> Result<ScoreAssessmentResult, DomainError> {
        self.score(&cmd.responses).map_err(|err| {
            self.observer.scoring_failed(&err);
            DomainError::from(err)
        })
    }

    fn score(&self, slots: &[Option<RawItem>]) -> Result<TrustReport, ScoringError> {
        let responses = ResponseSet::from_raw(slots)?;

        let scores = DimensionScorer::score_all(&responses);
        self.observer.dimensions_scored(&scores);

        let ranking = RankingEngine::evaluate(&scores);
        self.observer
            .top_three_selected(ranking.top_three(), ranking.density());

        let analysis = RelationshipAnalyzer::analyze(ranking.top_three(), &scores);
        self.observer.relationships_analyzed(&analysis);

        let report = ResultAggregator::aggregate(responses, scores, ranking, analysis);
        self.observer.report_assembled(&report);

        Ok(report)
    }
}
