//! Narrative adapter - report output for downstream narrative generation.

mod payload;

pub use payload::{
    CompensationView, CompletionSummary, DensityView, LandscapeView, NarrativeCodes,
    NarrativePayload, ParticipantInfo, RawResponseView, RelationshipView, RiskScoreView,
    StrengthScoreView, TierBreakdown, TopRiskView,
};
