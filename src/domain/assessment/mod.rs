//! Assessment Module - Pure scoring of a team trust survey.
//!
//! # Components
//!
//! - `ResponseSet` - The 45 validated survey items of one submission
//! - `DimensionScorer` - Raw totals and 0-100 indices per dimension
//! - `RankingEngine` - Top-3 risk selection, tier buckets, density
//! - `RelationshipAnalyzer` - Tension, compensation, landscape, combination key
//! - `ResultAggregator` - Freezes everything into a `TrustReport`
//!
//! Everything here is synchronous and side-effect free. Progress is reported
//! through the `ScoringObserver` port by the application layer.

mod dimensions;
mod errors;
mod ranking;
mod relationships;
mod report;
mod responses;
mod scorer;
mod tiers;

pub use dimensions::{
    Category, Dimension, ItemBlock, Orientation, RiskDimension, StrengthDimension,
    DIMENSION_COUNT, ITEMS_PER_DIMENSION,
};
pub use errors::ScoringError;
pub use ranking::{
    DensityPattern, RankedDimension, RankingEngine, RankingOutcome, TierBucket, TOP_RISK_COUNT,
};
pub use relationships::{
    Compensation, Landscape, LandscapeKind, Relationship, RelationshipAnalysis,
    RelationshipAnalyzer, TensionLevel, COMPENSATION_PAIRS, COMPENSATION_RISK_FLOOR,
    COMPENSATION_STRENGTH_FLOOR, HIGH_TENSION_GAP, MEDIUM_TENSION_GAP,
};
pub use report::{ResultAggregator, TrustReport};
pub use responses::{RawItem, ResponseSet, SurveyItem, ITEM_COUNT};
pub use scorer::{
    DimensionScore, DimensionScorer, RiskScore, ScoreOutcome, ScoreSheet, StrengthScore,
};
pub use tiers::{
    SeverityTier, StrengthTier, Tier, TierBand, MIDDLE_BAND_FLOOR, TOP_BAND_FLOOR,
    UPPER_BAND_FLOOR,
};
