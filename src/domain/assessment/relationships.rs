//! Relationship Analyzer - how the top risks relate to their strengths.
//!
//! Produces, for one submission:
//! - a `Relationship` (tension level) per top-3 risk and its opposite strength
//! - `Compensation` flags for known strength/risk pairs that co-occur high
//! - the overall `Landscape` classification with its balance ratio
//! - the order-independent combination key of the top three

use serde::{Deserialize, Serialize};

use super::dimensions::{Dimension, RiskDimension, StrengthDimension};
use super::ranking::RankedDimension;
use super::scorer::{DimensionScore, RiskScore, ScoreSheet, StrengthScore};
use super::tiers::{SeverityTier, StrengthTier};
use crate::domain::foundation::TrustIndex;

/// Smallest gap considered high tension.
pub const HIGH_TENSION_GAP: u8 = 40;

/// Smallest gap considered medium tension.
pub const MEDIUM_TENSION_GAP: u8 = 20;

/// A strength must exceed this index to compensate.
pub const COMPENSATION_STRENGTH_FLOOR: u8 = 80;

/// A risk must exceed this index to be compensated.
pub const COMPENSATION_RISK_FLOOR: u8 = 60;

/// Strength/risk pairs known to mask each other.
pub const COMPENSATION_PAIRS: [(StrengthDimension, RiskDimension); 4] = [
    (StrengthDimension::EmpoweredAutonomy, RiskDimension::Micromanaging),
    (StrengthDimension::CollaborativePower, RiskDimension::ExcessiveSelfReliance),
    (StrengthDimension::EmotionalWisdom, RiskDimension::EmotionalVolatility),
    (StrengthDimension::ConstructiveEnergy, RiskDimension::UndercurrentOfNegativity),
];

// ════════════════════════════════════════════════════════════════════════════════
// Tension
// ════════════════════════════════════════════════════════════════════════════════

/// Disagreement between a risk index and its opposite strength index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TensionLevel {
    High,
    Medium,
    Low,
}

impl TensionLevel {
    pub fn from_gap(gap: u8) -> Self {
        if gap >= HIGH_TENSION_GAP {
            TensionLevel::High
        } else if gap >= MEDIUM_TENSION_GAP {
            TensionLevel::Medium
        } else {
            TensionLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TensionLevel::High => "high",
            TensionLevel::Medium => "medium",
            TensionLevel::Low => "low",
        }
    }
}

/// A top-3 risk paired with its opposite strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Relationship {
    rank: u8,
    risk: RiskDimension,
    strength: StrengthDimension,
    risk_index: TrustIndex,
    strength_index: TrustIndex,
    gap: u8,
    tension: TensionLevel,
}

impl Relationship {
    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn risk(&self) -> RiskDimension {
        self.risk
    }

    pub fn strength(&self) -> StrengthDimension {
        self.strength
    }

    pub fn risk_index(&self) -> TrustIndex {
        self.risk_index
    }

    pub fn strength_index(&self) -> TrustIndex {
        self.strength_index
    }

    /// `|risk - strength|`
    pub fn gap(&self) -> u8 {
        self.gap
    }

    pub fn tension(&self) -> TensionLevel {
        self.tension
    }
}

/// A high strength co-occurring with a high risk it is known to mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Compensation {
    strength: StrengthDimension,
    risk: RiskDimension,
    strength_index: TrustIndex,
    risk_index: TrustIndex,
}

impl Compensation {
    pub fn strength(&self) -> StrengthDimension {
        self.strength
    }

    pub fn risk(&self) -> RiskDimension {
        self.risk
    }

    pub fn strength_index(&self) -> TrustIndex {
        self.strength_index
    }

    pub fn risk_index(&self) -> TrustIndex {
        self.risk_index
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Landscape
// ════════════════════════════════════════════════════════════════════════════════

/// Overall shape of the team's trust landscape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandscapeKind {
    Thriving,
    Struggling,
    Healthy,
    Developing,
}

impl LandscapeKind {
    /// Decides the landscape from tier counts. Rules are checked in order;
    /// the first match wins.
    ///
    /// 1. Thriving: at least 3 cornerstones and no critical risks
    /// 2. Struggling: at least 3 critical risks and at most 1 cornerstone
    /// 3. Healthy: at least 2 cornerstones and at most 1 critical risk
    /// 4. Developing: everything else
    pub fn classify(critical_count: usize, cornerstone_count: usize) -> Self {
        if cornerstone_count >= 3 && critical_count == 0 {
            LandscapeKind::Thriving
        } else if critical_count >= 3 && cornerstone_count <= 1 {
            LandscapeKind::Struggling
        } else if cornerstone_count >= 2 && critical_count <= 1 {
            LandscapeKind::Healthy
        } else {
            LandscapeKind::Developing
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LandscapeKind::Thriving => "Thriving",
            LandscapeKind::Struggling => "Struggling",
            LandscapeKind::Healthy => "Healthy",
            LandscapeKind::Developing => "Developing",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            LandscapeKind::Thriving => "THRIVING",
            LandscapeKind::Struggling => "STRUGGLING",
            LandscapeKind::Healthy => "HEALTHY",
            LandscapeKind::Developing => "DEVELOPING",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LandscapeKind::Thriving => {
                "Several strengths are firmly established and no risk has reached a \
                 critical level. The team has a solid base to build on."
            }
            LandscapeKind::Struggling => {
                "Multiple risks sit at a critical level and few strengths are established \
                 enough to counter them. Trust needs focused repair."
            }
            LandscapeKind::Healthy => {
                "Established strengths outweigh the critical risks. The team can use what \
                 already works to address the remaining friction."
            }
            LandscapeKind::Developing => {
                "Strengths and risks are still taking shape. Small, consistent changes will \
                 decide which way the team's trust develops."
            }
        }
    }
}

/// Landscape classification with the numbers it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Landscape {
    kind: LandscapeKind,
    critical_count: usize,
    cornerstone_count: usize,
    strength_average: f64,
    challenge_average: f64,
    balance_ratio: f64,
}

impl Landscape {
    pub fn kind(&self) -> LandscapeKind {
        self.kind
    }

    /// Risks in the Critical Pressure Points tier.
    pub fn critical_count(&self) -> usize {
        self.critical_count
    }

    /// Strengths in the Cornerstone tier.
    pub fn cornerstone_count(&self) -> usize {
        self.cornerstone_count
    }

    /// Mean index over complete strength scores (0 when none).
    pub fn strength_average(&self) -> f64 {
        self.strength_average
    }

    /// Mean index over complete risk scores (0 when none).
    pub fn challenge_average(&self) -> f64 {
        self.challenge_average
    }

    /// `strength_average / max(challenge_average, 1)`
    pub fn balance_ratio(&self) -> f64 {
        self.balance_ratio
    }
}

/// Everything the relationship stage derives for one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipAnalysis {
    relationships: Vec<Relationship>,
    compensations: Vec<Compensation>,
    landscape: Landscape,
    combination_key: String,
}

impl RelationshipAnalysis {
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn compensations(&self) -> &[Compensation] {
        &self.compensations
    }

    pub fn landscape(&self) -> &Landscape {
        &self.landscape
    }

    pub fn combination_key(&self) -> &str {
        &self.combination_key
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Analyzer
// ════════════════════════════════════════════════════════════════════════════════

/// Analyzer for risk/strength relationships.
pub struct RelationshipAnalyzer;

impl RelationshipAnalyzer {
    /// Pairs each top-3 risk with its opposite strength.
    ///
    /// A pair is skipped when the strength score is missing or incomplete;
    /// scores computed from one response set never hit that case because
    /// opposites share their items.
    pub fn relationships(
        top_three: &[RankedDimension],
        strengths: &[StrengthScore],
    ) -> Vec<Relationship> {
        top_three
            .iter()
            .filter_map(|ranked| {
                let strength = ranked.dimension().opposite();
                let strength_index = index_of(strengths, strength)?;
                let gap = ranked.index().gap(strength_index);
                Some(Relationship {
                    rank: ranked.rank(),
                    risk: ranked.dimension(),
                    strength,
                    risk_index: ranked.index(),
                    strength_index,
                    gap,
                    tension: TensionLevel::from_gap(gap),
                })
            })
            .collect()
    }

    /// Flags compensation pairs across top-3 risks x Cornerstone strengths.
    ///
    /// Both thresholds are strict: strength > 80 and risk > 60.
    pub fn detect_compensations(
        top_three: &[RankedDimension],
        strengths: &[StrengthScore],
    ) -> Vec<Compensation> {
        let cornerstones: Vec<(StrengthDimension, TrustIndex)> = strengths
            .iter()
            .filter(|s| s.tier() == Some(StrengthTier::Cornerstone))
            .filter_map(|s| Some((s.dimension(), s.index()?)))
            .collect();

        let mut found = Vec::new();
        for ranked in top_three {
            for (strength, strength_index) in &cornerstones {
                let paired = COMPENSATION_PAIRS
                    .iter()
                    .any(|(s, r)| s == strength && *r == ranked.dimension());
                if paired
                    && strength_index.value() > COMPENSATION_STRENGTH_FLOOR
                    && ranked.index().value() > COMPENSATION_RISK_FLOOR
                {
                    found.push(Compensation {
                        strength: *strength,
                        risk: ranked.dimension(),
                        strength_index: *strength_index,
                        risk_index: ranked.index(),
                    });
                }
            }
        }
        found
    }

    /// Classifies the landscape from all complete risk and strength scores.
    pub fn landscape(risks: &[RiskScore], strengths: &[StrengthScore]) -> Landscape {
        let critical_count = risks
            .iter()
            .filter(|s| s.tier() == Some(SeverityTier::CriticalPressurePoints))
            .count();
        let cornerstone_count = strengths
            .iter()
            .filter(|s| s.tier() == Some(StrengthTier::Cornerstone))
            .count();

        let strength_average = average_index(strengths);
        let challenge_average = average_index(risks);

        Landscape {
            kind: LandscapeKind::classify(critical_count, cornerstone_count),
            critical_count,
            cornerstone_count,
            strength_average,
            challenge_average,
            balance_ratio: strength_average / challenge_average.max(1.0),
        }
    }

    /// Top-3 names with whitespace removed, sorted, joined by `-`.
    pub fn combination_key(top_three: &[RankedDimension]) -> String {
        let mut names: Vec<String> = top_three
            .iter()
            .map(|r| {
                r.dimension()
                    .name()
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect()
            })
            .collect();
        names.sort();
        names.join("-")
    }

    /// Runs every relationship analysis for one submission.
    pub fn analyze(top_three: &[RankedDimension], sheet: &ScoreSheet) -> RelationshipAnalysis {
        RelationshipAnalysis {
            relationships: Self::relationships(top_three, sheet.strengths()),
            compensations: Self::detect_compensations(top_three, sheet.strengths()),
            landscape: Self::landscape(sheet.risks(), sheet.strengths()),
            combination_key: Self::combination_key(top_three),
        }
    }
}

fn index_of(strengths: &[StrengthScore], dimension: StrengthDimension) -> Option<TrustIndex> {
    strengths
        .iter()
        .find(|s| s.dimension() == dimension)
        .and_then(|s| s.index())
}

fn average_index<D: Dimension>(scores: &[DimensionScore<D>]) -> f64 {
    let indices: Vec<f64> = scores
        .iter()
        .filter_map(|s| s.index())
        .map(|i| f64::from(i.value()))
        .collect();
    if indices.is_empty() {
        return 0.0;
    }
    indices.iter().sum::<f64>() / indices.len() as f64
}
