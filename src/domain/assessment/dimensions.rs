//! Risk and strength dimension definitions.
//!
//! The nine risk dimensions and their nine opposite strength dimensions are a
//! closed set. Each pair owns the same block of five consecutive survey items:
//! dimension *i* owns items `5i..5i+4`. All lookup tables (categories,
//! priorities, opposites, descriptions) live on the enums so rule changes stay
//! in one place.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::ops::Range;

use super::tiers::{SeverityTier, StrengthTier, Tier};
use crate::domain::foundation::LikertResponse;

/// Number of risk dimensions (and of strength dimensions).
pub const DIMENSION_COUNT: usize = 9;

/// Number of survey items assigned to each dimension.
pub const ITEMS_PER_DIMENSION: usize = 5;

/// The contiguous block of five survey items a dimension is scored from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ItemBlock {
    start: usize,
}

impl ItemBlock {
    /// Block owned by the dimension at `ordinal` in canonical order.
    pub const fn for_dimension(ordinal: usize) -> Self {
        Self {
            start: ordinal * ITEMS_PER_DIMENSION,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Item indices covered by this block.
    pub fn indices(&self) -> Range<usize> {
        self.start..self.start + ITEMS_PER_DIMENSION
    }

    pub fn contains(&self, item: usize) -> bool {
        self.indices().contains(&item)
    }
}

/// Which way a dimension reads the survey items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Risk,
    Strength,
}

impl Orientation {
    /// Per-item contribution to a dimension total.
    ///
    /// Risk reads a normal item as-is and reflects a reverse-scored one;
    /// strength does the opposite. The two are mirror images, so a complete
    /// risk/strength pair always sums to 100 after normalization.
    pub fn scored_value(self, response: LikertResponse, reverse_scored: bool) -> u8 {
        match (self, reverse_scored) {
            (Orientation::Risk, false) | (Orientation::Strength, true) => response.value(),
            (Orientation::Risk, true) | (Orientation::Strength, false) => response.reflected(),
        }
    }
}

/// Behaviour shared by risk and strength dimensions.
pub trait Dimension:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + Serialize + Send + Sync + 'static
{
    /// Tier vocabulary used when bucketing this dimension's scores.
    type Tier: Tier;

    /// How items are read when scoring this dimension.
    const ORIENTATION: Orientation;

    /// Every dimension of this kind, in canonical order.
    fn all() -> &'static [Self];

    /// Position in canonical order (0-8).
    fn ordinal(&self) -> usize;

    fn name(&self) -> &'static str;

    fn item_block(&self) -> ItemBlock {
        ItemBlock::for_dimension(self.ordinal())
    }

    /// Placement relative to `other` when both have the same index.
    ///
    /// `Less` means `self` is listed first.
    fn precedence(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Categories
// ════════════════════════════════════════════════════════════════════════════════

/// Grouping of risk dimensions by the way they erode trust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Contaminate,
    Control,
    Conceal,
    Collapse,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Contaminate,
        Category::Control,
        Category::Conceal,
        Category::Collapse,
    ];

    /// Secondary ranking key. Higher wins.
    pub fn priority(&self) -> u8 {
        match self {
            Category::Contaminate => 4,
            Category::Control => 3,
            Category::Conceal => 2,
            Category::Collapse => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Contaminate => "CONTAMINATE",
            Category::Control => "CONTROL",
            Category::Conceal => "CONCEAL",
            Category::Collapse => "COLLAPSE",
        }
    }

    /// Insight used when all three top risks share this category.
    pub fn deep_pattern_insight(&self) -> &'static str {
        match self {
            Category::Contaminate => {
                "Trust is being eroded by the emotional climate itself. Negativity and \
                 volatility spread from person to person, so repairing the atmosphere \
                 comes before any process change."
            }
            Category::Control => {
                "Trust is being eroded by a grip on power and information. People are \
                 holding on to decisions, work, and knowledge, which signals that they \
                 do not yet believe others will handle them well."
            }
            Category::Conceal => {
                "Trust is being eroded by what stays unsaid. People are guarding their \
                 real views, ideas, and risks, so problems surface late and \
                 conversations stay on the surface."
            }
            Category::Collapse => {
                "Trust is being eroded by broken commitments. Promises that are not \
                 kept teach the team to discount what is said and to plan around \
                 each other."
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Risk dimensions
// ════════════════════════════════════════════════════════════════════════════════

/// A named pattern of team-trust erosion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskDimension {
    Inauthenticity,
    UndercurrentOfNegativity,
    LackOfFollowThrough,
    ReluctanceToTakeOnChallenges,
    ExcessiveSelfReliance,
    Micromanaging,
    EmotionalVolatility,
    InformationHoarding,
    ClosedMindedness,
}

impl RiskDimension {
    /// Canonical order; the position also fixes the item block.
    pub const ALL: [RiskDimension; DIMENSION_COUNT] = [
        RiskDimension::Inauthenticity,
        RiskDimension::UndercurrentOfNegativity,
        RiskDimension::LackOfFollowThrough,
        RiskDimension::ReluctanceToTakeOnChallenges,
        RiskDimension::ExcessiveSelfReliance,
        RiskDimension::Micromanaging,
        RiskDimension::EmotionalVolatility,
        RiskDimension::InformationHoarding,
        RiskDimension::ClosedMindedness,
    ];

    pub fn category(&self) -> Category {
        match self {
            RiskDimension::Inauthenticity => Category::Conceal,
            RiskDimension::UndercurrentOfNegativity => Category::Contaminate,
            RiskDimension::LackOfFollowThrough => Category::Collapse,
            RiskDimension::ReluctanceToTakeOnChallenges => Category::Conceal,
            RiskDimension::ExcessiveSelfReliance => Category::Control,
            RiskDimension::Micromanaging => Category::Control,
            RiskDimension::EmotionalVolatility => Category::Contaminate,
            RiskDimension::InformationHoarding => Category::Control,
            RiskDimension::ClosedMindedness => Category::Conceal,
        }
    }

    /// Tertiary ranking key within the category. Higher wins; 0 when the
    /// category has no table.
    pub fn within_category_priority(&self) -> u8 {
        match self {
            RiskDimension::EmotionalVolatility => 2,
            RiskDimension::UndercurrentOfNegativity => 1,

            RiskDimension::Micromanaging => 3,
            RiskDimension::InformationHoarding => 2,
            RiskDimension::ExcessiveSelfReliance => 1,

            RiskDimension::Inauthenticity => 3,
            RiskDimension::ClosedMindedness => 2,
            RiskDimension::ReluctanceToTakeOnChallenges => 1,

            RiskDimension::LackOfFollowThrough => 0,
        }
    }

    /// The strength dimension scored from the same five items.
    pub fn opposite(&self) -> StrengthDimension {
        StrengthDimension::ALL[self.ordinal()]
    }

    /// Short narrative-selection code (`R1`..`R9`).
    pub fn code(&self) -> &'static str {
        match self {
            RiskDimension::Inauthenticity => "R1",
            RiskDimension::UndercurrentOfNegativity => "R2",
            RiskDimension::LackOfFollowThrough => "R3",
            RiskDimension::ReluctanceToTakeOnChallenges => "R4",
            RiskDimension::ExcessiveSelfReliance => "R5",
            RiskDimension::Micromanaging => "R6",
            RiskDimension::EmotionalVolatility => "R7",
            RiskDimension::InformationHoarding => "R8",
            RiskDimension::ClosedMindedness => "R9",
        }
    }
}

impl Dimension for RiskDimension {
    type Tier = SeverityTier;

    const ORIENTATION: Orientation = Orientation::Risk;

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn ordinal(&self) -> usize {
        *self as usize
    }

    fn name(&self) -> &'static str {
        match self {
            RiskDimension::Inauthenticity => "Inauthenticity",
            RiskDimension::UndercurrentOfNegativity => "Undercurrent of Negativity",
            RiskDimension::LackOfFollowThrough => "Lack of Follow-Through",
            RiskDimension::ReluctanceToTakeOnChallenges => "Reluctance to Take on Challenges",
            RiskDimension::ExcessiveSelfReliance => "Excessive Self-Reliance",
            RiskDimension::Micromanaging => "Micromanaging",
            RiskDimension::EmotionalVolatility => "Emotional Volatility",
            RiskDimension::InformationHoarding => "Information Hoarding",
            RiskDimension::ClosedMindedness => "Closed-Mindedness",
        }
    }

    /// Category priority, then within-category priority, then canonical order.
    fn precedence(&self, other: &Self) -> Ordering {
        other
            .category()
            .priority()
            .cmp(&self.category().priority())
            .then_with(|| {
                other
                    .within_category_priority()
                    .cmp(&self.within_category_priority())
            })
            .then_with(|| self.ordinal().cmp(&other.ordinal()))
    }
}

impl fmt::Display for RiskDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Strength dimensions
// ════════════════════════════════════════════════════════════════════════════════

/// The positively framed counterpart of a risk dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthDimension {
    AuthenticPresence,
    ConstructiveEnergy,
    ReliableExecution,
    CourageousEngagement,
    CollaborativePower,
    EmpoweredAutonomy,
    EmotionalWisdom,
    TransparentSharing,
    CuriousOpenness,
}

impl StrengthDimension {
    /// Canonical order, aligned with [`RiskDimension::ALL`].
    pub const ALL: [StrengthDimension; DIMENSION_COUNT] = [
        StrengthDimension::AuthenticPresence,
        StrengthDimension::ConstructiveEnergy,
        StrengthDimension::ReliableExecution,
        StrengthDimension::CourageousEngagement,
        StrengthDimension::CollaborativePower,
        StrengthDimension::EmpoweredAutonomy,
        StrengthDimension::EmotionalWisdom,
        StrengthDimension::TransparentSharing,
        StrengthDimension::CuriousOpenness,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            StrengthDimension::AuthenticPresence => {
                "People show up as themselves and say what they actually think."
            }
            StrengthDimension::ConstructiveEnergy => {
                "Frustrations are raised directly and turned into improvements."
            }
            StrengthDimension::ReliableExecution => {
                "Commitments are kept, so others can plan around them."
            }
            StrengthDimension::CourageousEngagement => {
                "People volunteer for hard problems and stretch assignments."
            }
            StrengthDimension::CollaborativePower => {
                "People ask for help early and pool their strengths."
            }
            StrengthDimension::EmpoweredAutonomy => {
                "Work is delegated with real ownership and room to decide."
            }
            StrengthDimension::EmotionalWisdom => {
                "Pressure is handled calmly and reactions stay proportionate."
            }
            StrengthDimension::TransparentSharing => {
                "Information flows freely to the people who need it."
            }
            StrengthDimension::CuriousOpenness => {
                "New ideas and dissenting views are explored before they are judged."
            }
        }
    }

    /// The risk dimension scored from the same five items.
    pub fn opposite(&self) -> RiskDimension {
        RiskDimension::ALL[self.ordinal()]
    }
}

impl Dimension for StrengthDimension {
    type Tier = StrengthTier;

    const ORIENTATION: Orientation = Orientation::Strength;

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn ordinal(&self) -> usize {
        *self as usize
    }

    fn name(&self) -> &'static str {
        match self {
            StrengthDimension::AuthenticPresence => "Authentic Presence",
            StrengthDimension::ConstructiveEnergy => "Constructive Energy",
            StrengthDimension::ReliableExecution => "Reliable Execution",
            StrengthDimension::CourageousEngagement => "Courageous Engagement",
            StrengthDimension::CollaborativePower => "Collaborative Power",
            StrengthDimension::EmpoweredAutonomy => "Empowered Autonomy",
            StrengthDimension::EmotionalWisdom => "Emotional Wisdom",
            StrengthDimension::TransparentSharing => "Transparent Sharing",
            StrengthDimension::CuriousOpenness => "Curious Openness",
        }
    }
}

impl fmt::Display for StrengthDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
