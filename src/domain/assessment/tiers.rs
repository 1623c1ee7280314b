//! Severity and strength tiers.
//!
//! Risk and strength dimensions share the same index thresholds but use
//! different labels for the resulting bands.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

use crate::domain::foundation::TrustIndex;

/// Lowest index in the top band.
pub const TOP_BAND_FLOOR: u8 = 80;

/// Lowest index in the upper band.
pub const UPPER_BAND_FLOOR: u8 = 60;

/// Lowest index in the middle band.
pub const MIDDLE_BAND_FLOOR: u8 = 40;

/// Position of an index on the shared 4-band scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierBand {
    /// 80 and above
    Top,
    /// 60 to 79
    Upper,
    /// 40 to 59
    Middle,
    /// Below 40
    Lower,
}

impl TierBand {
    /// Bands from highest to lowest.
    pub const ALL: [TierBand; 4] = [TierBand::Top, TierBand::Upper, TierBand::Middle, TierBand::Lower];

    pub fn from_index(index: TrustIndex) -> Self {
        match index.value() {
            v if v >= TOP_BAND_FLOOR => TierBand::Top,
            v if v >= UPPER_BAND_FLOOR => TierBand::Upper,
            v if v >= MIDDLE_BAND_FLOOR => TierBand::Middle,
            _ => TierBand::Lower,
        }
    }
}

/// A labelled view over [`TierBand`].
pub trait Tier:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + Serialize + Send + Sync + 'static
{
    fn from_band(band: TierBand) -> Self;

    fn band(&self) -> TierBand;

    fn label(&self) -> &'static str;

    fn from_index(index: TrustIndex) -> Self {
        Self::from_band(TierBand::from_index(index))
    }
}

/// Severity of a risk dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    CriticalPressurePoints,
    ActiveFriction,
    ModerateTension,
    BackgroundStatic,
}

impl Tier for SeverityTier {
    fn from_band(band: TierBand) -> Self {
        match band {
            TierBand::Top => SeverityTier::CriticalPressurePoints,
            TierBand::Upper => SeverityTier::ActiveFriction,
            TierBand::Middle => SeverityTier::ModerateTension,
            TierBand::Lower => SeverityTier::BackgroundStatic,
        }
    }

    fn band(&self) -> TierBand {
        match self {
            SeverityTier::CriticalPressurePoints => TierBand::Top,
            SeverityTier::ActiveFriction => TierBand::Upper,
            SeverityTier::ModerateTension => TierBand::Middle,
            SeverityTier::BackgroundStatic => TierBand::Lower,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SeverityTier::CriticalPressurePoints => "Critical Pressure Points",
            SeverityTier::ActiveFriction => "Active Friction",
            SeverityTier::ModerateTension => "Moderate Tension",
            SeverityTier::BackgroundStatic => "Background Static",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Maturity of a strength dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthTier {
    Cornerstone,
    Solid,
    Emerging,
    Fragile,
}

impl Tier for StrengthTier {
    fn from_band(band: TierBand) -> Self {
        match band {
            TierBand::Top => StrengthTier::Cornerstone,
            TierBand::Upper => StrengthTier::Solid,
            TierBand::Middle => StrengthTier::Emerging,
            TierBand::Lower => StrengthTier::Fragile,
        }
    }

    fn band(&self) -> TierBand {
        match self {
            StrengthTier::Cornerstone => TierBand::Top,
            StrengthTier::Solid => TierBand::Upper,
            StrengthTier::Emerging => TierBand::Middle,
            StrengthTier::Fragile => TierBand::Lower,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            StrengthTier::Cornerstone => "Cornerstone",
            StrengthTier::Solid => "Solid",
            StrengthTier::Emerging => "Emerging",
            StrengthTier::Fragile => "Fragile",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(value: u8) -> TierBand {
        TierBand::from_index(TrustIndex::new(value))
    }

    #[test]
    fn band_thresholds_are_inclusive_floors() {
        assert_eq!(band(100), TierBand::Top);
        assert_eq!(band(80), TierBand::Top);
        assert_eq!(band(79), TierBand::Upper);
        assert_eq!(band(60), TierBand::Upper);
        assert_eq!(band(59), TierBand::Middle);
        assert_eq!(band(40), TierBand::Middle);
        assert_eq!(band(39), TierBand::Lower);
        assert_eq!(band(0), TierBand::Lower);
    }

    #[test]
    fn severity_labels() {
        assert_eq!(
            SeverityTier::from_index(TrustIndex::new(85)).label(),
            "Critical Pressure Points"
        );
        assert_eq!(SeverityTier::from_index(TrustIndex::new(65)).label(), "Active Friction");
        assert_eq!(SeverityTier::from_index(TrustIndex::new(50)).label(), "Moderate Tension");
        assert_eq!(SeverityTier::from_index(TrustIndex::new(10)).label(), "Background Static");
    }

    #[test]
    fn strength_labels() {
        assert_eq!(StrengthTier::from_index(TrustIndex::new(80)).label(), "Cornerstone");
        assert_eq!(StrengthTier::from_index(TrustIndex::new(70)).label(), "Solid");
        assert_eq!(StrengthTier::from_index(TrustIndex::new(45)).label(), "Emerging");
        assert_eq!(StrengthTier::from_index(TrustIndex::new(35)).label(), "Fragile");
    }

    #[test]
    fn band_round_trips_through_tiers() {
        for band in TierBand::ALL {
            assert_eq!(SeverityTier::from_band(band).band(), band);
            assert_eq!(StrengthTier::from_band(band).band(), band);
        }
    }
}
