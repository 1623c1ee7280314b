//! Trust index value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Lowest raw total a five-item dimension can reach.
pub const MIN_RAW_TOTAL: u8 = 5;

/// Highest raw total a five-item dimension can reach.
pub const MAX_RAW_TOTAL: u8 = 25;

/// A normalized dimension score between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustIndex(u8);

impl TrustIndex {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// One hundred.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new index, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Normalizes a five-item raw total: `round(((raw - 5) / 20) * 100)`.
    ///
    /// Each raw point is worth exactly five index points, so the integer
    /// form below never needs rounding.
    pub fn from_raw_total(raw_total: u8) -> Result<Self, ValidationError> {
        if !(MIN_RAW_TOTAL..=MAX_RAW_TOTAL).contains(&raw_total) {
            return Err(ValidationError::out_of_range(
                "raw_total",
                i64::from(MIN_RAW_TOTAL),
                i64::from(MAX_RAW_TOTAL),
                i64::from(raw_total),
            ));
        }
        Ok(Self::from_raw_total_clamped(raw_total))
    }

    /// Normalizes a raw total, clamping it to 5-25 first.
    ///
    /// For totals summed from five validated responses, which are always
    /// in range.
    pub fn from_raw_total_clamped(raw_total: u8) -> Self {
        let steps = u16::from(raw_total.clamp(MIN_RAW_TOTAL, MAX_RAW_TOTAL) - MIN_RAW_TOTAL);
        let span = u16::from(MAX_RAW_TOTAL - MIN_RAW_TOTAL);
        Self((steps * 100 / span) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Absolute distance between two indices.
    pub fn gap(&self, other: TrustIndex) -> u8 {
        self.0.abs_diff(other.0)
    }
}

impl Default for TrustIndex {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for TrustIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_new_clamps_to_100() {
        assert_eq!(TrustIndex::new(50).value(), 50);
        assert_eq!(TrustIndex::new(101).value(), 100);
        assert_eq!(TrustIndex::new(255).value(), 100);
    }

    #[test]
    fn from_raw_total_hits_both_ends() {
        assert_eq!(TrustIndex::from_raw_total(5).unwrap(), TrustIndex::ZERO);
        assert_eq!(TrustIndex::from_raw_total(25).unwrap(), TrustIndex::HUNDRED);
    }

    #[test]
    fn from_raw_total_neutral_is_fifty() {
        assert_eq!(TrustIndex::from_raw_total(15).unwrap().value(), 50);
    }

    #[test]
    fn from_raw_total_steps_by_five() {
        assert_eq!(TrustIndex::from_raw_total(6).unwrap().value(), 5);
        assert_eq!(TrustIndex::from_raw_total(21).unwrap().value(), 80);
        assert_eq!(TrustIndex::from_raw_total(22).unwrap().value(), 85);
    }

    #[test]
    fn from_raw_total_rejects_out_of_range() {
        match TrustIndex::from_raw_total(26) {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "raw_total");
                assert_eq!(min, 5);
                assert_eq!(max, 25);
                assert_eq!(actual, 26);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
        assert!(TrustIndex::from_raw_total(4).is_err());
    }

    #[test]
    fn clamped_normalization_matches_checked_in_range() {
        for raw in MIN_RAW_TOTAL..=MAX_RAW_TOTAL {
            assert_eq!(
                TrustIndex::from_raw_total_clamped(raw),
                TrustIndex::from_raw_total(raw).unwrap()
            );
        }
        assert_eq!(TrustIndex::from_raw_total_clamped(0), TrustIndex::ZERO);
        assert_eq!(TrustIndex::from_raw_total_clamped(30), TrustIndex::HUNDRED);
    }

    #[test]
    fn gap_is_symmetric() {
        let a = TrustIndex::new(85);
        let b = TrustIndex::new(40);
        assert_eq!(a.gap(b), 45);
        assert_eq!(b.gap(a), 45);
    }

    #[test]
    fn index_serializes_as_number() {
        let json = serde_json::to_string(&TrustIndex::new(42)).unwrap();
        assert_eq!(json, "42");
    }
}
