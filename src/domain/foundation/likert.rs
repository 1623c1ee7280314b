//! Likert response value object (1 to 5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A single five-point agreement response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum LikertResponse {
    StronglyDisagree = 1,
    Disagree = 2,
    Neutral = 3,
    Agree = 4,
    StronglyAgree = 5,
}

impl LikertResponse {
    /// Creates a response from any integer, returning error if off the scale.
    pub fn try_from_value(value: i64) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(LikertResponse::StronglyDisagree),
            2 => Ok(LikertResponse::Disagree),
            3 => Ok(LikertResponse::Neutral),
            4 => Ok(LikertResponse::Agree),
            5 => Ok(LikertResponse::StronglyAgree),
            _ => Err(ValidationError::out_of_range("response", 1, 5, value)),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the value reflected across the scale midpoint (`6 - value`).
    pub fn reflected(&self) -> u8 {
        6 - self.value()
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            LikertResponse::StronglyDisagree => "Strongly Disagree",
            LikertResponse::Disagree => "Disagree",
            LikertResponse::Neutral => "Neutral",
            LikertResponse::Agree => "Agree",
            LikertResponse::StronglyAgree => "Strongly Agree",
        }
    }
}

impl TryFrom<u8> for LikertResponse {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_value(i64::from(value))
    }
}

impl From<LikertResponse> for u8 {
    fn from(response: LikertResponse) -> Self {
        response.value()
    }
}

impl fmt::Display for LikertResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
