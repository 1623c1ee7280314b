//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the trust assessment domain.

mod errors;
mod ids;
mod likert;
mod timestamp;
mod trust_index;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SubmissionId;
pub use likert::LikertResponse;
pub use timestamp::Timestamp;
pub use trust_index::{TrustIndex, MAX_RAW_TOTAL, MIN_RAW_TOTAL};
