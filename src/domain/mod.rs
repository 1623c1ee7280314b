//! Domain layer containing the scoring logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `assessment` - Survey scoring, ranking, relationships, and the report

pub mod assessment;
pub mod foundation;
