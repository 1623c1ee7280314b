//! Trust Assessment - Team trust diagnostic engine
//!
//! Scores a 45-item Likert survey into nine risk and nine strength
//! dimensions, ranks the most pressing risks, and analyzes how risks and
//! strengths relate, producing an immutable report plus a narrative payload.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
