//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum REST API
//! - `narrative` - Report payload for narrative generation
//! - `observability` - `ScoringObserver` backed by `tracing`

pub mod http;
pub mod narrative;
pub mod observability;

pub use http::{build_router, AssessmentAppState};
pub use narrative::{NarrativePayload, ParticipantInfo};
pub use observability::TracingObserver;
