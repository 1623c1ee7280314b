//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ScoringObserver` - Stage notifications from the scoring pipeline

mod scoring_observer;

pub use scoring_observer::{NoopObserver, ScoringObserver};
