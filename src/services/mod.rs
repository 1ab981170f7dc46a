//! Business logic services.
//!
//! Services contain the profile pipeline separated from HTTP handlers.

pub mod analytics;
pub mod headline_generator;
pub mod notifier;
pub mod profile_orchestrator;
pub mod random;
