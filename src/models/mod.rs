//! Data models representing database entities and API payloads.

/// Derived analytics returned alongside a profile
pub mod analytics;
/// Business records and profiles
pub mod business;
/// SEO headline records and templates
pub mod headline;
