//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Delegates to the orchestrator or repository
//! 3. Returns HTTP response (JSON, status code)

/// Business listing endpoints
pub mod businesses;
/// Health check endpoint
pub mod health;
/// Notification feed endpoint
pub mod notifications;
/// Profile submission and regeneration endpoints
pub mod profile;
