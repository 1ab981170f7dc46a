//! Profile HTTP handlers.
//!
//! This module implements the dashboard endpoints:
//! - GET /api/v1/profile - Current profile, analytics and state
//! - POST /api/v1/profile - Submit a business name and location
//! - POST /api/v1/profile/headline - Regenerate the displayed headline

use crate::{
    error::AppError,
    models::business::{BusinessQuery, SubmitBusinessRequest},
    services::profile_orchestrator::ProfileView,
    state::AppState,
};
use axum::{Json, extract::State};

/// Current orchestrator snapshot.
///
/// Does not wait for the orchestrator lock: while a submission or regeneration
/// runs, the state reads `submitting` or `regenerating` and the previous profile
/// is still shown.
pub async fn get_profile(State(state): State<AppState>) -> Json<ProfileView> {
    Json(state.profile.borrow().clone())
}

/// Submit a business.
///
/// # Endpoint
///
/// `POST /api/v1/profile`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Cake & Co",
///   "location": "Mumbai"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: the displayed profile with analytics
/// - **Error (400)**: name or location blank after trimming
/// - **Error (500)**: lookup, insert or headline failure; the previous profile stays displayed
///
/// ```json
/// {
///   "state": "displaying",
///   "profile": {
///     "id": "550e8400-e29b-41d4-a716-446655440000",
///     "name": "Cake & Co",
///     "location": "Mumbai",
///     "rating": 4.3,
///     "reviews": 300,
///     "headline": "Cake & Co: Mumbai's Most Trusted Local Favorite",
///     "created_at": "2025-12-20T10:00:00Z"
///   },
///   "analytics": { "performance_score": 93, "competitive_position": "StrongCompetitor", ... },
///   "refresh_counter": 1
/// }
/// ```
pub async fn submit_profile(
    State(state): State<AppState>,
    Json(request): Json<SubmitBusinessRequest>,
) -> Result<Json<ProfileView>, AppError> {
    // Reject blank input before it reaches the orchestrator
    let query = BusinessQuery::try_from(request)?;

    let view = state.orchestrator.lock().await.submit(&query).await?;

    Ok(Json(view))
}

/// Regenerate the headline of the displayed profile.
///
/// # Response
///
/// - **Success (200 OK)**: the profile with its new headline
/// - **Error (409)**: no profile is displayed
/// - **Error (500)**: headline could not be generated; the old one is kept
pub async fn regenerate_headline(
    State(state): State<AppState>,
) -> Result<Json<ProfileView>, AppError> {
    let view = state.orchestrator.lock().await.regenerate().await?;

    Ok(Json(view))
}
