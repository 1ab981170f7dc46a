//! Business listing handlers.
//!
//! - GET /api/v1/businesses/recent - Newest businesses first
//! - GET /api/v1/businesses/{id}/headlines - Headline history of a business

use crate::{
    error::AppError,
    models::{business::RecentBusinessResponse, headline::HeadlineRecord},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use uuid::Uuid;

/// Largest page the recent list will return.
const MAX_RECENT_LIMIT: i64 = 50;

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<i64>,
}

/// List recently analyzed businesses.
///
/// `limit` defaults to the configured size and must be between 1 and 50.
pub async fn list_recent(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> Result<Json<Vec<RecentBusinessResponse>>, AppError> {
    let limit = query.limit.unwrap_or(state.recent_limit);
    if !(1..=MAX_RECENT_LIMIT).contains(&limit) {
        return Err(AppError::InvalidRequest(format!(
            "limit must be between 1 and {MAX_RECENT_LIMIT}"
        )));
    }

    let businesses = state.repository.list_recent_businesses(limit).await?;

    Ok(Json(businesses.into_iter().map(Into::into).collect()))
}

/// Every headline ever stored for a business, newest first. At most one is active.
pub async fn list_headlines(
    State(state): State<AppState>,
    Path(business_id): Path<Uuid>,
) -> Result<Json<Vec<HeadlineRecord>>, AppError> {
    let history = state.repository.list_headlines(business_id).await?;

    Ok(Json(history))
}
