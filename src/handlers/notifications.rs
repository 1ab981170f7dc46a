//! Notification feed handler.

use crate::{services::notifier::Notification, state::AppState};
use axum::{Json, extract::State};

/// Return and clear pending notifications, oldest first.
pub async fn drain_notifications(State(state): State<AppState>) -> Json<Vec<Notification>> {
    Json(state.notifications.drain())
}
