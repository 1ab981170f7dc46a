//! SEO headline records.
//!
//! A row with `business_id = NULL` is a reusable template containing the
//! `{business_name}` and `{location}` tokens. Rows with a business id are that
//! business's headline history; at most one of them is active.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Represents a row of the `seo_headlines` table.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct HeadlineRecord {
    pub id: Uuid,

    /// Owning business, or `None` for a template
    pub business_id: Option<Uuid>,

    pub headline: String,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,
}

impl HeadlineRecord {
    pub fn is_template(&self) -> bool {
        self.business_id.is_none()
    }
}

/// A headline to be appended to a business's history as the active one.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHeadline {
    pub business_id: Uuid,
    pub headline: String,
}
