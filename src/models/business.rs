//! Business data models and API request/response types.
//!
//! This module defines:
//! - `Business`: Database entity representing a stored business
//! - `NewBusiness`: Values needed to insert a business
//! - `BusinessProfile`: The profile shown to the user (business + headline)
//! - `SubmitBusinessRequest` / `BusinessQuery`: Form input and its validated form
//! - `RecentBusinessResponse`: Entry of the recent-business list

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::analytics::RatingLabel;
use crate::services::analytics::rating_label;

/// Represents a business record from the database.
///
/// # Database Table
///
/// Maps to the `businesses` table, unique on `(name, location)`.
/// Rating and reviews are written once, when the business is first submitted.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct Business {
    pub id: Uuid,

    pub name: String,

    pub location: String,

    /// Star rating, one decimal place, in `[0.0, 5.0]`
    pub rating: f64,

    /// Number of reviews, never negative (CHECK constraint)
    pub reviews: i32,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Values for a business that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBusiness {
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub reviews: i32,
}

/// The profile displayed for a business.
///
/// `rating` and `reviews` are always present together once a profile is loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessProfile {
    pub id: Option<Uuid>,
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub reviews: i32,
    pub headline: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl BusinessProfile {
    /// Assemble a profile from a stored business and its resolved headline.
    pub fn from_business(business: Business, headline: String) -> Self {
        Self {
            id: Some(business.id),
            name: business.name,
            location: business.location,
            rating: business.rating,
            reviews: business.reviews,
            headline,
            created_at: Some(business.created_at),
        }
    }
}

/// Request body for submitting a business.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Cake & Co",
///   "location": "Mumbai"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct SubmitBusinessRequest {
    pub name: String,
    pub location: String,
}

/// A submission whose name and location are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessQuery {
    name: String,
    location: String,
}

impl BusinessQuery {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Result<Self, AppError> {
        Self::try_from(SubmitBusinessRequest {
            name: name.into(),
            location: location.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

impl TryFrom<SubmitBusinessRequest> for BusinessQuery {
    type Error = AppError;

    fn try_from(request: SubmitBusinessRequest) -> Result<Self, Self::Error> {
        let name = request.name.trim();
        let location = request.location.trim();

        if name.is_empty() {
            return Err(AppError::InvalidRequest(
                "Business name is required".to_string(),
            ));
        }
        if location.is_empty() {
            return Err(AppError::InvalidRequest("Location is required".to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            location: location.to_string(),
        })
    }
}

/// One entry of the recent-business list, newest first.
#[derive(Debug, Serialize)]
pub struct RecentBusinessResponse {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub reviews: i32,
    pub rating_label: RatingLabel,
    pub created_at: DateTime<Utc>,
}

impl From<Business> for RecentBusinessResponse {
    fn from(business: Business) -> Self {
        Self {
            rating_label: rating_label(business.rating),
            id: business.id,
            name: business.name,
            location: business.location,
            rating: business.rating,
            reviews: business.reviews,
            created_at: business.created_at,
        }
    }
}
