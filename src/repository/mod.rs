//! Persistence of businesses and their headline history.
//!
//! The orchestrator only talks to [`BusinessRepository`]. Production uses the
//! PostgreSQL implementation; tests use the in-memory store or a mock.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::business::{Business, NewBusiness};
use crate::models::headline::{HeadlineRecord, NewHeadline};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgBusinessRepository;

/// Store of business records and SEO headlines, addressed by name + location.
///
/// Read failures surface as `AppError::Lookup`, writes as `AppError::Insert`
/// or `AppError::Update`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// Exact match on `(name, location)`.
    async fn find_business(&self, name: &str, location: &str)
    -> Result<Option<Business>, AppError>;

    /// Store a new business and return it with its assigned id.
    async fn insert_business(&self, business: NewBusiness) -> Result<Business, AppError>;

    /// The most recently created active headline of a business.
    async fn find_active_headline(
        &self,
        business_id: Uuid,
    ) -> Result<Option<HeadlineRecord>, AppError>;

    /// Active template rows (no business id).
    async fn find_templates(&self) -> Result<Vec<HeadlineRecord>, AppError>;

    /// Flip every active headline of a business to inactive. Returns the number of rows changed.
    async fn deactivate_headlines(&self, business_id: Uuid) -> Result<u64, AppError>;

    /// Append a headline as the active one for its business.
    async fn insert_headline(&self, headline: NewHeadline) -> Result<HeadlineRecord, AppError>;

    /// Deactivate the current headlines of a business and append `headline` as
    /// the active one, all or nothing. Returns the new record and the number of
    /// rows deactivated.
    async fn replace_active_headline(
        &self,
        headline: NewHeadline,
    ) -> Result<(HeadlineRecord, u64), AppError>;

    /// Newest businesses first.
    async fn list_recent_businesses(&self, limit: i64) -> Result<Vec<Business>, AppError>;

    /// Full headline history of a business, newest first.
    async fn list_headlines(&self, business_id: Uuid) -> Result<Vec<HeadlineRecord>, AppError>;

    /// Connectivity check used by the health endpoint.
    async fn ping(&self) -> Result<(), AppError>;
}
