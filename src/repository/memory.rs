//! In-memory [`BusinessRepository`] for tests.
//!
//! Timestamps advance by one millisecond per write so "newest first" ordering is
//! deterministic. Individual operations can be switched to fail, and a headline
//! replacement that fails leaves the stored rows untouched.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::Notify;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::business::{Business, NewBusiness};
use crate::models::headline::{HeadlineRecord, NewHeadline};
use crate::repository::BusinessRepository;

#[derive(Debug, Default)]
struct Tables {
    businesses: Vec<Business>,
    headlines: Vec<HeadlineRecord>,
    ticks: i64,
}

impl Tables {
    fn now(&mut self) -> DateTime<Utc> {
        self.ticks += 1;
        DateTime::from_timestamp(1_700_000_000, 0).unwrap() + Duration::milliseconds(self.ticks)
    }

    fn deactivate(&mut self, business_id: Uuid) -> u64 {
        let mut changed = 0;
        for headline in self
            .headlines
            .iter_mut()
            .filter(|h| h.business_id == Some(business_id) && h.is_active)
        {
            headline.is_active = false;
            changed += 1;
        }
        changed
    }

    fn push_active(&mut self, headline: NewHeadline) -> HeadlineRecord {
        let created_at = self.now();
        let record = HeadlineRecord {
            id: Uuid::new_v4(),
            business_id: Some(headline.business_id),
            headline: headline.headline,
            is_active: true,
            created_at,
        };
        self.headlines.push(record.clone());
        record
    }
}

#[derive(Debug, Default)]
pub struct InMemoryRepository {
    tables: Mutex<Tables>,
    fail_lookups: AtomicBool,
    fail_inserts: AtomicBool,
    fail_deactivations: AtomicBool,
    fail_headline_inserts: AtomicBool,
    lookup_gate: Mutex<Option<Arc<Notify>>>,
}

fn injected() -> sqlx::Error {
    sqlx::Error::Protocol("injected failure".to_string())
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-loaded with active templates.
    pub fn with_templates(templates: &[&str]) -> Self {
        let repository = Self::new();
        {
            let mut tables = repository.tables.lock().unwrap();
            for template in templates {
                let created_at = tables.now();
                tables.headlines.push(HeadlineRecord {
                    id: Uuid::new_v4(),
                    business_id: None,
                    headline: template.to_string(),
                    is_active: true,
                    created_at,
                });
            }
        }
        repository
    }

    pub fn fail_lookups(&self, fail: bool) {
        self.fail_lookups.store(fail, Ordering::SeqCst);
    }

    pub fn fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }

    pub fn fail_deactivations(&self, fail: bool) {
        self.fail_deactivations.store(fail, Ordering::SeqCst);
    }

    pub fn fail_headline_inserts(&self, fail: bool) {
        self.fail_headline_inserts.store(fail, Ordering::SeqCst);
    }

    /// Park the next `find_business` call until the returned handle is notified.
    pub fn hold_next_lookup(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.lookup_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn business_count(&self) -> usize {
        self.tables.lock().unwrap().businesses.len()
    }

    /// Every headline row belonging to a business, in insertion order.
    pub fn headlines_for(&self, business_id: Uuid) -> Vec<HeadlineRecord> {
        self.tables
            .lock()
            .unwrap()
            .headlines
            .iter()
            .filter(|h| h.business_id == Some(business_id))
            .cloned()
            .collect()
    }

    fn check_lookup(&self) -> Result<(), AppError> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(AppError::Lookup(injected()));
        }
        Ok(())
    }

    fn check_deactivate(&self) -> Result<(), AppError> {
        if self.fail_deactivations.load(Ordering::SeqCst) {
            return Err(AppError::Update(injected()));
        }
        Ok(())
    }

    fn check_headline_insert(&self) -> Result<(), AppError> {
        if self.fail_headline_inserts.load(Ordering::SeqCst) {
            return Err(AppError::Insert(injected()));
        }
        Ok(())
    }
}

#[async_trait]
impl BusinessRepository for InMemoryRepository {
    async fn find_business(
        &self,
        name: &str,
        location: &str,
    ) -> Result<Option<Business>, AppError> {
        let gate = self.lookup_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.check_lookup()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .businesses
            .iter()
            .find(|b| b.name == name && b.location == location)
            .cloned())
    }

    async fn insert_business(&self, business: NewBusiness) -> Result<Business, AppError> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(AppError::Insert(injected()));
        }
        let mut tables = self.tables.lock().unwrap();
        let created_at = tables.now();
        let stored = Business {
            id: Uuid::new_v4(),
            name: business.name,
            location: business.location,
            rating: business.rating,
            reviews: business.reviews,
            created_at,
            updated_at: created_at,
        };
        tables.businesses.push(stored.clone());
        Ok(stored)
    }

    async fn find_active_headline(
        &self,
        business_id: Uuid,
    ) -> Result<Option<HeadlineRecord>, AppError> {
        self.check_lookup()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .headlines
            .iter()
            .filter(|h| h.business_id == Some(business_id) && h.is_active)
            .max_by_key(|h| h.created_at)
            .cloned())
    }

    async fn find_templates(&self) -> Result<Vec<HeadlineRecord>, AppError> {
        self.check_lookup()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .headlines
            .iter()
            .filter(|h| h.is_template() && h.is_active)
            .cloned()
            .collect())
    }

    async fn deactivate_headlines(&self, business_id: Uuid) -> Result<u64, AppError> {
        self.check_deactivate()?;
        Ok(self.tables.lock().unwrap().deactivate(business_id))
    }

    async fn insert_headline(&self, headline: NewHeadline) -> Result<HeadlineRecord, AppError> {
        self.check_headline_insert()?;
        Ok(self.tables.lock().unwrap().push_active(headline))
    }

    async fn replace_active_headline(
        &self,
        headline: NewHeadline,
    ) -> Result<(HeadlineRecord, u64), AppError> {
        self.check_deactivate()?;
        self.check_headline_insert()?;

        let mut tables = self.tables.lock().unwrap();
        let deactivated = tables.deactivate(headline.business_id);
        let record = tables.push_active(headline);
        Ok((record, deactivated))
    }

    async fn list_recent_businesses(&self, limit: i64) -> Result<Vec<Business>, AppError> {
        self.check_lookup()?;
        let tables = self.tables.lock().unwrap();
        let mut businesses = tables.businesses.clone();
        businesses.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        businesses.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(businesses)
    }

    async fn list_headlines(&self, business_id: Uuid) -> Result<Vec<HeadlineRecord>, AppError> {
        self.check_lookup()?;
        let mut history = self.headlines_for(business_id);
        history.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(history)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_lookup()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn stored_business(repository: &InMemoryRepository) -> Business {
        repository
            .insert_business(NewBusiness {
                name: "Acme".to_string(),
                location: "Oslo".to_string(),
                rating: 4.0,
                reviews: 120,
            })
            .await
            .unwrap()
    }

    fn headline(business_id: Uuid, text: &str) -> NewHeadline {
        NewHeadline {
            business_id,
            headline: text.to_string(),
        }
    }

    #[tokio::test]
    async fn separate_writes_deactivate_then_append() {
        let repository = InMemoryRepository::new();
        let business = stored_business(&repository).await;

        repository
            .insert_headline(headline(business.id, "first"))
            .await
            .unwrap();
        assert_eq!(repository.deactivate_headlines(business.id).await.unwrap(), 1);
        assert!(
            repository
                .find_active_headline(business.id)
                .await
                .unwrap()
                .is_none()
        );

        repository
            .insert_headline(headline(business.id, "second"))
            .await
            .unwrap();
        let active = repository.find_active_headline(business.id).await.unwrap();
        assert_eq!(active.unwrap().headline, "second");
    }

    #[tokio::test]
    async fn replace_swaps_active_headline() {
        let repository = InMemoryRepository::new();
        let business = stored_business(&repository).await;

        let (_, deactivated) = repository
            .replace_active_headline(headline(business.id, "first"))
            .await
            .unwrap();
        assert_eq!(deactivated, 0);

        let (record, deactivated) = repository
            .replace_active_headline(headline(business.id, "second"))
            .await
            .unwrap();
        assert_eq!(deactivated, 1);
        assert!(record.is_active);

        let history = repository.list_headlines(business.id).await.unwrap();
        let flags: Vec<_> = history.iter().map(|h| (h.headline.as_str(), h.is_active)).collect();
        assert_eq!(flags, vec![("second", true), ("first", false)]);
    }

    #[tokio::test]
    async fn failed_replace_leaves_rows_untouched() {
        let repository = InMemoryRepository::new();
        let business = stored_business(&repository).await;
        repository
            .replace_active_headline(headline(business.id, "kept"))
            .await
            .unwrap();

        repository.fail_headline_inserts(true);
        let err = repository
            .replace_active_headline(headline(business.id, "lost"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Insert(_)));

        let history = repository.headlines_for(business.id);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].headline, "kept");
        assert!(history[0].is_active);
    }
}
