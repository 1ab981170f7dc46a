//! PostgreSQL implementation of [`BusinessRepository`].

use async_trait::async_trait;
use sqlx::PgExecutor;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::AppError;
use crate::models::business::{Business, NewBusiness};
use crate::models::headline::{HeadlineRecord, NewHeadline};
use crate::repository::BusinessRepository;

#[derive(Debug, Clone)]
pub struct PgBusinessRepository {
    pool: DbPool,
}

impl PgBusinessRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BusinessRepository for PgBusinessRepository {
    async fn find_business(
        &self,
        name: &str,
        location: &str,
    ) -> Result<Option<Business>, AppError> {
        sqlx::query_as::<_, Business>(
            r#"
            SELECT id, name, location, rating, reviews, created_at, updated_at
            FROM businesses
            WHERE name = $1 AND location = $2
            "#,
        )
        .bind(name)
        .bind(location)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Lookup)
    }

    async fn insert_business(&self, business: NewBusiness) -> Result<Business, AppError> {
        sqlx::query_as::<_, Business>(
            r#"
            INSERT INTO businesses (name, location, rating, reviews)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, location, rating, reviews, created_at, updated_at
            "#,
        )
        .bind(business.name)
        .bind(business.location)
        .bind(business.rating)
        .bind(business.reviews)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Insert)
    }

    async fn find_active_headline(
        &self,
        business_id: Uuid,
    ) -> Result<Option<HeadlineRecord>, AppError> {
        sqlx::query_as::<_, HeadlineRecord>(
            r#"
            SELECT id, business_id, headline, is_active, created_at
            FROM seo_headlines
            WHERE business_id = $1 AND is_active = true
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(business_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Lookup)
    }

    async fn find_templates(&self) -> Result<Vec<HeadlineRecord>, AppError> {
        sqlx::query_as::<_, HeadlineRecord>(
            r#"
            SELECT id, business_id, headline, is_active, created_at
            FROM seo_headlines
            WHERE business_id IS NULL AND is_active = true
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Lookup)
    }

    async fn deactivate_headlines(&self, business_id: Uuid) -> Result<u64, AppError> {
        deactivate_active(&self.pool, business_id)
            .await
            .map_err(AppError::Update)
    }

    async fn insert_headline(&self, headline: NewHeadline) -> Result<HeadlineRecord, AppError> {
        insert_active(&self.pool, headline)
            .await
            .map_err(AppError::Insert)
    }

    async fn replace_active_headline(
        &self,
        headline: NewHeadline,
    ) -> Result<(HeadlineRecord, u64), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Update)?;

        // Dropping `tx` on an early return rolls both statements back
        let deactivated = deactivate_active(&mut *tx, headline.business_id)
            .await
            .map_err(AppError::Update)?;
        let record = insert_active(&mut *tx, headline)
            .await
            .map_err(AppError::Insert)?;

        tx.commit().await.map_err(AppError::Update)?;

        Ok((record, deactivated))
    }

    async fn list_recent_businesses(&self, limit: i64) -> Result<Vec<Business>, AppError> {
        sqlx::query_as::<_, Business>(
            r#"
            SELECT id, name, location, rating, reviews, created_at, updated_at
            FROM businesses
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Lookup)
    }

    async fn list_headlines(&self, business_id: Uuid) -> Result<Vec<HeadlineRecord>, AppError> {
        sqlx::query_as::<_, HeadlineRecord>(
            r#"
            SELECT id, business_id, headline, is_active, created_at
            FROM seo_headlines
            WHERE business_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(business_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Lookup)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

async fn deactivate_active<'e>(
    executor: impl PgExecutor<'e>,
    business_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE seo_headlines SET is_active = false WHERE business_id = $1 AND is_active = true",
    )
    .bind(business_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

async fn insert_active<'e>(
    executor: impl PgExecutor<'e>,
    headline: NewHeadline,
) -> Result<HeadlineRecord, sqlx::Error> {
    sqlx::query_as::<_, HeadlineRecord>(
        r#"
        INSERT INTO seo_headlines (business_id, headline, is_active)
        VALUES ($1, $2, true)
        RETURNING id, business_id, headline, is_active, created_at
        "#,
    )
    .bind(headline.business_id)
    .bind(headline.headline)
    .fetch_one(executor)
    .await
}
