//! Profile orchestrator - coordinates a business submission end to end.
//!
//! This service handles:
//! - Lookup of an existing business, or synthesis and storage of a new one
//! - Headline resolution (reuse the active one, otherwise generate and store)
//! - Analytics derivation for the displayed profile
//! - Explicit headline regeneration
//!
//! # States
//!
//! ```text
//! Idle -> Submitting -> Displaying | Failed
//! Displaying -> Regenerating -> Displaying
//! Failed -> Submitting
//! ```
//!
//! The orchestrator owns the single displayed profile. A failed submission
//! leaves the previously displayed profile untouched.
//!
//! Every state change is published on a `watch` channel, so readers see
//! `Submitting` and `Regenerating` without waiting for the operation.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::analytics::BusinessAnalytics;
use crate::models::business::{Business, BusinessProfile, BusinessQuery, NewBusiness};
use crate::models::headline::NewHeadline;
use crate::repository::BusinessRepository;
use crate::services::headline_generator;
use crate::services::notifier::{Notification, Notifier};
use crate::services::random::{RandomSource, synthesize_rating, synthesize_reviews};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileState {
    Idle,
    Submitting,
    Displaying,
    Failed,
    Regenerating,
}

/// Profile currently on display together with its derived analytics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayedProfile {
    pub profile: BusinessProfile,
    pub analytics: BusinessAnalytics,
}

/// Snapshot of the orchestrator returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub state: ProfileState,
    pub profile: Option<BusinessProfile>,
    pub analytics: Option<BusinessAnalytics>,

    /// Bumped after each successful submission; clients re-query the recent list when it changes
    pub refresh_counter: u64,
}

pub struct ProfileOrchestrator {
    repository: Arc<dyn BusinessRepository>,
    notifier: Arc<dyn Notifier>,
    rng: Box<dyn RandomSource>,
    state: ProfileState,
    current: Option<DisplayedProfile>,
    refresh_counter: u64,
    published: watch::Sender<ProfileView>,
}

impl ProfileOrchestrator {
    pub fn new(
        repository: Arc<dyn BusinessRepository>,
        notifier: Arc<dyn Notifier>,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let (published, _) = watch::channel(ProfileView {
            state: ProfileState::Idle,
            profile: None,
            analytics: None,
            refresh_counter: 0,
        });

        Self {
            repository,
            notifier,
            rng,
            state: ProfileState::Idle,
            current: None,
            refresh_counter: 0,
            published,
        }
    }

    /// Receiver that always holds the latest published view.
    pub fn subscribe(&self) -> watch::Receiver<ProfileView> {
        self.published.subscribe()
    }

    #[cfg(test)]
    pub fn state(&self) -> ProfileState {
        self.state
    }

    #[cfg(test)]
    pub fn current(&self) -> Option<&DisplayedProfile> {
        self.current.as_ref()
    }

    pub fn view(&self) -> ProfileView {
        ProfileView {
            state: self.state,
            profile: self.current.as_ref().map(|c| c.profile.clone()),
            analytics: self.current.as_ref().map(|c| c.analytics.clone()),
            refresh_counter: self.refresh_counter,
        }
    }

    fn transition(&mut self, state: ProfileState) {
        self.state = state;
        self.published.send_replace(self.view());
    }

    /// Look up or create the business for `query` and display it.
    ///
    /// # Errors
    ///
    /// - `Lookup`: the business or its headline could not be read
    /// - `Insert`: a new business could not be stored
    /// - `HeadlineGeneration`: a headline could not be generated or stored
    ///
    /// On error the state becomes `Failed` and the previous profile stays displayed.
    pub async fn submit(&mut self, query: &BusinessQuery) -> Result<ProfileView, AppError> {
        self.transition(ProfileState::Submitting);

        match self.load_profile(query).await {
            Ok(profile) => {
                let analytics = BusinessAnalytics::derive(profile.rating, profile.reviews);
                self.current = Some(DisplayedProfile { profile, analytics });
                self.refresh_counter += 1;
                self.transition(ProfileState::Displaying);
                Ok(self.view())
            }
            Err(e) => {
                tracing::error!(
                    name = query.name(),
                    location = query.location(),
                    error = %e,
                    "Error fetching business data"
                );
                self.transition(ProfileState::Failed);
                self.notifier.notify(Notification::error(
                    "Error",
                    "Failed to fetch business data. Please try again.",
                ));
                Err(e)
            }
        }
    }

    /// Replace the displayed profile's headline with a freshly generated one.
    ///
    /// Rating, reviews and analytics are left as they are. On failure the prior
    /// headline is kept and the state returns to `Displaying`.
    pub async fn regenerate(&mut self) -> Result<ProfileView, AppError> {
        let (business_id, name, location) = match self.current.as_ref() {
            Some(DisplayedProfile { profile, .. }) => match profile.id {
                Some(id) => (id, profile.name.clone(), profile.location.clone()),
                None => return Err(AppError::NoActiveProfile),
            },
            None => return Err(AppError::NoActiveProfile),
        };

        self.transition(ProfileState::Regenerating);

        let result = self.generate_headline(business_id, &name, &location).await;
        if let (Ok(headline), Some(current)) = (&result, self.current.as_mut()) {
            current.profile.headline = headline.clone();
        }
        self.transition(ProfileState::Displaying);

        match result {
            Ok(_) => {
                self.notifier.notify(Notification::info(
                    "Headline Updated",
                    "New SEO headline generated successfully!",
                ));
                Ok(self.view())
            }
            Err(e) => {
                tracing::error!(%business_id, error = %e, "Error regenerating headline");
                self.notifier.notify(Notification::error(
                    "Error",
                    "Failed to generate new headline. Please try again.",
                ));
                Err(e)
            }
        }
    }

    async fn load_profile(&mut self, query: &BusinessQuery) -> Result<BusinessProfile, AppError> {
        let business = self.find_or_create(query).await?;

        let headline = match self.repository.find_active_headline(business.id).await? {
            Some(record) => record.headline,
            None => {
                self.generate_headline(business.id, &business.name, &business.location)
                    .await?
            }
        };

        Ok(BusinessProfile::from_business(business, headline))
    }

    async fn find_or_create(&mut self, query: &BusinessQuery) -> Result<Business, AppError> {
        if let Some(existing) = self
            .repository
            .find_business(query.name(), query.location())
            .await?
        {
            tracing::info!(business_id = %existing.id, "Found existing business");
            self.notifier.notify(Notification::info(
                "Business Found",
                "Displaying existing business data from our database.",
            ));
            return Ok(existing);
        }

        let new_business = NewBusiness {
            name: query.name().to_string(),
            location: query.location().to_string(),
            rating: synthesize_rating(self.rng.as_mut()),
            reviews: synthesize_reviews(self.rng.as_mut()),
        };
        let business = self.repository.insert_business(new_business).await?;

        tracing::info!(
            business_id = %business.id,
            rating = business.rating,
            reviews = business.reviews,
            "Created new business"
        );
        self.notifier.notify(Notification::info(
            "Business Added",
            "New business profile created successfully!",
        ));

        Ok(business)
    }

    /// Generate a headline from the template pool and store it as the only active one.
    async fn generate_headline(
        &mut self,
        business_id: Uuid,
        name: &str,
        location: &str,
    ) -> Result<String, AppError> {
        let templates = self
            .repository
            .find_templates()
            .await
            .map_err(headline_failure)?;
        let pool: Vec<&str> = templates
            .iter()
            .filter(|t| t.is_template())
            .map(|t| t.headline.as_str())
            .collect();

        let headline = headline_generator::generate(name, location, &pool, self.rng.as_mut());

        let (record, deactivated) = self
            .repository
            .replace_active_headline(NewHeadline {
                business_id,
                headline,
            })
            .await
            .map_err(headline_failure)?;

        tracing::debug!(%business_id, deactivated, "Stored new active headline");
        Ok(record.headline)
    }
}

fn headline_failure(error: AppError) -> AppError {
    AppError::HeadlineGeneration(error.to_string())
}
