//! Shared application state handed to every handler.

use std::sync::Arc;

use tokio::sync::{Mutex, watch};

use crate::repository::BusinessRepository;
use crate::services::notifier::NotificationFeed;
use crate::services::profile_orchestrator::{ProfileOrchestrator, ProfileView};
use crate::services::random::RandomSource;

#[derive(Clone)]
pub struct AppState {
    /// Serializes submit/regenerate so only one runs at a time
    pub orchestrator: Arc<Mutex<ProfileOrchestrator>>,

    /// Latest view, readable while an operation holds the orchestrator
    pub profile: watch::Receiver<ProfileView>,

    pub repository: Arc<dyn BusinessRepository>,

    pub notifications: Arc<NotificationFeed>,

    /// Default size of the recent-business list
    pub recent_limit: i64,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn BusinessRepository>,
        notifications: Arc<NotificationFeed>,
        rng: Box<dyn RandomSource>,
        recent_limit: i64,
    ) -> Self {
        let orchestrator =
            ProfileOrchestrator::new(repository.clone(), notifications.clone(), rng);
        let profile = orchestrator.subscribe();

        Self {
            orchestrator: Arc::new(Mutex::new(orchestrator)),
            profile,
            repository,
            notifications,
            recent_limit,
        }
    }
}
