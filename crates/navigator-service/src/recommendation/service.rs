//! Recommendations for the stored profile.

use std::sync::Arc;

use tracing::{debug, warn};

use navigator_entity::profile::UserProfile;
use navigator_store::{NavigatorStore, ProgramCatalog};

use super::engine::{RecommendationEngine, RecommendationGroup, RecommendationScore};
use super::history::ApplicationHistory;

/// Runs the engine over the stored profile, history, and catalog.
///
/// Store failures are logged and degrade to "no recommendations".
#[derive(Debug, Clone)]
pub struct RecommendationService {
    /// Persistent records.
    store: NavigatorStore,
    /// Program catalog.
    catalog: Arc<ProgramCatalog>,
    /// Scoring engine.
    engine: RecommendationEngine,
}

impl RecommendationService {
    /// Creates a new recommendation service.
    pub fn new(
        store: NavigatorStore,
        catalog: Arc<ProgramCatalog>,
        engine: RecommendationEngine,
    ) -> Self {
        Self {
            store,
            catalog,
            engine,
        }
    }

    /// The scoring engine.
    pub fn engine(&self) -> &RecommendationEngine {
        &self.engine
    }

    /// Every program scored, in catalog order.
    pub async fn all(&self) -> Vec<RecommendationScore> {
        let (profile, history) = self.inputs().await;
        self.engine
            .recommend(profile.as_ref(), self.catalog.programs(), &history)
    }

    /// The `n` best matches.
    pub async fn top(&self, n: usize) -> Vec<RecommendationScore> {
        let (profile, history) = self.inputs().await;
        self.engine
            .top(profile.as_ref(), self.catalog.programs(), &history, n)
    }

    /// Matches grouped by primary need, then "other".
    pub async fn categorized(&self) -> Vec<RecommendationGroup> {
        let (profile, history) = self.inputs().await;
        self.engine
            .categorize(profile.as_ref(), self.catalog.programs(), &history)
    }

    async fn inputs(&self) -> (Option<UserProfile>, ApplicationHistory) {
        let profile = match self.store.profile().await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(error = %e, "Failed to load profile for recommendations");
                None
            }
        };
        if profile.is_none() {
            debug!("No profile stored, nothing to recommend");
            return (None, ApplicationHistory::empty());
        }

        let history = match self.store.applications().await {
            Ok(applications) => {
                ApplicationHistory::from_applications(&applications, self.catalog.programs())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load application history, scoring without it");
                ApplicationHistory::empty()
            }
        };

        (profile, history)
    }
}
