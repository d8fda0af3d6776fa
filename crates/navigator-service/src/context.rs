//! The assembled service layer shared by the daemon and the CLI.

use std::sync::Arc;

use navigator_core::config::AppConfig;
use navigator_core::traits::clock::Clock;
use navigator_store::{NavigatorStore, ProgramCatalog};

use crate::application::ApplicationService;
use crate::notification::NotificationService;
use crate::profile::ProfileService;
use crate::recommendation::{RecommendationEngine, RecommendationService};
use crate::reminder::{ReminderGenerator, ReminderRules};
use crate::todo::TodoService;

/// Every service, wired over one store, catalog, and clock.
#[derive(Debug, Clone)]
pub struct NavigatorServices {
    /// Profile get/set and data reset.
    pub profiles: ProfileService,
    /// Scored program recommendations.
    pub recommendations: RecommendationService,
    /// Reminder generation.
    pub reminders: ReminderGenerator,
    /// Notification inbox.
    pub notifications: NotificationService,
    /// Application tracker.
    pub applications: ApplicationService,
    /// To-do list.
    pub todos: TodoService,
}

impl NavigatorServices {
    /// Wire every service from configuration and shared dependencies.
    pub fn new(
        config: &AppConfig,
        store: NavigatorStore,
        catalog: Arc<ProgramCatalog>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let engine = RecommendationEngine::new(config.recommendation.clone(), Arc::clone(&clock));
        let rules = ReminderRules::new(config.reminders.clone());

        Self {
            profiles: ProfileService::new(store.clone(), Arc::clone(&clock)),
            recommendations: RecommendationService::new(
                store.clone(),
                Arc::clone(&catalog),
                engine,
            ),
            reminders: ReminderGenerator::new(store.clone(), rules, Arc::clone(&clock)),
            notifications: NotificationService::new(store.clone(), Arc::clone(&clock)),
            applications: ApplicationService::new(store.clone(), catalog, Arc::clone(&clock)),
            todos: TodoService::new(store, clock),
        }
    }
}
