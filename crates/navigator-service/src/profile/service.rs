//! Profile storage and the "clear all data" reset.

use std::sync::Arc;

use tracing::{info, warn};

use navigator_core::error::AppError;
use navigator_core::result::AppResult;
use navigator_core::traits::clock::Clock;
use navigator_entity::profile::UserProfile;
use navigator_store::NavigatorStore;

/// Manages the single onboarding profile.
#[derive(Debug, Clone)]
pub struct ProfileService {
    /// Persistent records.
    store: NavigatorStore,
    /// Time source.
    clock: Arc<dyn Clock>,
}

impl ProfileService {
    /// Creates a new profile service.
    pub fn new(store: NavigatorStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// The stored profile, if onboarding has been completed.
    pub async fn get(&self) -> AppResult<Option<UserProfile>> {
        self.store.profile().await
    }

    /// Saves the profile, stamping `updated_at`.
    pub async fn save(&self, mut profile: UserProfile) -> AppResult<UserProfile> {
        if profile.household_size == Some(0) {
            return Err(AppError::validation("Household size must be at least 1"));
        }
        if let Some(zip) = profile.normalized_zip() {
            if zip.len() != 5 || !zip.chars().all(|c| c.is_ascii_digit()) {
                return Err(AppError::validation(format!(
                    "'{zip}' is not a 5-digit ZIP code"
                )));
            }
        }

        profile.updated_at = self.clock.now();
        self.store.save_profile(&profile).await?;
        info!(profile_id = %profile.id, needs = profile.primary_needs.len(), "Profile saved");
        Ok(profile)
    }

    /// Removes the profile and every record. Returns how many keys were removed.
    pub async fn clear_all_data(&self) -> AppResult<usize> {
        let removed = self.store.clear_all().await?;
        warn!(removed, "All navigator data cleared");
        Ok(removed)
    }
}
