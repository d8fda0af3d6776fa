//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Value, json};

use navigator_core::config::AppConfig;
use navigator_core::traits::clock::{Clock, FixedClock};
use navigator_entity::profile::{NeedCategory, UserProfile};
use navigator_entity::program::Program;
use navigator_service::NavigatorServices;
use navigator_store::{NavigatorStore, ProgramCatalog};

/// A fully wired navigator over an in-memory store and a fixed clock.
pub struct TestApp {
    pub clock: Arc<FixedClock>,
    pub store: NavigatorStore,
    pub services: NavigatorServices,
}

impl TestApp {
    /// Wire the services over `programs`.
    pub fn new(programs: Vec<Program>) -> Self {
        Self::with_store(NavigatorStore::in_memory(), programs)
    }

    /// Wire the services over an existing store.
    pub fn with_store(store: NavigatorStore, programs: Vec<Program>) -> Self {
        let clock = Arc::new(FixedClock::new(start_time()));
        let catalog = ProgramCatalog::from_programs(programs).expect("valid catalog");
        let services = NavigatorServices::new(
            &AppConfig::default(),
            store.clone(),
            Arc::new(catalog),
            clock.clone(),
        );
        Self {
            clock,
            store,
            services,
        }
    }

    /// Current fixed time.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Save a profile built by `edit` on top of an empty one.
    pub async fn save_profile(&self, edit: impl FnOnce(&mut UserProfile)) -> UserProfile {
        let mut profile = UserProfile::new(self.now());
        edit(&mut profile);
        self.services
            .profiles
            .save(profile)
            .await
            .expect("save profile")
    }
}

/// Monday 2025-03-03 10:00 UTC.
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 3, 10, 0, 0).unwrap()
}

/// A catalog program with `extra` fields merged over a minimal base.
pub fn program(id: &str, category: NeedCategory, extra: Value) -> Program {
    let mut base = json!({
        "id": id,
        "name": format!("Program {id}"),
        "category": category,
        "contact": { "address": "2 Woodward Ave, Detroit, MI 48226" },
    });
    if let (Some(base), Value::Object(extra)) = (base.as_object_mut(), extra) {
        base.extend(extra);
    }
    serde_json::from_value(base).expect("valid program")
}
