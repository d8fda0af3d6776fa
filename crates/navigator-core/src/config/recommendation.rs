//! Recommendation scoring configuration.

use serde::{Deserialize, Serialize};

/// Tunables for the recommendation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// ZIP codes inside the local service area.
    #[serde(default = "default_service_area_zips")]
    pub service_area_zips: Vec<String>,
    /// Raw score that maps to a 100% match.
    #[serde(default = "default_max_score")]
    pub max_score: u32,
    /// Maximum results per primary-need group.
    #[serde(default = "default_per_need_limit")]
    pub per_need_limit: usize,
    /// Maximum results in the aggregate "other" group.
    #[serde(default = "default_other_limit")]
    pub other_limit: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            service_area_zips: default_service_area_zips(),
            max_score: default_max_score(),
            per_need_limit: default_per_need_limit(),
            other_limit: default_other_limit(),
        }
    }
}

fn default_service_area_zips() -> Vec<String> {
    [
        "48201", "48202", "48203", "48204", "48205", "48206", "48207", "48208", "48209", "48210",
        "48211", "48212", "48213", "48214", "48215", "48216", "48217", "48219", "48221", "48223",
        "48224", "48226", "48227", "48228", "48234", "48235", "48238", "48243",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_max_score() -> u32 {
    150
}

fn default_per_need_limit() -> usize {
    5
}

fn default_other_limit() -> usize {
    10
}
