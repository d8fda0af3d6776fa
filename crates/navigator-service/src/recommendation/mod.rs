//! Program recommendation scoring and grouping.

pub mod engine;
pub mod history;
pub mod service;

pub use engine::{GroupPriority, RecommendationEngine, RecommendationGroup, RecommendationScore};
pub use history::ApplicationHistory;
pub use service::RecommendationService;
