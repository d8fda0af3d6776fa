//! # navigator-service
//!
//! Business logic service layer for the Resource Navigator. The two core
//! pieces are the [`RecommendationEngine`] (scores the program catalog
//! against a profile) and the [`ReminderGenerator`] (derives notifications
//! from stored applications and to-dos). The remaining services wrap the
//! user-driven record changes around them.
//!
//! Services follow constructor injection: the store, catalog, and clock
//! are provided at construction time, never reached through globals.

pub mod application;
pub mod context;
pub mod notification;
pub mod profile;
pub mod recommendation;
pub mod reminder;
pub mod todo;

pub use application::{ApplicationService, ProgressSummary};
pub use context::NavigatorServices;
pub use notification::NotificationService;
pub use profile::ProfileService;
pub use recommendation::{
    ApplicationHistory, GroupPriority, RecommendationEngine, RecommendationGroup,
    RecommendationScore, RecommendationService,
};
pub use reminder::{ReminderGenerator, ReminderRules};
pub use todo::TodoService;
