//! User profile entities.

pub mod income;
pub mod model;
pub mod need;

pub use income::{IncomeBracket, IncomeRange};
pub use model::UserProfile;
pub use need::NeedCategory;
