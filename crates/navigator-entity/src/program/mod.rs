//! Program catalog entities.

pub mod model;

pub use model::{ContactInfo, Eligibility, Program};
