//! To-do entities.

pub mod model;

pub use model::TodoItem;
