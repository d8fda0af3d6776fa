//! To-do list.

pub mod service;

pub use service::TodoService;
