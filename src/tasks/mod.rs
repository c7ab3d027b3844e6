//! Task list management

pub mod list;

pub use list::{Outcome, TaskList};
