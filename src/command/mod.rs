//! Command execution pipeline
//!
//! Applies classified commands to the task list:
//! utterance -> classify -> Command -> CommandExecutor -> ExecutionResult

pub mod executor;

pub use executor::{valid_position, CommandExecutor, ExecutionResult, MISSING_TASK_MESSAGE};
