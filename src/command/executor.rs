//! Command execution - applies classified commands to the task list

use crate::core::config::MissingTaskPolicy;
use crate::intent::{Command, Intent};
use crate::tasks::{Outcome, TaskList};

pub const MISSING_TASK_MESSAGE: &str = "I couldn't find that task.";

/// Dispatches commands to task list operations.
///
/// Positions named by delete/complete commands are checked against the list
/// before the operation runs. A bad position never reaches the list.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandExecutor {
    missing_task: MissingTaskPolicy,
}

/// Result of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub intent: Intent,
    pub changed: bool,
    pub message: Option<String>,
}

impl ExecutionResult {
    fn from_outcome(intent: Intent, outcome: Outcome) -> Self {
        Self {
            intent,
            changed: outcome.changed,
            message: outcome.message,
        }
    }
}

impl CommandExecutor {
    pub fn new(missing_task: MissingTaskPolicy) -> Self {
        Self { missing_task }
    }

    /// Apply a command to the list
    pub fn execute(&self, list: &mut TaskList, command: &Command) -> ExecutionResult {
        let intent = command.intent();
        tracing::debug!(%intent, tasks = list.len(), "executing command");

        let outcome = match command {
            Command::Add { content } => list.add(content),
            Command::Delete { index } => match valid_position(list, *index) {
                Some(position) => list.delete(position),
                None => self.reject(intent, *index, list.len()),
            },
            Command::Complete { index } => match valid_position(list, *index) {
                Some(position) => list.complete(position),
                None => self.reject(intent, *index, list.len()),
            },
            Command::Clear => list.clear(),
            Command::Help => list.help(),
            Command::Last => list.complete_last(),
            Command::Unknown => list.unknown(),
        };

        ExecutionResult::from_outcome(intent, outcome)
    }

    fn reject(&self, intent: Intent, index: i64, len: usize) -> Outcome {
        tracing::info!(%intent, index, len, "no task at requested position");
        match self.missing_task {
            MissingTaskPolicy::Silent => Outcome::default(),
            MissingTaskPolicy::Announce => Outcome {
                changed: false,
                message: Some(MISSING_TASK_MESSAGE.to_string()),
            },
        }
    }
}

/// Convert a spoken index to a position if it names an existing task
pub fn valid_position(list: &TaskList, index: i64) -> Option<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&position| list.contains_position(position))
}
