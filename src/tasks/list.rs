//! Ordered task list and its transition functions
//!
//! Every operation is total: it returns an [`Outcome`] even when nothing
//! changed. Positions are 1-based against the list as it is at call time.

use crate::core::types::Task;

pub const HELP_MESSAGE: &str =
    "Try saying: I need to buy milk. Delete task 2. Mark task 1 done. Or clear everything.";
pub const UNKNOWN_MESSAGE: &str =
    "I didn't quite catch that. Try saying something like: I need to buy groceries.";
pub const CLEARED_MESSAGE: &str = "Your list is now empty.";
pub const LAST_DONE_MESSAGE: &str = "Marked your last task as done.";

/// Result of applying one operation to the list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    /// Whether the list differs from before the call
    pub changed: bool,
    /// Confirmation to vocalize, if any
    pub message: Option<String>,
}

impl Outcome {
    fn mutated(message: impl Into<String>) -> Self {
        Self {
            changed: true,
            message: Some(message.into()),
        }
    }

    fn said(message: impl Into<String>) -> Self {
        Self {
            changed: false,
            message: Some(message.into()),
        }
    }

    fn nothing() -> Self {
        Self::default()
    }
}

/// The task list state container
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Restore from a persisted snapshot. Entries with blank text are dropped.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let before = tasks.len();
        let tasks: Vec<Task> = tasks
            .into_iter()
            .filter_map(|mut task| {
                let trimmed = task.text.trim();
                if trimmed.is_empty() {
                    return None;
                }
                if trimmed.len() != task.text.len() {
                    task.text = trimmed.to_string();
                }
                Some(task)
            })
            .collect();

        if tasks.len() != before {
            tracing::warn!(
                "Dropped {} blank task(s) from snapshot",
                before - tasks.len()
            );
        }

        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task at a 1-based position
    pub fn get(&self, position: usize) -> Option<&Task> {
        position.checked_sub(1).and_then(|i| self.tasks.get(i))
    }

    /// Whether a 1-based position names an existing task
    pub fn contains_position(&self, position: usize) -> bool {
        (1..=self.tasks.len()).contains(&position)
    }

    /// Append a task. Blank content is ignored without a confirmation.
    pub fn add(&mut self, content: &str) -> Outcome {
        let text = content.trim();
        if text.is_empty() {
            return Outcome::nothing();
        }

        self.tasks.push(Task::new(text));
        Outcome::mutated(format!("Got it. I added: {}", text))
    }

    /// Remove the task at `position`, shifting later tasks down by one
    pub fn delete(&mut self, position: usize) -> Outcome {
        if !self.contains_position(position) {
            return Outcome::nothing();
        }

        let removed = self.tasks.remove(position - 1);
        let text = if removed.text.is_empty() {
            "that task"
        } else {
            removed.text.as_str()
        };
        Outcome::mutated(format!("Alright, I removed {}", text))
    }

    /// Toggle the done flag of the task at `position`
    pub fn complete(&mut self, position: usize) -> Outcome {
        if !self.contains_position(position) {
            return Outcome::nothing();
        }

        let done = self.tasks[position - 1].toggle();
        let state = if done { "done" } else { "not done" };
        Outcome::mutated(format!("Marked task {} as {}", position, state))
    }

    pub fn clear(&mut self) -> Outcome {
        self.tasks.clear();
        Outcome::mutated(CLEARED_MESSAGE)
    }

    pub fn help(&self) -> Outcome {
        Outcome::said(HELP_MESSAGE)
    }

    /// Toggle the final task. The confirmation always says "done", even
    /// when the toggle cleared the flag.
    pub fn complete_last(&mut self) -> Outcome {
        match self.tasks.last_mut() {
            Some(task) => {
                task.toggle();
                Outcome::mutated(LAST_DONE_MESSAGE)
            }
            None => Outcome::nothing(),
        }
    }

    pub fn unknown(&self) -> Outcome {
        Outcome::said(UNKNOWN_MESSAGE)
    }
}
