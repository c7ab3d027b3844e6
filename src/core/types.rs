//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// A single to-do entry.
///
/// Tasks carry no stable identifier: a task is addressed by its 1-based
/// position in the list at the moment a command is evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }

    pub fn completed(mut self) -> Self {
        self.done = true;
        self
    }

    /// Flip the done flag, returning the new state
    pub fn toggle(&mut self) -> bool {
        self.done = !self.done;
        self.done
    }
}
