//! Voice assistant session
//!
//! Owns the task list and wires the classifier, executor, store and speaker
//! together. One utterance is applied and persisted before the next is
//! accepted; `&mut self` on every entry point keeps it that way.

use crate::command::{CommandExecutor, ExecutionResult};
use crate::core::config::Settings;
use crate::core::types::Task;
use crate::intent::{classify, Command, Intent};
use crate::speech::{Speaker, TranscriptSource};
use crate::storage::TaskStore;
use crate::tasks::{Outcome, TaskList};

pub struct Assistant<S: TaskStore, V: Speaker> {
    list: TaskList,
    executor: CommandExecutor,
    store: S,
    speaker: V,
    last_transcript: Option<String>,
}

impl<S: TaskStore, V: Speaker> Assistant<S, V> {
    /// Load the persisted list and start a session.
    ///
    /// A missing or unreadable snapshot starts the session with an empty list.
    pub fn start(store: S, speaker: V, settings: &Settings) -> Self {
        let list = match store.load() {
            Ok(tasks) => TaskList::from_tasks(tasks),
            Err(e) => {
                tracing::warn!("Could not load saved tasks, starting empty: {}", e);
                TaskList::new()
            }
        };
        tracing::info!("Session started with {} task(s)", list.len());

        Self {
            list,
            executor: CommandExecutor::new(settings.behavior.missing_task),
            store,
            speaker,
            last_transcript: None,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.list.tasks()
    }

    /// The most recent utterance, lower-cased as it was classified
    pub fn last_transcript(&self) -> Option<&str> {
        self.last_transcript.as_deref()
    }

    pub fn speaker(&self) -> &V {
        &self.speaker
    }

    /// Classify an utterance and apply it
    pub fn handle_utterance(&mut self, utterance: &str) -> ExecutionResult {
        let transcript = utterance.trim().to_lowercase();
        tracing::info!(transcript = %transcript, "heard");

        let command = classify(&transcript);
        self.last_transcript = Some(transcript);

        let result = self.executor.execute(&mut self.list, &command);
        self.finish(result.message.as_deref(), result.changed);
        result
    }

    /// Pull one transcript from the source and handle it.
    ///
    /// Returns `None` once the source is exhausted. A failed capture is
    /// handled like an empty utterance.
    pub fn capture_and_handle(
        &mut self,
        source: &mut impl TranscriptSource,
    ) -> Option<ExecutionResult> {
        let transcript = match source.capture() {
            Ok(Some(transcript)) => transcript,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Speech capture failed: {}", e);
                String::new()
            }
        };

        Some(self.handle_utterance(&transcript))
    }

    /// Add a task as typed, without classification
    pub fn add_direct(&mut self, text: &str) -> ExecutionResult {
        let outcome = self.list.add(text);
        self.apply_direct(Intent::Add, outcome)
    }

    /// Toggle a task by position, without classification
    pub fn toggle_direct(&mut self, position: usize) -> ExecutionResult {
        let outcome = self.list.complete(position);
        self.apply_direct(Intent::Complete, outcome)
    }

    /// Delete a task by position, without classification
    pub fn delete_direct(&mut self, position: usize) -> ExecutionResult {
        let outcome = self.list.delete(position);
        self.apply_direct(Intent::Delete, outcome)
    }

    /// Run a pre-built command through the executor
    pub fn execute(&mut self, command: &Command) -> ExecutionResult {
        let result = self.executor.execute(&mut self.list, command);
        self.finish(result.message.as_deref(), result.changed);
        result
    }

    fn apply_direct(&mut self, intent: Intent, outcome: Outcome) -> ExecutionResult {
        self.finish(outcome.message.as_deref(), outcome.changed);
        ExecutionResult {
            intent,
            changed: outcome.changed,
            message: outcome.message,
        }
    }

    fn finish(&mut self, message: Option<&str>, changed: bool) {
        if changed {
            self.persist();
        }
        if let Some(message) = message {
            self.speaker.speak(message);
        }
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(self.list.tasks()) {
            tracing::error!("Failed to save tasks: {}", e);
        }
    }
}
