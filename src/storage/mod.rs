//! Task list persistence
//!
//! The session calls `load` once at startup and `save` after every
//! mutation. Snapshots are an ordered JSON array of `{text, done}` records.

use crate::core::error::{Result, VoiceTaskError};
use crate::core::types::Task;
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};

/// Persistence backend for the task list
pub trait TaskStore {
    /// Read the stored snapshot. An absent snapshot is an empty list.
    fn load(&self) -> Result<Vec<Task>>;
    /// Replace the stored snapshot
    fn save(&self, tasks: &[Task]) -> Result<()>;
}

/// Stores the list as pretty-printed JSON in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl TaskStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            tracing::debug!("No task snapshot at {}", self.path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = serde_json::from_str(&content).map_err(|e| {
            VoiceTaskError::Storage(format!(
                "Corrupt task snapshot {}: {}",
                self.path.display(),
                e
            ))
        })?;

        tracing::debug!("Loaded {} task(s) from {}", tasks.len(), self.path.display());
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Atomic replace
        let json = serde_json::to_string_pretty(tasks)?;
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;

        tracing::debug!("Saved {} task(s) to {}", tasks.len(), self.path.display());
        Ok(())
    }
}

/// Keeps the snapshot in memory. Useful for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tasks: RefCell<Vec<Task>>,
    saves: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RefCell::new(tasks),
            saves: Cell::new(0),
        }
    }

    /// Current stored snapshot
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }

    /// Number of times `save` has been called
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl TaskStore for MemoryStore {
    fn load(&self) -> Result<Vec<Task>> {
        Ok(self.snapshot())
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        *self.tasks.borrow_mut() = tasks.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

impl<S: TaskStore + ?Sized> TaskStore for &S {
    fn load(&self) -> Result<Vec<Task>> {
        (**self).load()
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        (**self).save(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<Task> {
        vec![
            Task::new("buy milk").completed(),
            Task::new("walk dog"),
            Task::new("call mom \"urgent\""),
        ]
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("tasks.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_round_trip_is_lossless() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/tasks.json"));

        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), sample());

        // Saving what was loaded changes nothing
        let loaded = store.load().unwrap();
        store.save(&loaded).unwrap();
        assert_eq!(store.load().unwrap(), sample());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, "{not json").unwrap();

        let result = JsonFileStore::new(&path).load();
        assert!(matches!(result, Err(VoiceTaskError::Storage(_))));
    }

    #[test]
    fn test_reads_compact_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, r#"[{"text":"buy milk","done":false},{"text":"walk dog","done":true}]"#)
            .unwrap();

        let tasks = JsonFileStore::new(&path).load().unwrap();
        assert_eq!(tasks, vec![Task::new("buy milk"), Task::new("walk dog").completed()]);
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("tasks.json"));
        store.save(&sample()).unwrap();

        assert!(!store.temp_path().exists());
        assert!(store.path().exists());
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let store = MemoryStore::with_tasks(sample());
        assert_eq!(store.load().unwrap(), sample());

        store.save(&[]).unwrap();
        assert!(store.snapshot().is_empty());
        assert_eq!(store.save_count(), 1);
    }
}
