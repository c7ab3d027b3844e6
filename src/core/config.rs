//! Assistant configuration
//!
//! Settings are read from a TOML file. Every field has a default, so a
//! missing file or a partial file is valid. Command-line flags are applied
//! on top by the binary.

use crate::core::error::{Result, VoiceTaskError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the persisted task list
pub const DEFAULT_STORE_PATH: &str = "siri_tasks.json";

/// Marker printed before spoken confirmations
pub const DEFAULT_SPEECH_PROMPT: &str = "🔊";

/// Default tracing filter directive
pub const DEFAULT_LOG_FILTER: &str = "voice_tasks=info";

/// Top-level settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
    pub storage: StorageConfig,
    pub speech: SpeechConfig,
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file holding the task list snapshot
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Suppress spoken confirmations entirely
    pub muted: bool,
    /// Prefix printed before each confirmation by the console speaker
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// What to say when a command names a task that does not exist
    pub missing_task: MissingTaskPolicy,
}

/// Response to a delete/complete command whose position is out of range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingTaskPolicy {
    /// Decline without saying anything
    #[default]
    Silent,
    /// Tell the user the task could not be found
    Announce,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            storage: StorageConfig::default(),
            speech: SpeechConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            muted: false,
            prompt: DEFAULT_SPEECH_PROMPT.to_string(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            missing_task: MissingTaskPolicy::Silent,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.storage.path.as_os_str().is_empty() {
            return Err(VoiceTaskError::Config("storage.path must not be empty".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.storage.path, PathBuf::from(DEFAULT_STORE_PATH));
        assert_eq!(settings.behavior.missing_task, MissingTaskPolicy::Silent);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = Settings::from_toml_str(
            r#"
            [speech]
            muted = true
            "#,
        )
        .unwrap();

        assert!(settings.speech.muted);
        assert_eq!(settings.speech.prompt, DEFAULT_SPEECH_PROMPT);
        assert_eq!(settings.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_full_toml() {
        let settings = Settings::from_toml_str(
            r#"
            log_filter = "voice_tasks=debug"

            [storage]
            path = "/tmp/tasks.json"

            [speech]
            muted = false
            prompt = "Assistant:"

            [behavior]
            missing_task = "announce"
            "#,
        )
        .unwrap();

        assert_eq!(settings.log_filter, "voice_tasks=debug");
        assert_eq!(settings.storage.path, PathBuf::from("/tmp/tasks.json"));
        assert_eq!(settings.speech.prompt, "Assistant:");
        assert_eq!(settings.behavior.missing_task, MissingTaskPolicy::Announce);
    }

    #[test]
    fn test_rejects_empty_store_path() {
        let result = Settings::from_toml_str("[storage]\npath = \"\"\n");
        assert!(matches!(result, Err(VoiceTaskError::Config(_))));
    }

    #[test]
    fn test_rejects_unknown_policy() {
        let result = Settings::from_toml_str("[behavior]\nmissing_task = \"shout\"\n");
        assert!(matches!(result, Err(VoiceTaskError::TomlError(_))));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = Settings::load(Path::new("/definitely/not/here.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
