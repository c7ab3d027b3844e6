pub mod config;
pub mod error;
pub mod types;

pub use config::{MissingTaskPolicy, Settings};
pub use error::{Result, VoiceTaskError};
pub use types::Task;
