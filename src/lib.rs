//! Voice Tasks - voice-driven to-do list manager

pub mod command;
pub mod core;
pub mod intent;
pub mod session;
pub mod speech;
pub mod storage;
pub mod tasks;
pub mod ui;

pub use command::{CommandExecutor, ExecutionResult};
pub use crate::core::{Result, Settings, Task, VoiceTaskError};
pub use intent::{classify, Command, Intent};
pub use session::Assistant;
pub use tasks::TaskList;
