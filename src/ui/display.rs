//! Terminal rendering of the task list

use crate::core::types::Task;
use crossterm::style::Stylize;

/// Shown in place of the list when there is nothing to do
pub const EMPTY_LIST_TEXT: &str = "(no tasks yet)";

/// Render the list as numbered lines.
///
/// With `styled`, done tasks are crossed out in green; otherwise they are
/// marked with `[x]` so plain output still shows their state.
pub fn render_list(tasks: &[Task], styled: bool) -> String {
    if tasks.is_empty() {
        return format!("{}\n", EMPTY_LIST_TEXT);
    }

    let mut out = String::new();
    for (i, task) in tasks.iter().enumerate() {
        let position = i + 1;
        let line = match (styled, task.done) {
            (true, true) => format!(
                "{}. {}\n",
                position,
                task.text.as_str().crossed_out().green()
            ),
            (true, false) => format!("{}. {}\n", position, task.text),
            (false, true) => format!("{}. [x] {}\n", position, task.text),
            (false, false) => format!("{}. [ ] {}\n", position, task.text),
        };
        out.push_str(&line);
    }
    out
}

/// Echo of the last heard utterance
pub fn render_transcript(transcript: &str) -> String {
    format!("🗣️ You said: {}", transcript)
}
