//! Classify free-form utterances into structured commands
//!
//! Classification is an ordered cascade of independent rules. Each rule pairs
//! a predicate pattern with an extractor that builds the command; the first
//! rule whose predicate matches wins. Nothing here looks at the task list, so
//! an extracted index may be out of range. Range checks belong to the
//! command executor.

use crate::intent::patterns::{
    ADD_PATTERN, CLEAR_PATTERN, COMPLETE_PATTERN, DELETE_PATTERN, DIGITS_PATTERN, HELP_PATTERN,
    LAST_PATTERN,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Index value used when an utterance contains no digits
pub const NO_INDEX: i64 = -1;

/// The category of an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Add,
    Delete,
    Complete,
    Clear,
    Help,
    Last,
    Unknown,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intent::Add => "add",
            Intent::Delete => "delete",
            Intent::Complete => "complete",
            Intent::Clear => "clear",
            Intent::Help => "help",
            Intent::Last => "last",
            Intent::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Structured command produced by classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "lowercase")]
pub enum Command {
    /// Append a task. `content` may be empty when only a lead-in was heard.
    Add { content: String },
    /// Remove the task at a 1-based position, as spoken
    Delete { index: i64 },
    /// Toggle the task at a 1-based position, as spoken
    Complete { index: i64 },
    Clear,
    Help,
    /// Refers to the final task in the current list
    Last,
    Unknown,
}

impl Command {
    pub fn intent(&self) -> Intent {
        match self {
            Command::Add { .. } => Intent::Add,
            Command::Delete { .. } => Intent::Delete,
            Command::Complete { .. } => Intent::Complete,
            Command::Clear => Intent::Clear,
            Command::Help => Intent::Help,
            Command::Last => Intent::Last,
            Command::Unknown => Intent::Unknown,
        }
    }
}

/// One step of the classification cascade
pub struct Rule {
    pub intent: Intent,
    pattern: &'static LazyLock<Regex>,
    extract: fn(&str) -> Command,
}

impl Rule {
    /// Whether this rule claims the (lower-cased) utterance
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Build the command for an utterance this rule matched
    pub fn extract(&self, text: &str) -> Command {
        (self.extract)(text)
    }
}

/// Rules in priority order. Anything left over is `Command::Unknown`.
static RULES: [Rule; 6] = [
    Rule {
        intent: Intent::Add,
        pattern: &ADD_PATTERN,
        extract: extract_add,
    },
    Rule {
        intent: Intent::Delete,
        pattern: &DELETE_PATTERN,
        extract: extract_delete,
    },
    Rule {
        intent: Intent::Complete,
        pattern: &COMPLETE_PATTERN,
        extract: extract_complete,
    },
    Rule {
        intent: Intent::Clear,
        pattern: &CLEAR_PATTERN,
        extract: extract_clear,
    },
    Rule {
        intent: Intent::Help,
        pattern: &HELP_PATTERN,
        extract: extract_help,
    },
    Rule {
        intent: Intent::Last,
        pattern: &LAST_PATTERN,
        extract: extract_last,
    },
];

/// The classification cascade, highest priority first
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Classify an utterance. Never fails: unmatched input is `Command::Unknown`.
pub fn classify(utterance: &str) -> Command {
    let clean = utterance.to_lowercase();

    let command = RULES
        .iter()
        .find(|rule| rule.matches(&clean))
        .map(|rule| rule.extract(&clean))
        .unwrap_or(Command::Unknown);

    tracing::debug!(utterance = %clean, intent = %command.intent(), "classified utterance");
    command
}

/// First run of digits in the text, or `NO_INDEX` when there is none.
///
/// Runs too long for an `i64` saturate to `i64::MAX`, which no list can reach.
pub fn extract_index(text: &str) -> i64 {
    match DIGITS_PATTERN.find(text) {
        Some(m) => m.as_str().parse().unwrap_or(i64::MAX),
        None => NO_INDEX,
    }
}

/// Strip every lead-in phrase and trim what is left
pub fn extract_task_text(text: &str) -> String {
    ADD_PATTERN.replace_all(text, "").trim().to_string()
}

fn extract_add(text: &str) -> Command {
    Command::Add {
        content: extract_task_text(text),
    }
}

fn extract_delete(text: &str) -> Command {
    Command::Delete {
        index: extract_index(text),
    }
}

fn extract_complete(text: &str) -> Command {
    Command::Complete {
        index: extract_index(text),
    }
}

fn extract_clear(_: &str) -> Command {
    Command::Clear
}

fn extract_help(_: &str) -> Command {
    Command::Help
}

fn extract_last(_: &str) -> Command {
    Command::Last
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn add(content: &str) -> Command {
        Command::Add {
            content: content.to_string(),
        }
    }

    #[test]
    fn test_add_phrases() {
        assert_eq!(classify("I need to buy milk"), add("buy milk"));
        assert_eq!(classify("remind me to call mom"), add("call mom"));
        assert_eq!(classify("Remind to water the plants"), add("water the plants"));
        assert_eq!(classify("note to self pay rent"), add("pay rent"));
        assert_eq!(classify("please add eggs"), add("eggs"));
        assert_eq!(classify("gotta fix the sink"), add("fix the sink"));
    }

    #[test]
    fn test_add_strips_every_lead_in() {
        assert_eq!(classify("i need to add milk"), add("milk"));
        assert_eq!(classify("buy milk i have to"), add("buy milk"));
    }

    #[test]
    fn test_add_with_no_content() {
        assert_eq!(classify("add"), add(""));
        assert_eq!(classify("  I need to  "), add(""));
    }

    #[test]
    fn test_add_content_is_lowercased() {
        assert_eq!(classify("I Need To Call BOB"), add("call bob"));
    }

    #[test]
    fn test_delete_phrases() {
        assert_eq!(classify("delete task 2"), Command::Delete { index: 2 });
        assert_eq!(classify("get rid of 3"), Command::Delete { index: 3 });
        assert_eq!(classify("Trash task 10"), Command::Delete { index: 10 });
        assert_eq!(classify("remove task7"), Command::Delete { index: 7 });
    }

    #[test]
    fn test_delete_takes_first_number_anywhere() {
        assert_eq!(
            classify("at 9 please remove task 4"),
            Command::Delete { index: 9 }
        );
    }

    #[test]
    fn test_complete_phrases() {
        assert_eq!(classify("mark task 1 done"), Command::Complete { index: 1 });
        assert_eq!(classify("finished 3"), Command::Complete { index: 3 });
        assert_eq!(classify("check off 2"), Command::Complete { index: 2 });
        assert_eq!(classify("i completed 5"), Command::Complete { index: 5 });
        assert_eq!(classify("yep, that’s done 2"), Command::Complete { index: 2 });
        assert_eq!(classify("just did 4"), Command::Complete { index: 4 });
    }

    #[test]
    fn test_fixed_phrases() {
        assert_eq!(classify("clear everything"), Command::Clear);
        assert_eq!(classify("let's start fresh"), Command::Clear);
        assert_eq!(classify("help"), Command::Help);
        assert_eq!(classify("What can I say?"), Command::Help);
        assert_eq!(classify("open the voice guide"), Command::Help);
        assert_eq!(classify("instructions please"), Command::Help);
        assert_eq!(classify("show me how"), Command::Help);
        assert_eq!(classify("last one"), Command::Last);
        assert_eq!(classify("mark that one"), Command::Last);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(classify(""), Command::Unknown);
        assert_eq!(classify("xyz nonsense"), Command::Unknown);
        assert_eq!(classify("delete the milk"), Command::Unknown);
    }

    #[test]
    fn test_non_ascii_digits_fall_through() {
        assert_eq!(classify("delete task \u{0663}"), Command::Unknown);
        assert_eq!(classify("finished \u{FF12}"), Command::Unknown);
    }

    #[test]
    fn test_add_outranks_everything() {
        // Substring matching is not sentence-aware
        assert_eq!(
            classify("remember to delete task 2"),
            add("delete task 2")
        );
        assert_eq!(classify("address 5"), add("ress 5"));
    }

    #[test]
    fn test_delete_outranks_complete() {
        assert_eq!(
            classify("remove 2 now that it's done 3"),
            Command::Delete { index: 2 }
        );
    }

    #[test]
    fn test_clear_outranks_help() {
        assert_eq!(classify("help me clear everything"), Command::Clear);
    }

    #[test]
    fn test_rule_order() {
        let order: Vec<Intent> = rules().iter().map(|r| r.intent).collect();
        assert_eq!(
            order,
            vec![
                Intent::Add,
                Intent::Delete,
                Intent::Complete,
                Intent::Clear,
                Intent::Help,
                Intent::Last,
            ]
        );
    }

    #[test]
    fn test_extract_index() {
        assert_eq!(extract_index("task 42"), 42);
        assert_eq!(extract_index("no digits"), NO_INDEX);
        assert_eq!(extract_index("007"), 7);
        assert_eq!(extract_index("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn test_command_serialization() {
        let json = serde_json::to_string(&Command::Delete { index: 2 }).unwrap();
        assert_eq!(json, r#"{"intent":"delete","index":2}"#);

        let json = serde_json::to_string(&Command::Clear).unwrap();
        assert_eq!(json, r#"{"intent":"clear"}"#);
    }

    const WORDS: &[&str] = &[
        "buy", "milk", "walk", "the", "dog", "call", "mom", "pay", "rent", "water", "plants",
        "fix", "sink", "book", "flights", "tomorrow",
    ];

    fn task_phrase() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(WORDS), 1..6).prop_map(|w| w.join(" "))
    }

    proptest! {
        #[test]
        fn prop_need_to_extracts_content(phrase in task_phrase(), pad in " {0,3}") {
            let utterance = format!("i need to {}{}{}", pad, phrase, pad);
            prop_assert_eq!(classify(&utterance), Command::Add { content: phrase });
        }

        #[test]
        fn prop_delete_task_n(n in 1i64..=1_000_000_000) {
            let command = classify(&format!("delete task {}", n));
            prop_assert_eq!(command.intent(), Intent::Delete);
            prop_assert_eq!(command, Command::Delete { index: n });
        }
    }
}
