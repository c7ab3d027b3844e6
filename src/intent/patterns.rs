//! Phrase catalog for each intent
//!
//! Patterns are matched against lower-cased text and are deliberately
//! unanchored: a phrase anywhere in the utterance counts. "address the
//! envelope" therefore classifies as Add because it contains "add".

use regex::Regex;
use std::sync::LazyLock;

/// Lead-in phrases that introduce a new task. Every occurrence is stripped
/// from the utterance to recover the task text.
pub static ADD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(remind( me)? to|add|i need to|i should|remember to|i have to|note to self|schedule|create|i must|please add|gotta|need to|have to|make sure to|i want to|better|plan to)",
    )
    .expect("Invalid regex")
});

/// Removal verb, optional "task", then an ASCII number
pub static DELETE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(delete|get rid of|remove|erase|forget|trash|cancel|drop)\s?(task)?\s?[0-9]+")
        .expect("Invalid regex")
});

/// Completion phrase immediately followed by an ASCII number
pub static COMPLETE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(done|finished|i did|i completed|complete|check off|mark|that's done|just did|yep, that’s done|mark task)\s?[0-9]+",
    )
    .expect("Invalid regex")
});

pub static CLEAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(clear everything|nuke the list|reset all|wipe everything|start fresh|empty the list)",
    )
    .expect("Invalid regex")
});

pub static HELP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(what can i say|help|voice guide|how do i|instructions|show me how)")
        .expect("Invalid regex")
});

pub static LAST_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(last one|that one|previous task)").expect("Invalid regex"));

/// First contiguous run of ASCII digits. Delete and Complete use the same
/// digit class so a matched rule always yields an index.
pub static DIGITS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("Invalid regex"));
