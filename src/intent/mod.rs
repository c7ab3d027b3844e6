//! Rule-based intent classification for spoken or typed utterances

pub mod classifier;
pub mod patterns;

pub use classifier::{classify, extract_index, rules, Command, Intent, Rule, NO_INDEX};
