//! Terminal presentation

pub mod display;

pub use display::{render_list, render_transcript};
