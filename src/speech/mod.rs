//! Speech input and output collaborators
//!
//! Capture yields one transcript per request; output is fire-and-forget.
//! The terminal versions stand in for a real recognizer and synthesizer.

use crate::core::error::{Result, VoiceTaskError};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Vocalizes confirmation messages
pub trait Speaker {
    fn speak(&mut self, message: &str);
}

/// Produces one utterance transcript per capture request
pub trait TranscriptSource {
    /// `Ok(None)` when the source is exhausted. An `Err` is a failed
    /// capture (no speech, no permission) and is handled as silence.
    fn capture(&mut self) -> Result<Option<String>>;
}

/// Prints confirmations to a writer (stdout by default)
pub struct ConsoleSpeaker<W: Write = std::io::Stdout> {
    out: W,
    prompt: String,
    muted: bool,
}

impl ConsoleSpeaker {
    pub fn stdout(prompt: impl Into<String>, muted: bool) -> Self {
        Self::new(std::io::stdout(), prompt, muted)
    }
}

impl<W: Write> ConsoleSpeaker<W> {
    pub fn new(out: W, prompt: impl Into<String>, muted: bool) -> Self {
        Self {
            out,
            prompt: prompt.into(),
            muted,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Speaker for ConsoleSpeaker<W> {
    fn speak(&mut self, message: &str) {
        if self.muted {
            tracing::debug!(text = message, "speech muted");
            return;
        }
        // Output failures are not reported back to the caller
        if let Err(e) = writeln!(self.out, "{} {}", self.prompt, message) {
            tracing::warn!("Failed to speak message: {}", e);
        }
    }
}

/// Collects every spoken message
#[derive(Debug, Default, Clone)]
pub struct RecordingSpeaker {
    pub spoken: Vec<String>,
}

impl RecordingSpeaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.spoken.last().map(String::as_str)
    }
}

impl Speaker for RecordingSpeaker {
    fn speak(&mut self, message: &str) {
        self.spoken.push(message.to_string());
    }
}

impl<S: Speaker + ?Sized> Speaker for &mut S {
    fn speak(&mut self, message: &str) {
        (**self).speak(message)
    }
}

/// Reads one transcript per line, e.g. from stdin
pub struct LineTranscripts<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LineTranscripts<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> TranscriptSource for LineTranscripts<R> {
    fn capture(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| VoiceTaskError::Capture(e.to_string()))?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Replays a fixed sequence of capture results
#[derive(Debug, Default)]
pub struct ScriptedTranscripts {
    queue: VecDeque<Result<String>>,
}

impl ScriptedTranscripts {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue: lines.into_iter().map(|l| Ok(l.into())).collect(),
        }
    }

    /// Queue a failed capture
    pub fn push_failure(&mut self, reason: &str) {
        self.queue
            .push_back(Err(VoiceTaskError::Capture(reason.to_string())));
    }
}

impl TranscriptSource for ScriptedTranscripts {
    fn capture(&mut self) -> Result<Option<String>> {
        self.queue.pop_front().transpose()
    }
}
