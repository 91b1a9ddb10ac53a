//! Decoding run driver
//!
//! Threads one [`DecoderState`] and one [`Transcript`] through a stream of
//! textual report lines. Malformed lines are counted and skipped; they do
//! not update the held-key set.

use serde::Serialize;
use tracing::{debug, info};

use crate::decoder::{DecoderState, Emission};
use crate::error::ReportError;
use crate::report::HidReport;
use crate::transcript::Transcript;

/// Lines between progress log messages
pub const PROGRESS_INTERVAL: u64 = 1000;

/// Counters for one decoding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DecodeStats {
    /// Non-blank input lines seen
    pub lines: u64,
    /// Lines that tokenized into a report
    pub reports: u64,
    /// Malformed lines
    pub skipped: u64,
    /// Character emissions
    pub keystrokes: u64,
    pub backspaces: u64,
    pub caps_toggles: u64,
}

/// Final result of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOutput {
    /// Text with `[CAPS]` markers before upper-case letters
    pub marked: String,
    /// Plain decoded text
    pub resolved: String,
    pub stats: DecodeStats,
}

/// Stateful decoding run fed one line or report at a time, in capture order
#[derive(Debug, Default)]
pub struct Session {
    state: DecoderState,
    transcript: Transcript,
    stats: DecodeStats,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one textual report line.
    ///
    /// Blank lines are ignored and not counted. A malformed line is counted
    /// as skipped and its error returned; the run can continue regardless.
    pub fn feed_line(&mut self, line: &str) -> Result<(), ReportError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        self.stats.lines += 1;
        if self.stats.lines % PROGRESS_INTERVAL == 0 {
            info!("Processed {} packets...", self.stats.lines);
        }

        match HidReport::parse(line) {
            Ok(report) => {
                self.feed_report(&report);
                Ok(())
            }
            Err(e) => {
                debug!("Skipping line {}: {}", self.stats.lines, e);
                self.stats.skipped += 1;
                Err(e)
            }
        }
    }

    /// Feed an already tokenized report
    pub fn feed_report(&mut self, report: &HidReport) {
        self.stats.reports += 1;
        let caps_before = self.state.caps_lock();

        for emission in self.state.consume(report) {
            match emission {
                Emission::Backspace => self.stats.backspaces += 1,
                Emission::Char { .. } => self.stats.keystrokes += 1,
            }
            self.transcript.apply(&emission);
        }

        // Two toggles in one report cannot happen: a code appears once per set
        if self.state.caps_lock() != caps_before {
            self.stats.caps_toggles += 1;
        }
    }

    pub fn state(&self) -> &DecoderState {
        &self.state
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn stats(&self) -> DecodeStats {
        self.stats
    }

    /// End the run and render both output streams
    pub fn finish(self) -> DecodeOutput {
        info!("Completed processing {} packets.", self.stats.lines);
        DecodeOutput {
            marked: self.transcript.marked_text(),
            resolved: self.transcript.resolved_text(),
            stats: self.stats,
        }
    }
}

/// Decode a complete sequence of report lines
pub fn decode_lines<I, S>(lines: I) -> DecodeOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut session = Session::new();
    for line in lines {
        // Malformed lines are already logged and counted
        let _ = session.feed_line(line.as_ref());
    }
    session.finish()
}
