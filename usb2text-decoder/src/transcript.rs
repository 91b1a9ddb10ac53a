//! Output accumulators for a decoding run

use std::fmt;

use crate::decoder::Emission;

/// Literal marker placed before each upper-case letter in the marked stream
pub const CAPS_MARKER: &str = "[CAPS]";

/// One token of the marked stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkedToken {
    Caps,
    Char(char),
}

impl fmt::Display for MarkedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkedToken::Caps => f.write_str(CAPS_MARKER),
            MarkedToken::Char(c) => write!(f, "{c}"),
        }
    }
}

/// Marked and resolved text built from emissions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    marked: Vec<MarkedToken>,
    resolved: Vec<char>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one emission to both streams.
    ///
    /// Backspace pops a single token from the marked stream, so erasing an
    /// upper-case letter leaves its `[CAPS]` marker behind.
    pub fn apply(&mut self, emission: &Emission) {
        match *emission {
            Emission::Backspace => {
                self.resolved.pop();
                self.marked.pop();
            }
            Emission::Char { ch, base, caps } => {
                self.resolved.push(ch);
                if caps {
                    self.marked.push(MarkedToken::Caps);
                    self.marked.push(MarkedToken::Char(base));
                } else {
                    self.marked.push(MarkedToken::Char(ch));
                }
            }
        }
    }

    pub fn marked_tokens(&self) -> &[MarkedToken] {
        &self.marked
    }

    /// Marked stream rendered as text
    pub fn marked_text(&self) -> String {
        self.marked.iter().map(ToString::to_string).collect()
    }

    /// Plain decoded text
    pub fn resolved_text(&self) -> String {
        self.resolved.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.marked.is_empty() && self.resolved.is_empty()
    }
}
