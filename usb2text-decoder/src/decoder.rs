//! Keystroke state machine
//!
//! Consumes reports in capture order and emits one event per key-down edge.
//! A key held across several reports emits once; key-ups emit nothing.

use std::collections::BTreeSet;

use tracing::debug;

use crate::hid_codes::{hid_to_chars, usage};
use crate::report::HidReport;

/// Output of a single key-down edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    /// Backspace pressed
    Backspace,
    /// A printable key pressed
    Char {
        /// Character after shift/caps resolution
        ch: char,
        /// Unshifted character of the key
        base: char,
        /// Letter that resolved to upper case
        caps: bool,
    },
}

/// Decoder state for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecoderState {
    caps_lock: bool,
    held: BTreeSet<u8>,
}

impl DecoderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current caps lock state
    pub fn caps_lock(&self) -> bool {
        self.caps_lock
    }

    /// Key set of the most recently consumed report
    pub fn held_keys(&self) -> &BTreeSet<u8> {
        &self.held
    }

    /// Advance by one report and return the emissions it produced.
    ///
    /// Newly pressed keys are handled in ascending usage-code order.
    pub fn consume(&mut self, report: &HidReport) -> Vec<Emission> {
        let pressed: Vec<u8> = report.keys.difference(&self.held).copied().collect();
        self.held.clone_from(&report.keys);

        let shift = report.shift_active();
        let mut emissions = Vec::with_capacity(pressed.len());

        for code in pressed {
            match code {
                usage::CAPS_LOCK => {
                    self.caps_lock = !self.caps_lock;
                    debug!("Caps lock {}", if self.caps_lock { "on" } else { "off" });
                }
                usage::BACKSPACE => emissions.push(Emission::Backspace),
                _ => {
                    let Some(chars) = hid_to_chars(code) else {
                        debug!("Ignoring unmapped usage code 0x{:02X}", code);
                        continue;
                    };
                    // Caps lock inverts shift for letters only
                    let letter = chars.is_letter();
                    let effective = if letter { shift ^ self.caps_lock } else { shift };
                    let ch = if effective { chars.shifted } else { chars.base };
                    emissions.push(Emission::Char {
                        ch,
                        base: chars.base,
                        caps: effective && letter,
                    });
                }
            }
        }

        emissions
    }
}
