//! Keystroke reconstruction from USB HID boot-protocol keyboard reports
//!
//! Input is a stream of textual 8-byte reports (modifier, reserved, six key
//! slots) already extracted from a capture. Output is the typed text, once
//! with `[CAPS]` markers before upper-case letters and once fully resolved.
//!
//! # Example
//!
//! ```
//! use usb2text_decoder::decode_lines;
//!
//! let out = decode_lines([
//!     "02:00:0b:00:00:00:00:00",
//!     "00:00:00:00:00:00:00:00",
//!     "00:00:0c:00:00:00:00:00",
//! ]);
//! assert_eq!(out.resolved, "Hi");
//! assert_eq!(out.marked, "[CAPS]hi");
//! ```

pub mod decoder;
pub mod error;
pub mod hid_codes;
pub mod report;
pub mod session;
pub mod transcript;

pub use decoder::{DecoderState, Emission};
pub use error::ReportError;
pub use hid_codes::{hid_to_chars, KeyChars};
pub use report::HidReport;
pub use session::{decode_lines, DecodeOutput, DecodeStats, Session};
pub use transcript::{MarkedToken, Transcript, CAPS_MARKER};
