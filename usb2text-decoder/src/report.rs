//! Boot-protocol keyboard report tokenizer
//!
//! Accepts one textual report per line, as produced by capture dissectors:
//! - colon-delimited: `02:00:04:00:00:00:00:00`
//! - contiguous:      `0200040000000000`
//!
//! Layout: `[modifier, reserved, key0..key5]`. The reserved byte is never
//! inspected and segments past the eighth are ignored.

use std::collections::BTreeSet;
use std::str::FromStr;

use crate::error::ReportError;
use crate::hid_codes::modifier;

/// Minimum segments for a usable report (modifier, reserved, one key slot)
pub const MIN_SEGMENTS: usize = 3;

/// Boot report length in bytes
pub const BOOT_REPORT_LEN: usize = 8;

/// One keyboard input report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HidReport {
    /// Modifier bitmask (see [`crate::hid_codes::modifier`])
    pub modifier: u8,
    /// Pressed usage codes, ascending; 0 and duplicates excluded
    pub keys: BTreeSet<u8>,
}

impl HidReport {
    /// Build a report from a modifier and pressed key codes.
    /// Zero codes are dropped, duplicates collapse.
    pub fn new(modifier: u8, keys: impl IntoIterator<Item = u8>) -> Self {
        Self {
            modifier,
            keys: keys.into_iter().filter(|&k| k != 0).collect(),
        }
    }

    /// Build a report from raw boot-protocol bytes
    pub fn from_bytes(data: &[u8]) -> Result<Self, ReportError> {
        if data.len() < MIN_SEGMENTS {
            return Err(ReportError::TooShort { len: data.len() });
        }
        let end = data.len().min(BOOT_REPORT_LEN);
        Ok(Self::new(data[0], data[2..end].iter().copied()))
    }

    /// Tokenize one textual report line
    pub fn parse(line: &str) -> Result<Self, ReportError> {
        let segments = split_segments(line.trim());
        if segments.len() < MIN_SEGMENTS {
            return Err(ReportError::TooShort {
                len: segments.len(),
            });
        }

        let modifier = parse_hex_byte(0, &segments[0])?;

        let end = segments.len().min(BOOT_REPORT_LEN);
        let mut keys = BTreeSet::new();
        for (index, segment) in segments.iter().enumerate().take(end).skip(2) {
            // Empty slots (e.g. "02::04") carry no key
            if segment.is_empty() {
                continue;
            }
            let code = parse_hex_byte(index, segment)?;
            if code != 0 {
                keys.insert(code);
            }
        }

        Ok(Self { modifier, keys })
    }

    /// Whether either shift key is held
    pub fn shift_active(&self) -> bool {
        self.modifier & modifier::SHIFT_MASK != 0
    }
}

impl FromStr for HidReport {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Split a report line into byte segments.
///
/// Colon-delimited input splits on `:`; anything else is chunked into
/// 2-character groups (an odd trailing character forms its own group).
pub fn split_segments(line: &str) -> Vec<String> {
    if line.is_empty() {
        return Vec::new();
    }
    if line.contains(':') {
        return line.split(':').map(str::to_owned).collect();
    }
    let chars: Vec<char> = line.chars().collect();
    chars.chunks(2).map(|pair| pair.iter().collect()).collect()
}

fn parse_hex_byte(index: usize, segment: &str) -> Result<u8, ReportError> {
    let invalid = || ReportError::InvalidHex {
        index,
        segment: segment.to_owned(),
    };
    // from_str_radix alone would accept a leading '+'
    if segment.is_empty() || segment.len() > 2 || !segment.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return Err(invalid());
    }
    u8::from_str_radix(segment, 16).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_colon_delimited() {
        let report = HidReport::parse("02:00:04:00:00:00:00:00").unwrap();
        assert_eq!(report.modifier, 0x02);
        assert_eq!(report.keys, BTreeSet::from([0x04]));
        assert!(report.shift_active());
    }

    #[test]
    fn parse_contiguous() {
        let report: HidReport = "20000405060000000".parse().unwrap();
        assert_eq!(report.modifier, 0x20);
        assert_eq!(report.keys, BTreeSet::from([0x04, 0x05, 0x06]));
    }

    #[test]
    fn colon_and_contiguous_agree() {
        let colon = HidReport::parse("22:00:2a:04:1e:00:00:39").unwrap();
        let contiguous = HidReport::parse("22002a041e000039").unwrap();
        assert_eq!(colon, contiguous);
    }

    #[test]
    fn duplicates_and_zero_collapse() {
        let report = HidReport::parse("00:00:04:04:00:05:00:00").unwrap();
        assert_eq!(report.keys, BTreeSet::from([0x04, 0x05]));
    }

    #[test]
    fn reserved_byte_is_ignored() {
        let report = HidReport::parse("00:zz:04").unwrap();
        assert_eq!(report.keys, BTreeSet::from([0x04]));
    }

    #[test]
    fn segments_past_boot_length_ignored() {
        let report = HidReport::parse("00:00:04:00:00:00:00:00:zz:05").unwrap();
        assert_eq!(report.keys, BTreeSet::from([0x04]));
    }

    #[test]
    fn empty_key_segments_skipped() {
        let report = HidReport::parse("02::04::").unwrap();
        assert_eq!(report.modifier, 0x02);
        assert_eq!(report.keys, BTreeSet::from([0x04]));
    }

    #[test]
    fn too_short() {
        assert_eq!(
            HidReport::parse("02:00"),
            Err(ReportError::TooShort { len: 2 })
        );
        assert_eq!(HidReport::parse("0200"), Err(ReportError::TooShort { len: 2 }));
        assert_eq!(HidReport::parse(""), Err(ReportError::TooShort { len: 0 }));
        assert_eq!(HidReport::parse("   "), Err(ReportError::TooShort { len: 0 }));
    }

    #[test]
    fn invalid_hex() {
        assert_eq!(
            HidReport::parse("0g:00:04"),
            Err(ReportError::InvalidHex {
                index: 0,
                segment: "0g".to_string()
            })
        );
        assert!(HidReport::parse("00:00:+4").is_err());
        assert!(HidReport::parse("00:00:104").is_err());
        assert!(HidReport::parse(":00:04").is_err());
    }

    #[test]
    fn odd_trailing_character() {
        assert_eq!(split_segments("0200041"), vec!["02", "00", "04", "1"]);
        let report = HidReport::parse("0200041").unwrap();
        assert_eq!(report.keys, BTreeSet::from([0x04, 0x01]));
    }

    #[test]
    fn from_bytes_matches_parse() {
        let bytes = [0x02, 0x00, 0x04, 0x05, 0, 0, 0, 0];
        assert_eq!(
            HidReport::from_bytes(&bytes).unwrap(),
            HidReport::parse("02:00:04:05:00:00:00:00").unwrap()
        );
        assert_eq!(
            HidReport::from_bytes(&[0x00, 0x00]),
            Err(ReportError::TooShort { len: 2 })
        );
    }

    #[test]
    fn only_shift_bits_count_as_shift() {
        assert!(!HidReport::new(modifier::LEFT_CTRL | modifier::LEFT_ALT, [4]).shift_active());
        assert!(HidReport::new(modifier::RIGHT_SHIFT, [4]).shift_active());
    }
}
