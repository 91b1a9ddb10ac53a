//! Integration tests for reading report lines and rendering results.
//!
//! These run captured-style input through `source::decode_reader` and check
//! what ends up on stdout and in the saved output file.

use std::io::Cursor;

use usb2text::output::{self, OutputFormat, MARKED_HEADING, RESOLVED_HEADING};
use usb2text::source::decode_reader;

// Shift+h, i, backspace, o, enter — as tshark prints usbhid.data
const CAPTURE: &str = "\
02:00:0b:00:00:00:00:00
00:00:00:00:00:00:00:00
00:00:0c:00:00:00:00:00
00:00:00:00:00:00:00:00
00:00:2a:00:00:00:00:00
00:00:00:00:00:00:00:00
00:00:12:00:00:00:00:00
00:00:28:00:00:00:00:00
00:00:00:00:00:00:00:00
";

#[test]
fn text_output_has_both_sections() {
    let run = decode_reader(Cursor::new(CAPTURE)).unwrap();
    assert_eq!(run.resolved, "Ho\n");
    assert_eq!(run.marked, "[CAPS]ho\n");

    let mut buf = Vec::new();
    output::render(&mut buf, &run, OutputFormat::Text).unwrap();
    let text = String::from_utf8(buf).unwrap();

    let expected = format!("\n{MARKED_HEADING}\n\n[CAPS]ho\n\n\n{RESOLVED_HEADING}\n\nHo\n\n");
    assert_eq!(text, expected);
}

#[test]
fn json_output_carries_stats() {
    let run = decode_reader(Cursor::new(CAPTURE)).unwrap();

    let mut buf = Vec::new();
    output::render(&mut buf, &run, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

    assert_eq!(value["resolved"], "Ho\n");
    assert_eq!(value["marked"], "[CAPS]ho\n");
    assert_eq!(value["stats"]["lines"], 9);
    assert_eq!(value["stats"]["reports"], 9);
    assert_eq!(value["stats"]["skipped"], 0);
    assert_eq!(value["stats"]["keystrokes"], 4);
    assert_eq!(value["stats"]["backspaces"], 1);
    assert_eq!(value["stats"]["caps_toggles"], 0);
}

#[test]
fn mixed_encodings_and_noise() {
    let input = "\
0000170000000000

not a report
00:00:17:00:00:00:00:00
00
0000000000000000
00:00:17:00:00:00:00:00
";
    let run = decode_reader(Cursor::new(input)).unwrap();
    assert_eq!(run.resolved, "tt");
    assert_eq!(run.stats.lines, 6);
    assert_eq!(run.stats.skipped, 2);
}

#[test]
fn save_resolved_appends_newline() {
    let path = std::env::temp_dir().join(format!("usb2text-{}.txt", std::process::id()));
    output::save_resolved(&path, "secret").unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(written, "secret\n");
}
