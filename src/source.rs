//! Report line sources
//!
//! Reads textual HID reports from stdin or a text file, one per line, as
//! emitted by capture dissectors (e.g. `tshark -T fields -e usbhid.data`).
//! Lines are trimmed and blank lines dropped; invalid UTF-8 is replaced.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::info;
use usb2text_decoder::{DecodeOutput, Session};

/// Where report lines come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Interpret a CLI argument: "-" is stdin, anything else a path
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Open the source for buffered reading
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            Self::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            Self::File(path) => {
                if !path.exists() {
                    bail!("'{}' not found", path.display());
                }
                let file = File::open(path)
                    .with_context(|| format!("Failed to open {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Stdin => "stdin".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Iterator over trimmed, non-blank lines of a reader
pub struct ReportLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> ReportLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for ReportLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {
                    let line = String::from_utf8_lossy(&self.buf);
                    let line = line.trim();
                    if !line.is_empty() {
                        return Some(Ok(line.to_string()));
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Decode every report line from a reader, in order
pub fn decode_reader<R: BufRead>(reader: R) -> Result<DecodeOutput> {
    let mut session = Session::new();
    for line in ReportLines::new(reader) {
        let line = line.context("Failed to read input")?;
        // Malformed lines are counted by the session and skipped
        let _ = session.feed_line(&line);
    }
    Ok(session.finish())
}

/// Open a source and decode it
pub fn decode_source(source: &InputSource) -> Result<DecodeOutput> {
    info!("Starting: {}", source.describe());
    let reader = source.open()?;
    decode_reader(reader)
}
