//! Output rendering for decoded runs

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;
use usb2text_decoder::{DecodeOutput, DecodeStats};

/// Output format for stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub const MARKED_HEADING: &str = "=== HID with [CAPS] Markers ===";
pub const RESOLVED_HEADING: &str = "=== Resolved Text ===";

/// A decoded run for JSON output
#[derive(Debug, Serialize)]
struct DecodedRun<'a> {
    marked: &'a str,
    resolved: &'a str,
    stats: DecodeStats,
}

/// Write both decoded streams in the requested format
pub fn render<W: Write>(out: &mut W, run: &DecodeOutput, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "\n{MARKED_HEADING}\n")?;
            writeln!(out, "{}", run.marked)?;
            writeln!(out, "\n{RESOLVED_HEADING}\n")?;
            writeln!(out, "{}", run.resolved)?;
        }
        OutputFormat::Json => {
            let decoded = DecodedRun {
                marked: &run.marked,
                resolved: &run.resolved,
                stats: run.stats,
            };
            serde_json::to_writer(&mut *out, &decoded)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Save the resolved text (with trailing newline) to a file
pub fn save_resolved(path: &Path, resolved: &str) -> Result<()> {
    fs::write(path, format!("{resolved}\n"))
        .with_context(|| format!("ERROR writing {}", path.display()))?;
    info!("Saved to {}", path.display());
    Ok(())
}
