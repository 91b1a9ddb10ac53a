// CLI definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "usb2text")]
#[command(author, version, about = "Decode USB HID keyboard reports into text")]
pub struct Cli {
    /// Text file with one hex report per line, or "-" for stdin
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Save resolved text to a file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Log skipped lines and unmapped usage codes
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl From<Format> for usb2text::output::OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => Self::Text,
            Format::Json => Self::Json,
        }
    }
}
