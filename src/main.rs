//! usb2text CLI
//!
//! Decodes USB HID keyboard reports (hex, one per line) into typed text.

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use usb2text::output::{self, OutputFormat};
use usb2text::source::{self, InputSource};

mod cli;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("usb2text={level}").parse()?)
                .add_directive(format!("usb2text_decoder={level}").parse()?),
        )
        .init();

    let source = InputSource::from_arg(&cli.input);
    let run = source::decode_source(&source)?;

    let format: OutputFormat = cli.format.into();
    output::render(&mut io::stdout().lock(), &run, format)?;

    if run.stats.skipped > 0 {
        info!("Skipped {} malformed line(s)", run.stats.skipped);
    }

    if let Some(path) = &cli.output {
        output::save_resolved(path, &run.resolved)?;
    }

    Ok(())
}
