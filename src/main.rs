//! Genius Decode - inspect saved Genius API responses from the command line.
//!
//! Decodes a response file as a given endpoint kind, normalizes its bodies
//! with the requested text format, and prints a summary or the payload.

use clap::Parser;
use genius_decode::cli;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("genius_decode=info".parse()?))
        .init();

    cli::run_command(&args)
}
