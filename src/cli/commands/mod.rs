//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `decode`: decode a saved response file and summarize or re-emit it
//! - `settings`: show or initialise the config file

mod decode;
mod settings;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config;
use crate::genius::{ResponseKind, TextFormat};

pub use decode::cmd_decode;
pub use settings::{cmd_config, cmd_kinds};

/// Genius Decode CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Decode a saved API response file
    Decode {
        /// Path to the JSON response ("-" reads stdin)
        path: PathBuf,
        /// Endpoint the response came from (artist, artist-songs, song, search, annotation, user, web-page)
        #[arg(short, long)]
        kind: ResponseKind,
        /// text_format the request used (plain, html, dom); defaults to the config value
        #[arg(short, long, env = "GENIUS_TEXT_FORMAT")]
        format: Option<TextFormat>,
        /// Fail when the response holds none of the keys the kind reads
        #[arg(long)]
        strict: bool,
        /// Print the decoded payload as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Show the config file location and effective settings
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
    /// List endpoint kinds and the response keys each one reads
    Kinds,
}

/// Run the parsed command.
pub fn run_command(args: &Cli) -> anyhow::Result<()> {
    match &args.command {
        Commands::Decode {
            path,
            kind,
            format,
            strict,
            json,
        } => {
            let config = config::load();
            let mut decoder = config.decoder();
            if let Some(format) = format {
                decoder.text_format = *format;
            }
            if *strict {
                decoder = decoder.strict(true);
            }
            cmd_decode(path, *kind, decoder, *json)
        }
        Commands::Config { init } => cmd_config(*init),
        Commands::Kinds => {
            cmd_kinds();
            Ok(())
        }
    }
}
