//! Command-line interface for genius-decode.
//!
//! A developer tool for inspecting saved Genius API responses: decode a
//! file as a given endpoint kind and print what came out.

mod commands;

pub use commands::{Cli, Commands, run_command};
