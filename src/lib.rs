//! Genius Decode - typed decoding for Genius API responses.
//!
//! Turns raw response bytes into strongly-typed artists, songs, annotations,
//! users, song lists, search results and web pages, and resolves the
//! format-dependent body fields those entities carry.

pub mod cli;
pub mod config;
pub mod error;
pub mod genius;
#[cfg(test)]
pub mod test_utils;

pub use error::{DecodeError, Error, Result, ShapeError};
pub use genius::{Decoder, Envelope, Payload, ResponseKind, TextFormat};
