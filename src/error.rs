//! Error types for decoding Genius responses.
//!
//! This module provides the error hierarchy for the crate.
//! The decoding layer uses specific error types via `thiserror`, while
//! the CLI binary uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`DecodeError`]: malformed envelope or non-success status
//! - [`ShapeError`]: a body field did not match the requested text format
//! - [`Error`]: top-level enum aggregating both plus I/O and config errors
//!
//! Decoding into the wrong [`ResponseKind`](crate::genius::ResponseKind) is
//! not an error: the payload carries no discriminator, so the result is an
//! all-empty entity. [`DecodeOptions::strict`](crate::genius::DecodeOptions)
//! opts into [`DecodeError::KindMismatch`] instead.

use std::path::PathBuf;

use crate::genius::{ResponseKind, TextFormat};

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning response bytes into an [`Envelope`](crate::genius::Envelope).
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Bytes are not JSON, or the envelope has the wrong JSON types
    #[error("Malformed envelope: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A required envelope key is absent
    #[error("Envelope is missing required key \"{0}\"")]
    MissingKey(&'static str),

    /// A key that must hold a JSON object holds something else
    #[error("Envelope key \"{0}\" is not a JSON object")]
    NotAnObject(&'static str),

    /// `meta.status` was anything other than 200
    #[error("API returned status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: i64, message: Option<String> },

    /// The payload for the requested kind has a field of the wrong JSON type
    #[error("Failed to decode {kind} payload: {source}")]
    Payload {
        kind: ResponseKind,
        #[source]
        source: serde_json::Error,
    },

    /// Strict mode only: none of the keys the requested kind reads are present
    #[error("Response does not look like a {kind} payload (keys present: {present:?})")]
    KindMismatch {
        kind: ResponseKind,
        present: Vec<String>,
    },
}

impl DecodeError {
    /// Message text reported by the API, if this is a status failure.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Errors raised by the body normalizer when a raw body cannot be read
/// the way the requested text format implies.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    /// The selected entry is not a JSON string
    #[error("Body key \"{key}\" should hold {format} text but holds a JSON {found}")]
    NotText {
        format: TextFormat,
        key: String,
        found: &'static str,
    },

    /// Several formats are present and none matches the requested one
    #[error("Body has no \"{format}\" entry and several others to choose from: {keys:?}")]
    Ambiguous { format: TextFormat, keys: Vec<String> },
}

/// Top-level error.
///
/// Aggregates errors from all subsystems for unified handling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Envelope decoding failed
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Body normalization failed
    #[error("Shape error: {0}")]
    Shape(#[from] ShapeError),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Response file not found
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a not found error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound(path.into())
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }

    /// Whether this error (or the error it wraps) is an API status failure.
    pub fn is_status(&self) -> bool {
        match self {
            Self::Decode(DecodeError::Status { .. }) => true,
            Self::WithContext { source, .. } => source.is_status(),
            _ => false,
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, DecodeError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Decode(e).context(ctx))
    }
}
