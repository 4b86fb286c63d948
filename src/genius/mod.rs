//! Typed decoding for Genius API responses.
//!
//! # Architecture
//!
//! Decoding runs in two steps:
//! - **Envelope** (`envelope.rs`) - checks `meta.status` and decodes the
//!   `response` object into the [`Payload`] for the caller's [`ResponseKind`]
//! - **Normalization** (`body.rs`, `normalize.rs`) - resolves every
//!   annotation body and description into text or a document tree, using the
//!   `text_format` the request was made with
//!
//! Entity shapes live in `dto/` and mirror the API field for field.
//! There is no transport here: callers fetch the bytes and know which
//! endpoint and text format they used.
//!
//! # Usage
//!
//! ```ignore
//! use genius_decode::genius::{decode_normalized, ResponseKind, TextFormat};
//!
//! let envelope = decode_normalized(&bytes, ResponseKind::Annotation, TextFormat::Html)?;
//! if let Some(annotation) = envelope.payload.as_annotation() {
//!     println!("{}", annotation.body.normalized_text().unwrap_or_default());
//! }
//! ```

pub mod body;
pub mod dom;
pub mod dto;
pub mod envelope;
pub mod kind;
pub mod normalize;

pub use body::{AnnotatedBody, BodyContent, RawBody, TextFormat};
pub use dom::DomNode;
pub use envelope::{
    DecodeOptions, Decoder, Envelope, Meta, STATUS_OK, decode, decode_normalized, decode_with,
};
pub use kind::{Payload, ResponseKind};
pub use normalize::Normalize;
