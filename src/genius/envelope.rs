//! Envelope decoding.
//!
//! Every Genius response has the same outer shape:
//!
//! ```json
//! {
//!   "meta": { "status": 200 },
//!   "response": { "song": { ... } }
//! }
//! ```
//!
//! Failures carry a message and usually no `response`:
//!
//! ```json
//! { "meta": { "status": 404, "message": "Not found" } }
//! ```
//!
//! [`decode`] checks the status first, then decodes `response` into the
//! [`Payload`] for the caller's [`ResponseKind`]. It never touches bodies;
//! [`Envelope::normalize`] (or [`decode_normalized`]) does that afterwards.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::body::TextFormat;
use super::kind::{Payload, ResponseKind};
use super::normalize::Normalize;
use crate::error::{DecodeError, Result, ShapeError};

/// The only status the API uses for success.
pub const STATUS_OK: i64 = 200;

/// `meta` block of every response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Meta {
    pub status: i64,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawEnvelope {
    meta: Option<Meta>,
    response: Option<Value>,
}

/// Decoding switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Reject a response holding none of the keys the requested kind reads,
    /// instead of returning an empty entity.
    pub strict: bool,
}

/// A successfully decoded response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub status: i64,
    /// Informational only on success
    pub message: Option<String>,
    pub payload: Payload,
}

impl Envelope {
    /// Run the body normalizer over the payload.
    pub fn normalize(&mut self, format: TextFormat) -> std::result::Result<(), ShapeError> {
        self.payload.normalize(format)
    }

    pub fn kind(&self) -> ResponseKind {
        self.payload.kind()
    }

    pub fn into_payload(self) -> Payload {
        self.payload
    }
}

/// Decode `bytes` as a `kind` response with default options.
pub fn decode(bytes: &[u8], kind: ResponseKind) -> std::result::Result<Envelope, DecodeError> {
    decode_with(bytes, kind, DecodeOptions::default())
}

/// Decode `bytes` as a `kind` response.
pub fn decode_with(
    bytes: &[u8],
    kind: ResponseKind,
    options: DecodeOptions,
) -> std::result::Result<Envelope, DecodeError> {
    tracing::debug!(%kind, len = bytes.len(), strict = options.strict, "Decoding envelope");

    let raw: RawEnvelope = serde_json::from_slice(bytes)?;
    let meta = raw.meta.ok_or(DecodeError::MissingKey("meta"))?;

    if meta.status != STATUS_OK {
        tracing::debug!(status = meta.status, message = ?meta.message, "API reported failure");
        return Err(DecodeError::Status {
            status: meta.status,
            message: meta.message,
        });
    }

    let response = match raw.response {
        None | Some(Value::Null) => return Err(DecodeError::MissingKey("response")),
        Some(Value::Object(response)) => response,
        Some(_) => return Err(DecodeError::NotAnObject("response")),
    };

    if !kind.matches(&response) {
        if options.strict {
            return Err(DecodeError::KindMismatch {
                kind,
                present: response.keys().cloned().collect(),
            });
        }
        tracing::debug!(%kind, "Response has none of the expected keys, payload will be empty");
    }

    let payload = Payload::from_response(kind, response)?;
    tracing::trace!(%kind, "Envelope decoded");

    Ok(Envelope {
        status: meta.status,
        message: meta.message,
        payload,
    })
}

/// Decode and normalize in one go.
pub fn decode_normalized(bytes: &[u8], kind: ResponseKind, format: TextFormat) -> Result<Envelope> {
    Decoder::new(format).decode(bytes, kind)
}

/// Decoder bound to the text format and options of the originating request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decoder {
    pub text_format: TextFormat,
    pub options: DecodeOptions,
}

impl Decoder {
    pub fn new(text_format: TextFormat) -> Self {
        Self {
            text_format,
            options: DecodeOptions::default(),
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    /// Envelope decoding followed by one normalization pass.
    pub fn decode(&self, bytes: &[u8], kind: ResponseKind) -> Result<Envelope> {
        let mut envelope = decode_with(bytes, kind, self.options)?;
        envelope.normalize(self.text_format)?;
        Ok(envelope)
    }
}


/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use crate::test_utils::{envelope_bytes, error_envelope_bytes};
    use proptest::prelude::*;
    use serde_json::json;

    fn response_kind() -> impl Strategy<Value = ResponseKind> {
        prop::sample::select(ResponseKind::ALL.to_vec())
    }

    proptest! {
        /// Any non-200 status fails with the message verbatim
        #[test]
        fn non_success_status_always_fails(
            status in prop_oneof![100i64..600, any::<i64>()].prop_filter("not 200", |s| *s != STATUS_OK),
            message in "[ -~]{0,40}",
            kind in response_kind(),
        ) {
            let bytes = error_envelope_bytes(status, &message);
            let err = decode(&bytes, kind).unwrap_err();
            prop_assert_eq!(err.api_message(), Some(message.as_str()));
            let is_status = matches!(err, DecodeError::Status { status: s, .. } if s == status);
            prop_assert!(is_status);
        }

        /// Status 200 always decodes, whatever the message
        #[test]
        fn success_always_decodes(
            message in proptest::option::of("[ -~]{0,40}"),
            kind in response_kind(),
        ) {
            let bytes = envelope_bytes(json!({}), message.as_deref());
            let envelope = decode(&bytes, kind).unwrap();
            prop_assert_eq!(envelope.kind(), kind);
            prop_assert_eq!(envelope.message, message);
        }
    }
}
