//! Test utilities and fixtures for genius-decode tests.
//!
//! Builders for response envelopes plus a realistic song response that
//! exercises most of the entity graph.
//!
//! # Example
//!
//! ```ignore
//! use genius_decode::test_utils::envelope_bytes;
//!
//! let bytes = envelope_bytes(json!({"song": {"id": 1}}), None);
//! let envelope = decode(&bytes, ResponseKind::Song)?;
//! ```

use std::io;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

/// Wrap `response` in a status 200 envelope.
pub fn envelope_bytes(response: Value, message: Option<&str>) -> Vec<u8> {
    let mut meta = json!({"status": 200});
    if let Some(message) = message {
        meta["message"] = Value::String(message.to_string());
    }
    serde_json::to_vec(&json!({"meta": meta, "response": response}))
        .expect("Failed to serialize test envelope")
}

/// A failure envelope, without a `response` key.
pub fn error_envelope_bytes(status: i64, message: &str) -> Vec<u8> {
    serde_json::to_vec(&json!({"meta": {"status": status, "message": message}}))
        .expect("Failed to serialize test envelope")
}

/// A song lookup response with `body`/`description` fields in `format`.
///
/// `text` is the value placed under each body key, so passing a JSON object
/// produces `dom`-style bodies.
pub fn song_response(format: &str, text: Value) -> Value {
    let body = json!({ format: text });
    json!({
        "song": {
            "_type": "song",
            "id": 378195,
            "title": "Sample Song",
            "full_title": "Sample Song by Lead Artist (Ft. Guest)",
            "description": body,
            "release_date_components": {"year": 2012, "month": 7, "day": 17},
            "stats": {"pageviews": 1234, "hot": false},
            "primary_artist": {
                "id": 1,
                "name": "Lead Artist",
                "description": body,
                "user": {"id": 101, "login": "lead"}
            },
            "featured_artists": [{"id": 2, "name": "Guest"}],
            "producer_artists": [{"id": 3, "name": "Producer"}],
            "writer_artists": [{"id": 1, "name": "Lead Artist"}],
            "media": [{"provider": "youtube", "type": "video", "url": "https://youtube.com/watch?v=1"}],
            "album": {"id": 10, "name": "Sample Album", "artist": {"id": 1, "name": "Lead Artist"}},
            "description_annotation": {
                "_type": "referent",
                "id": 55,
                "annotatable": {"type": "Song", "id": 378195, "title": "Sample Song"},
                "annotations": [{
                    "id": 66,
                    "body": body,
                    "state": "accepted",
                    "votes_total": 3,
                    "authors": [{"attribution": 1.0, "pinned_role": null, "user": {"id": 7}}],
                    "verified_by": null
                }]
            },
            "song_relationships": [{"type": "samples", "songs": [{"id": 900, "title": "Older Song"}]}]
        }
    })
}

/// Log sink shared between a test subscriber and the assertions.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("Log buffer poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a trace-level subscriber and return everything it logged.
pub fn capture_logs(f: impl FnOnce()) -> String {
    let captured = CapturedLogs::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = captured.0.lock().expect("Log buffer poisoned").clone();
    String::from_utf8_lossy(&bytes).into_owned()
}
