//! Maps a raw model completion into domain itineraries
//!
//! The model is asked for a bare JSON array but often wraps it in a fenced
//! ```json block with prose around it. Extraction is forgiving (fall back to
//! the whole string when fencing is absent); decoding is strict.

use tracing::debug;
use uuid::Uuid;

use super::LlmError;
use crate::domain::{Itinerary, RawItinerary};

/// Opening marker for a fenced JSON payload
const FENCE_OPEN: &str = "```json";
/// Bare closing fence
const FENCE_CLOSE: &str = "```";

/// Extract the fenced JSON payload, or the whole string when unfenced
///
/// The closing fence is searched strictly after the opening one. If either
/// marker is missing the raw string is returned verbatim - some model
/// responses omit fencing entirely, and that is not an error.
pub fn extract_json_block(raw: &str) -> &str {
    match raw.find(FENCE_OPEN) {
        Some(start) => {
            let payload_start = start + FENCE_OPEN.len();
            match raw[payload_start..].find(FENCE_CLOSE) {
                Some(end) => raw[payload_start..payload_start + end].trim(),
                None => raw,
            }
        }
        None => raw,
    }
}

/// Decode a completion into itineraries, assigning fresh ids
///
/// Decoding failure (malformed syntax, wrong shape, missing required field)
/// is a hard failure - no partial recovery. Every record gets a freshly
/// generated id so two separate searches can never collide, even when the
/// model echoes ids back. Array order is preserved.
pub fn map_response(text: &str) -> Result<Vec<Itinerary>, LlmError> {
    debug!(text_len = text.len(), "map_response: called");
    let payload = extract_json_block(text);
    let raw: Vec<RawItinerary> = serde_json::from_str(payload)?;

    debug!(count = raw.len(), "map_response: decoded itineraries");
    Ok(raw
        .into_iter()
        .map(|itinerary| itinerary.with_id(Uuid::now_v7().to_string()))
        .collect())
}
