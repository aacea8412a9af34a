//! Wire types shared by the feed subscriber and the outgoing sender.
//!
//! Incoming payloads are decoded tolerantly: the pub/sub provider
//! double-encodes event data as a JSON string, `time` may be epoch
//! milliseconds or an RFC 3339 string, and missing author fields degrade
//! to placeholders instead of dropping the message.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::chat::Message;

/// JSON body of the outgoing `POST /messages` request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutgoingMessage {
    pub time: String,
    pub text: String,
    pub username: String,
}

/// Raw pub/sub frame envelope: `{event, channel?, data?}`.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope {
    pub event: String,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl Envelope {
    /// Event data as a JSON value, unwrapping the provider's
    /// string-encoded payloads. Inline objects pass through unchanged.
    pub fn payload(&self) -> Option<serde_json::Value> {
        let data = self.data.as_ref()?;
        match data.as_str() {
            Some(s) => serde_json::from_str(s).ok(),
            None => Some(data.clone()),
        }
    }
}

/// Decode an event payload into a [`Message`].
///
/// `text` is required; an absent `username` falls back to `"unknown"`, and
/// an absent or unparseable `time` falls back to `fallback_ms` (the receive
/// instant).
pub fn parse_message(data: &serde_json::Value, fallback_ms: f64) -> Option<Message> {
    let text = data.get("text").and_then(|v| v.as_str())?.to_owned();

    let username = data
        .get("username")
        .and_then(|v| v.as_str())
        .unwrap_or("unknown")
        .to_owned();

    let time = data
        .get("time")
        .and_then(time_ms)
        .unwrap_or(fallback_ms);

    Some(Message { text, username, time })
}

/// Read a `time` field as epoch milliseconds, accepting either a number or
/// an RFC 3339 string.
fn time_ms(value: &serde_json::Value) -> Option<f64> {
    if let Some(n) = value.as_f64() {
        return Some(n);
    }
    value
        .as_str()
        .and_then(crate::util::time::from_rfc3339)
}
