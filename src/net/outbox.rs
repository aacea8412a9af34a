//! Outgoing message composer and sender.
//!
//! Send triggers (form submit or button click) funnel through a trailing
//! debounce: each trigger arms a new ticket, waits out the window, and only
//! the still-current ticket posts. Bursts of duplicate triggers for one
//! logical action therefore collapse to a single request. Empty input never
//! produces a request at all.
//!
//! The HTTP send is fire-and-forget: the response is ignored and failures
//! are only logged.

#[cfg(test)]
#[path = "outbox_test.rs"]
mod outbox_test;

use crate::net::types::OutgoingMessage;

/// Endpoint the widget posts new messages to.
pub const ENDPOINT: &str = "http://localhost:4567/messages";

/// Quiet window for coalescing duplicate send triggers.
pub const SEND_DEBOUNCE_MS: u64 = 10;

/// Build the outgoing request body, or `None` when there is nothing to
/// send (empty or whitespace-only input).
pub fn compose(text: &str, username: &str, now_ms: f64) -> Option<OutgoingMessage> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    Some(OutgoingMessage {
        time: crate::util::time::to_rfc3339(now_ms),
        text: text.to_owned(),
        username: username.to_owned(),
    })
}

/// Trailing-debounce ticket gate.
///
/// Every trigger calls [`arm`](Self::arm) and gets a ticket; after the
/// quiet window only the latest ticket [`is_current`](Self::is_current),
/// so earlier triggers in the burst drop out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SendDebounce {
    seq: u64,
}

impl SendDebounce {
    /// Register a trigger and return its ticket.
    pub fn arm(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    /// Whether `ticket` is still the latest trigger.
    pub fn is_current(self, ticket: u64) -> bool {
        self.seq == ticket
    }
}

/// POST the message to [`ENDPOINT`]. Response ignored, no retry.
#[cfg(feature = "csr")]
pub async fn post_message(message: &OutgoingMessage) {
    let request = match gloo_net::http::Request::post(ENDPOINT).json(message) {
        Ok(request) => request,
        Err(e) => {
            leptos::logging::warn!("send encode failed: {e}");
            return;
        }
    };

    if let Err(e) = request.send().await {
        leptos::logging::warn!("send failed: {e}");
    }
}
