//! Real-time message feed subscriber.
//!
//! Speaks the Pusher WebSocket wire protocol (protocol 7) directly over a
//! `gloo-net` socket: wait for `pusher:connection_established`, subscribe
//! to the `messages` channel, answer pings, and append every `new_message`
//! event to the chat state. The feed is a lazy, non-restartable sequence —
//! there is no reconnect, and a dropped socket simply ends the session's
//! live updates.
//!
//! Frame decoding is pure and lives here so it can be unit tested without
//! a browser; only the socket loop is gated behind the `csr` feature.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::net::types::{Envelope, parse_message};
use crate::state::chat::Message;

/// Pub/sub channel carrying chat traffic.
pub const CHANNEL: &str = "messages";
/// Event name for broadcast chat messages.
pub const EVENT: &str = "new_message";

/// Pusher application key baked in at compile time; the widget has no
/// config surface.
const APP_KEY: &str = "de504dc5763aeef9ff52";
const APP_CLUSTER: &str = "mt1";

/// A decoded feed frame, reduced to the cases the widget reacts to.
#[derive(Clone, Debug, PartialEq)]
pub enum FeedEvent {
    /// Handshake done; time to subscribe.
    Established,
    /// Subscription acknowledged by the provider.
    Subscribed,
    /// Keepalive probe; must be answered with a pong.
    Ping,
    /// A chat message broadcast on our channel/event pair.
    Message(Message),
    /// Anything else (other events, other channels).
    Other,
}

/// WebSocket endpoint for the feed connection.
pub fn feed_url() -> String {
    format!(
        "wss://ws-{APP_CLUSTER}.pusher.com/app/{APP_KEY}?protocol=7&client=pocket-chat&version={}",
        env!("CARGO_PKG_VERSION")
    )
}

/// Subscription request for [`CHANNEL`].
pub fn subscribe_frame() -> String {
    serde_json::json!({
        "event": "pusher:subscribe",
        "data": { "channel": CHANNEL }
    })
    .to_string()
}

/// Keepalive response.
pub fn pong_frame() -> String {
    serde_json::json!({ "event": "pusher:pong", "data": {} }).to_string()
}

/// Decode one raw text frame. `now_ms` stamps messages whose payload lacks
/// a usable `time`.
pub fn decode_frame(text: &str, now_ms: f64) -> FeedEvent {
    let Ok(envelope) = serde_json::from_str::<Envelope>(text) else {
        return FeedEvent::Other;
    };

    match envelope.event.as_str() {
        "pusher:connection_established" => FeedEvent::Established,
        "pusher:ping" => FeedEvent::Ping,
        "pusher_internal:subscription_succeeded" => FeedEvent::Subscribed,
        EVENT => {
            // A channel mismatch means traffic for someone else's topic.
            if envelope.channel.as_deref().is_some_and(|c| c != CHANNEL) {
                return FeedEvent::Other;
            }
            envelope
                .payload()
                .and_then(|data| parse_message(&data, now_ms))
                .map_or(FeedEvent::Other, FeedEvent::Message)
        }
        _ => FeedEvent::Other,
    }
}

/// Spawn the feed subscriber as a local async task appending into `chat`.
#[cfg(feature = "csr")]
pub fn spawn_feed(chat: leptos::prelude::RwSignal<crate::state::chat::ChatState>) {
    leptos::task::spawn_local(feed_loop(chat));
}

/// Socket loop: handshake, subscribe, then append messages until the
/// connection drops.
#[cfg(feature = "csr")]
async fn feed_loop(chat: leptos::prelude::RwSignal<crate::state::chat::ChatState>) {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message as WsMessage;
    use gloo_net::websocket::futures::WebSocket;
    use leptos::prelude::Update;

    let url = feed_url();
    let ws = match WebSocket::open(&url) {
        Ok(ws) => ws,
        Err(e) => {
            leptos::logging::warn!("feed connect failed: {e}");
            return;
        }
    };
    let (mut ws_write, mut ws_read) = ws.split();

    while let Some(frame) = ws_read.next().await {
        match frame {
            Ok(WsMessage::Text(text)) => {
                match decode_frame(&text, crate::util::time::now_ms()) {
                    FeedEvent::Established => {
                        if ws_write.send(WsMessage::Text(subscribe_frame())).await.is_err() {
                            break;
                        }
                    }
                    FeedEvent::Ping => {
                        if ws_write.send(WsMessage::Text(pong_frame())).await.is_err() {
                            break;
                        }
                    }
                    FeedEvent::Subscribed => {
                        leptos::logging::log!("subscribed to {CHANNEL}");
                    }
                    FeedEvent::Message(msg) => {
                        chat.update(|c| c.push_message(msg));
                    }
                    FeedEvent::Other => {}
                }
            }
            Ok(WsMessage::Bytes(_)) => {}
            Err(e) => {
                leptos::logging::warn!("feed recv error: {e}");
                break;
            }
        }
    }

    leptos::logging::log!("feed closed");
}
