//! # pocket-chat
//!
//! Leptos + WASM single-page chat widget. A visitor enters a display name,
//! then trades short messages over a Pusher-protocol pub/sub channel, all
//! rendered inside a phone-shaped frame.
//!
//! This crate contains the root app component, view components, session
//! state, and the network layer (real-time feed subscriber and outgoing
//! HTTP send). Message delivery and fan-out are the pub/sub provider's
//! problem; there is no server in this repository.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;
