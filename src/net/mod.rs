//! Network layer: wire types, the real-time feed subscriber, and the
//! outgoing message sender.

pub mod feed;
pub mod outbox;
pub mod types;
