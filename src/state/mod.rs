//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! There is a single session-state domain (`chat`) holding the message log
//! and the joined username. Components read it through an
//! `RwSignal<ChatState>` provided via context by the root component.

pub mod chat;
