//! Leptos view components for the chat widget.

pub mod chat_view;
pub mod message_bubble;
pub mod name_entry;
pub mod phone_frame;
