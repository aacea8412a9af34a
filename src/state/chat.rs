#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// A single chat message. Immutable once created; `time` is epoch
/// milliseconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub text: String,
    pub username: String,
    pub time: f64,
}

/// Session state for the chat widget.
///
/// `messages` is append-only for the lifetime of the session — no eviction.
/// An empty `username` means the visitor has not joined yet.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub messages: Vec<Message>,
    pub username: String,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::seeded(crate::util::time::now_ms())
    }
}

impl ChatState {
    /// Fresh state holding the two placeholder messages every session
    /// starts with, both stamped at `now_ms`.
    pub fn seeded(now_ms: f64) -> Self {
        let seed = |text: &str| Message {
            text: text.to_owned(),
            username: "pusher".to_owned(),
            time: now_ms,
        };

        Self {
            messages: vec![seed("Hi there!"), seed("How is it going?")],
            username: String::new(),
        }
    }

    /// Whether the visitor has entered a display name.
    pub fn has_joined(&self) -> bool {
        !self.username.is_empty()
    }

    /// Capture the submitted display name. Blank submissions are ignored,
    /// so the not-joined -> joined transition is one-way.
    pub fn join(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        self.username = name.to_owned();
    }

    /// Append a received message. Arrival order is display order.
    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }
}
