//! A single chat bubble: avatar, author, time of day, and text.

use leptos::prelude::*;

use crate::state::chat::Message;
use crate::util::avatar::avatar_url;
use crate::util::time::format_clock;

/// One message row in the chat list.
#[component]
pub fn MessageBubble(message: Message) -> impl IntoView {
    let avatar = avatar_url(&message.username);
    let stamp = format_clock(message.time);

    view! {
        <div class="message">
            <div class="avatar">
                <img src=avatar/>
            </div>
            <div class="text-display">
                <div class="message-data">
                    <span class="author">{message.username}</span>
                    <span class="timestamp">{stamp}</span>
                    <span class="seen"></span>
                </div>
                <p class="message-body">{message.text}</p>
            </div>
        </div>
    }
}
