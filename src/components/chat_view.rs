//! Chat screen: scrollable message list plus the send bar.

use leptos::prelude::*;

use crate::components::message_bubble::MessageBubble;
use crate::components::phone_frame::PhoneFrame;
use crate::net::outbox::SendDebounce;
use crate::state::chat::ChatState;

/// Chat view shown once a username is set. Renders the message list inside
/// the phone frame and wires both send triggers (form submit and the
/// paper-plane click) through one debounced handler.
#[component]
pub fn ChatView() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let debounce = RwSignal::new(SendDebounce::default());
    let list_ref = NodeRef::<leptos::html::Div>::new();

    // Post-render hook: when the message list grows, pin it to the bottom
    // and clear the input box.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = list_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
            input.set(String::new());
        }
    });

    let do_send = move || {
        // Capture the input and username at trigger time; the post-render
        // hook may clear the input box while the quiet window elapses.
        let text = input.get_untracked();
        let username = chat.get_untracked().username;

        // Arm a fresh ticket; earlier triggers in the same burst go stale.
        let mut gate = debounce.get_untracked();
        let ticket = gate.arm();
        debounce.set(gate);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use crate::net::outbox::{SEND_DEBOUNCE_MS, compose, post_message};

            let window = std::time::Duration::from_millis(SEND_DEBOUNCE_MS);
            gloo_timers::future::sleep(window).await;
            if !debounce.get_untracked().is_current(ticket) {
                return;
            }

            let Some(body) = compose(&text, &username, crate::util::time::now_ms()) else {
                return;
            };

            post_message(&body).await;
            input.set(String::new());
        });

        #[cfg(not(feature = "csr"))]
        let _ = (text, username, ticket);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    let on_click = move |_| do_send();

    view! {
        <PhoneFrame>
            <div class="light-grey-blue-background chat-app">
                <div id="message-list" node_ref=list_ref>
                    <div class="time-divide" style="margin-top: 15px">
                        <span class="date">"Today"</span>
                    </div>
                    {move || {
                        chat.get()
                            .messages
                            .iter()
                            .map(|msg| view! { <MessageBubble message=msg.clone()/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <div class="action-bar">
                    <form class="messages-form" on:submit=on_submit>
                        <input
                            class="input-message col-xs-10"
                            type="text"
                            placeholder="Your message"
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                        />
                        <div class="option col-xs-1 green-background send-message" on:click=on_click>
                            <span class="white light fa fa-paper-plane-o"></span>
                        </div>
                    </form>
                </div>
            </div>
        </PhoneFrame>
    }
}
