//! Name-entry form shown until the visitor joins the chat.

use leptos::prelude::*;

use crate::state::chat::ChatState;

/// Display-name form. Submitting a non-blank name joins the session;
/// the transition is one-way (there is no un-join).
#[component]
pub fn NameEntry() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let name = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        chat.update(|c| c.join(&name.get_untracked()));
    };

    view! {
        <div class="name-entry">
            <p class="light white">"Enter your Twitter name and start chatting!"</p>
            <form class="username-form" on:submit=on_submit>
                <input
                    id="input-name"
                    class="swish-input"
                    type="text"
                    placeholder="Enter your Twitter name!"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <button type="submit" id="try-it-out" class="bright-blue-hover btn-white">
                    "Start chat"
                </button>
            </form>
        </div>
    }
}
