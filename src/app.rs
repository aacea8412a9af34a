//! Root application component: context providers and the view switch.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::chat_view::ChatView;
use crate::components::name_entry::NameEntry;
use crate::state::chat::ChatState;

/// Root component.
///
/// Provides the shared session state, starts the real-time feed, and
/// switches between the name-entry form and the chat view. The switch is
/// one-way: `has_joined` never goes back to false within a session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let chat = RwSignal::new(ChatState::default());
    provide_context(chat);

    #[cfg(feature = "csr")]
    crate::net::feed::spawn_feed(chat);

    view! {
        <Title text="Pocket Chat"/>

        <div class="app">
            <Show when=move || chat.get().has_joined() fallback=|| view! { <NameEntry/> }>
                <ChatView/>
            </Show>
        </div>
    }
}
