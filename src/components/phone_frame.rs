//! Static phone-device chrome wrapped around the chat screen.
//!
//! The class names come from the marvel-devices CSS kit pulled in by
//! `index.html`; everything except `screen` is cosmetic bezel.

use leptos::prelude::*;

/// Phone-shaped visual frame; `children` render inside the screen.
#[component]
pub fn PhoneFrame(children: Children) -> impl IntoView {
    view! {
        <div class="marvel-device iphone6 silver">
            <div class="top-bar"></div>
            <div class="sleep"></div>
            <div class="volume"></div>
            <div class="camera"></div>
            <div class="sensor"></div>
            <div class="speaker"></div>
            <div class="screen">{children()}</div>
            <div class="home"></div>
            <div class="bottom-bar"></div>
        </div>
    }
}
