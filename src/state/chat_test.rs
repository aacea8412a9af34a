#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Seed state
// =============================================================

#[test]
fn seeded_state_has_two_placeholder_messages() {
    let state = ChatState::seeded(1000.0);
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].text, "Hi there!");
    assert_eq!(state.messages[1].text, "How is it going?");
    assert!(state.messages.iter().all(|m| m.username == "pusher"));
    assert!(state.messages.iter().all(|m| m.time == 1000.0));
}

#[test]
fn seeded_state_is_not_joined() {
    let state = ChatState::seeded(0.0);
    assert!(!state.has_joined());
}

// =============================================================
// Username tracking
// =============================================================

#[test]
fn join_sets_username() {
    let mut state = ChatState::seeded(0.0);
    state.join("alice");
    assert!(state.has_joined());
    assert_eq!(state.username, "alice");
}

#[test]
fn join_trims_whitespace() {
    let mut state = ChatState::seeded(0.0);
    state.join("  bob  ");
    assert_eq!(state.username, "bob");
}

#[test]
fn blank_join_does_not_transition() {
    let mut state = ChatState::seeded(0.0);
    state.join("   ");
    assert!(!state.has_joined());
}

// =============================================================
// Message accumulation
// =============================================================

#[test]
fn pushed_messages_follow_seeds_in_arrival_order() {
    let mut state = ChatState::seeded(0.0);
    state.push_message(Message {
        text: "first".to_owned(),
        username: "alice".to_owned(),
        time: 10.0,
    });
    state.push_message(Message {
        text: "second".to_owned(),
        username: "bob".to_owned(),
        time: 20.0,
    });

    assert_eq!(state.messages.len(), 4);
    // Seeds stay as an in-order prefix.
    assert_eq!(state.messages[0].text, "Hi there!");
    assert_eq!(state.messages[1].text, "How is it going?");
    assert_eq!(state.messages[2].text, "first");
    assert_eq!(state.messages[3].text, "second");
}
