use super::*;

// =============================================================
// Compose filtering
// =============================================================

#[test]
fn compose_builds_request_body() {
    let body = compose("hi", "bob", 1_489_585_530_000.0).expect("body");
    assert_eq!(body.text, "hi");
    assert_eq!(body.username, "bob");
    assert_eq!(body.time, "2017-03-15T13:45:30.000Z");
}

#[test]
fn compose_rejects_empty_input() {
    assert!(compose("", "bob", 0.0).is_none());
}

#[test]
fn compose_rejects_whitespace_input() {
    assert!(compose("   \n", "bob", 0.0).is_none());
}

#[test]
fn compose_trims_message_text() {
    let body = compose("  hi  ", "bob", 0.0).expect("body");
    assert_eq!(body.text, "hi");
}

// =============================================================
// Debounce gate
// =============================================================

#[test]
fn single_trigger_is_current() {
    let mut gate = SendDebounce::default();
    let ticket = gate.arm();
    assert!(gate.is_current(ticket));
}

#[test]
fn duplicate_triggers_collapse_to_latest() {
    let mut gate = SendDebounce::default();
    let first = gate.arm();
    let second = gate.arm();

    // Only the last trigger in the burst survives the quiet window.
    assert!(!gate.is_current(first));
    assert!(gate.is_current(second));

    let sends = [first, second]
        .iter()
        .filter(|t| gate.is_current(**t))
        .count();
    assert_eq!(sends, 1);
}

#[test]
fn send_composes_from_text_captured_at_trigger_time() {
    let mut gate = SendDebounce::default();

    // Trigger: capture the input value, then arm the quiet window.
    let captured = "hi there".to_owned();
    let ticket = gate.arm();

    // While the window elapses, an incoming broadcast makes the
    // post-render hook clear the input box.
    let input_box = String::new();

    // The window closes: the ticket is still current and the send uses
    // the captured text, not the now-empty input box.
    assert!(gate.is_current(ticket));
    let body = compose(&captured, "bob", 0.0).expect("captured text sends");
    assert_eq!(body.text, "hi there");
    assert!(compose(&input_box, "bob", 0.0).is_none());
}

#[test]
fn new_burst_invalidates_old_tickets() {
    let mut gate = SendDebounce::default();
    let old = gate.arm();
    assert!(gate.is_current(old));

    let fresh = gate.arm();
    assert!(!gate.is_current(old));
    assert!(gate.is_current(fresh));
}
