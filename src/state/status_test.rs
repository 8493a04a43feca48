use super::*;

// =============================================================
// StatusState lifecycle
// =============================================================

#[test]
fn status_starts_idle() {
    let state = StatusState::default();
    assert!(state.current.is_none());
}

#[test]
fn show_makes_message_visible() {
    let mut state = StatusState::default();
    state.show("Signed up a@x.com for Chess Club", StatusKind::Success);
    let msg = state.current.as_ref().unwrap();
    assert_eq!(msg.text, "Signed up a@x.com for Chess Club");
    assert_eq!(msg.kind, StatusKind::Success);
}

#[test]
fn show_hands_out_increasing_tickets() {
    let mut state = StatusState::default();
    let first = state.show("one", StatusKind::Success);
    let second = state.show("two", StatusKind::Error);
    assert!(second > first);
}

#[test]
fn current_ticket_clears_its_message() {
    let mut state = StatusState::default();
    let ticket = state.show("done", StatusKind::Success);
    state.clear_if(ticket);
    assert!(state.current.is_none());
}

#[test]
fn stale_ticket_never_clears_a_newer_message() {
    let mut state = StatusState::default();
    let stale = state.show("first", StatusKind::Success);
    state.show("second", StatusKind::Error);

    // The first message's timer fires after being superseded.
    state.clear_if(stale);

    let msg = state.current.as_ref().unwrap();
    assert_eq!(msg.text, "second");
}

#[test]
fn region_is_reusable_after_clearing() {
    let mut state = StatusState::default();
    let ticket = state.show("first", StatusKind::Error);
    state.clear_if(ticket);
    state.show("second", StatusKind::Success);
    assert_eq!(state.current.as_ref().unwrap().text, "second");
}

#[test]
fn visibility_window_is_five_seconds() {
    assert_eq!(STATUS_VISIBLE_MS, 5000);
}
