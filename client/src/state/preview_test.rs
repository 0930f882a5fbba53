use super::*;

#[test]
fn preview_state_default_has_no_image() {
    let state = PreviewState::default();
    assert!(!state.has_image());
    assert_eq!(state.data_url, None);
    assert_eq!(state.in_flight(), 0);
}

#[test]
fn begin_read_hands_out_increasing_tickets() {
    let mut state = PreviewState::default();
    assert_eq!(state.begin_read(), 1);
    assert_eq!(state.begin_read(), 2);
    assert_eq!(state.in_flight(), 2);
    assert!(!state.has_image());
}

#[test]
fn complete_read_stores_payload() {
    let mut state = PreviewState::default();
    let ticket = state.begin_read();
    state.complete_read(ticket, "data:image/png;base64,AAAA".to_owned());
    assert!(state.has_image());
    assert_eq!(state.data_url.as_deref(), Some("data:image/png;base64,AAAA"));
    assert_eq!(state.last_completed, Some(ticket));
    assert_eq!(state.in_flight(), 0);
}

#[test]
fn later_completion_wins_even_when_started_first() {
    let mut state = PreviewState::default();
    let first = state.begin_read();
    let second = state.begin_read();

    state.complete_read(second, "data:image/png;base64,SECOND".to_owned());
    state.complete_read(first, "data:image/png;base64,FIRST".to_owned());

    assert_eq!(state.data_url.as_deref(), Some("data:image/png;base64,FIRST"));
    assert_eq!(state.last_completed, Some(first));
}

#[test]
fn failed_read_leaves_previous_preview_in_place() {
    let mut state = PreviewState::default();
    let ok = state.begin_read();
    state.complete_read(ok, "data:image/gif;base64,R0lG".to_owned());

    // A second read that never completes.
    let _lost = state.begin_read();

    assert_eq!(state.data_url.as_deref(), Some("data:image/gif;base64,R0lG"));
    assert_eq!(state.in_flight(), 1);
}
