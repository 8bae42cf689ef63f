//! Full-frame render tests: which surfaces appear for a given state

use agentdesk_app::{AppState, CallSetup, WorkstationState};
use agentdesk_core::{CallId, CallKind, Popover, ViewState};

use ratatui::layout::{Position, Rect};

use super::{header_regions, view};
use crate::test_utils::{create_test_state, TestTerminal};

fn draw(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::with_size(120, 36);
    term.draw_with(|frame| view(frame, state));
    term
}

fn dialing_state() -> AppState {
    let mut state = create_test_state();
    let lines = state.outbound_lines().to_vec();
    let setup =
        CallSetup::new("13412346133", &lines[0], CallKind::Video, &lines).expect("valid setup");
    state
        .controller
        .request_start_call()
        .expect("idle controller");
    state
        .controller
        .confirm_start_call(setup)
        .expect("dialog open");
    state
}

fn connected_state() -> AppState {
    let mut state = dialing_state();
    state.controller.connect_audio().expect("dialing");
    let mount = state.next_mount();
    state.workstation = Some(WorkstationState::new(mount));
    state
}

#[test]
fn test_dashboard_shows_sidebar_and_header() {
    let term = draw(&create_test_state());

    assert!(term.buffer_contains("Agent Workbench"));
    assert!(term.buffer_contains("3 Quality Report"));
    assert!(term.buffer_contains("Recent calls"));
}

#[test]
fn test_history_has_no_header() {
    let mut state = create_test_state();
    state
        .controller
        .navigate_to(ViewState::History)
        .expect("navigable");
    let term = draw(&state);

    assert!(!term.buffer_contains("Agent Workbench"));
    assert!(term.buffer_contains("Call history"));
}

#[test]
fn test_details_renders_selected_call() {
    let mut state = create_test_state();
    let fixtures = state.fixtures.clone();
    state
        .controller
        .open_details(CallId::from("2"), &fixtures)
        .expect("known call");
    let term = draw(&state);

    assert!(term.buffer_contains("Call details"));
    assert!(!term.buffer_contains("No call selected"));
    assert!(!term.buffer_contains("Agent Workbench"));
}

#[test]
fn test_backtrace_hides_sidebar() {
    let mut state = create_test_state();
    state.controller.open_backtrace();
    let term = draw(&state);

    assert!(term.buffer_contains("Timeline"));
    assert!(!term.buffer_contains("Quality Report"));
}

#[test]
fn test_settings_popover_below_header() {
    let mut state = create_test_state();
    state.controller.toggle_popover(Popover::Settings);
    let term = draw(&state);

    assert!(term.buffer_contains("sign out of the workstation"));
}

#[test]
fn test_alerts_popover_lists_warning_events() {
    let mut state = create_test_state();
    state.controller.toggle_popover(Popover::Alerts);
    let term = draw(&state);

    assert!(term.buffer_contains("Risk control alert"));
}

#[test]
fn test_start_call_modal_over_dashboard() {
    let mut state = create_test_state();
    state
        .controller
        .request_start_call()
        .expect("idle controller");
    let term = draw(&state);

    assert!(term.buffer_contains("Start call"));
    assert!(term.buffer_contains("Agent Workbench"));
}

#[test]
fn test_dialing_overlay() {
    let term = draw(&dialing_state());

    assert!(term.buffer_contains("Calling"));
    assert!(term.buffer_contains("via 025-88219999"));
}

#[test]
fn test_connected_call_takes_full_screen() {
    let term = draw(&connected_state());

    assert!(term.buffer_contains("Tools"));
    assert!(term.buffer_contains("00:00"));
    assert!(!term.buffer_contains("Agent Workbench"));
    assert!(!term.buffer_contains("Recent calls"));
}

#[test]
fn test_video_call_keeps_full_screen() {
    let mut state = connected_state();
    state.controller.upgrade_to_video().expect("audio call");
    let term = draw(&state);

    assert!(term.buffer_contains("LIVE"));
    assert!(!term.buffer_contains("Agent Workbench"));
}

#[test]
fn test_logout_confirm_over_dashboard() {
    let mut state = create_test_state();
    state.controller.request_logout();
    let term = draw(&state);

    assert!(term.buffer_contains("Log out of the agent workstation?"));
}

#[test]
fn test_toast_drawn_last() {
    let mut state = create_test_state();
    state.toasts.show(agentdesk_app::ToastLevel::Info, "Video link sent");
    let term = draw(&state);

    assert!(term.buffer_contains("Video link sent"));
}

#[test]
fn test_compact_terminal_does_not_panic() {
    let mut state = connected_state();
    state.toasts.show(agentdesk_app::ToastLevel::Warning, "Signed out");
    let mut term = TestTerminal::compact();
    term.draw_with(|frame| view(frame, &state));

    let mut dashboard = create_test_state();
    dashboard.controller.toggle_popover(Popover::Alerts);
    term.draw_with(|frame| view(frame, &dashboard));
}

#[test]
fn test_header_regions_include_open_popover() {
    let screen = Rect::new(0, 0, 120, 36);
    let mut state = create_test_state();
    assert_eq!(header_regions(&state, screen).len(), 1);

    state.controller.toggle_popover(Popover::Settings);
    let regions = header_regions(&state, screen);
    assert_eq!(regions.len(), 2);

    // Inside the dropdown, below the header bar
    let inside = Position::new(100, 5);
    assert!(!regions[0].contains(inside));
    assert!(regions[1].contains(inside));
    assert!(!regions.iter().any(|r| r.contains(Position::new(30, 20))));
}

#[test]
fn test_header_regions_empty_during_call() {
    let screen = Rect::new(0, 0, 120, 36);
    assert!(header_regions(&connected_state(), screen).is_empty());
}
