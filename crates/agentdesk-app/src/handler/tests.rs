//! Tests for handler module

use std::sync::Arc;

use super::*;
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppPhase, AppState, Focus};
use crate::toast::ToastLevel;
use crate::workstation::{FraudQuestion, StepState, WorkstationTab};
use agentdesk_core::{
    ActivePopover, AgentStatus, CallId, CallKind, CallStatus, FixtureSet, Popover, ViewState,
};

fn test_state() -> AppState {
    AppState::new(
        Settings::default(),
        Arc::new(FixtureSet::builtin().expect("builtin fixtures")),
    )
}

/// Run a message and every follow-up message, collecting actions.
fn run(state: &mut AppState, msg: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(msg);
    while let Some(msg) = next.take() {
        let result = update(state, msg);
        actions.extend(result.action);
        next = result.message;
    }
    actions
}

fn press(state: &mut AppState, key: InputKey) -> Vec<UpdateAction> {
    run(state, Message::Key(key))
}

fn toast_text(state: &AppState) -> Option<String> {
    state.toasts.current().map(|t| t.text.clone())
}

/// Signed in and available, as required to place a call from the dashboard.
fn available_state() -> AppState {
    let mut state = test_state();
    run(&mut state, Message::SignIn);
    let session = state.session();
    run(&mut state, Message::SignInCompleted { session });
    run(&mut state, Message::SetAvailable);
    assert_eq!(state.agent.status(), AgentStatus::Available);
    state
}

fn connected_state() -> AppState {
    let mut state = available_state();
    run(&mut state, Message::RequestStartCall);
    run(&mut state, Message::ConfirmStartCall);
    run(&mut state, Message::ConnectAudio);
    assert_eq!(state.controller.call_status(), CallStatus::AudioConnected);
    state
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = test_state();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_q_key_quits_from_dashboard() {
    let state = test_state();
    assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));
}

#[test]
fn test_q_key_ignored_while_popover_open() {
    let mut state = test_state();
    update(&mut state, Message::TogglePopover(Popover::Settings));
    assert_eq!(handle_key(&state, InputKey::Char('q')), None);
}

#[test]
fn test_ctrl_c_quits_even_while_typing() {
    let mut state = available_state();
    run(&mut state, Message::RequestStartCall);
    assert_eq!(handle_key(&state, InputKey::CharCtrl('c')), Some(Message::Quit));
}

#[test]
fn test_tick_advances_frame_counter() {
    let mut state = test_state();
    update(&mut state, Message::Tick);
    update(&mut state, Message::Tick);
    assert_eq!(state.tick_count, 2);
}

// ─────────────────────────────────────────────────────────
// Call lifecycle
// ─────────────────────────────────────────────────────────

#[test]
fn test_full_call_scenario() {
    let mut state = available_state();

    press(&mut state, InputKey::Char('c'));
    assert!(state.controller.show_start_call_modal());
    assert_eq!(state.focus(), Focus::StartCall);

    press(&mut state, InputKey::Enter);
    assert!(!state.controller.show_start_call_modal());
    assert_eq!(state.controller.call_status(), CallStatus::Dialing);
    assert!(state.controller.visibility().dialing_overlay);

    let actions = press(&mut state, InputKey::Char('a'));
    assert_eq!(state.controller.call_status(), CallStatus::AudioConnected);
    let mount = state.workstation.as_ref().map(|w| w.mount()).expect("mounted");
    assert_eq!(actions, vec![UpdateAction::StartCallClock { mount }]);
    assert!(state.controller.visibility().workstation);

    press(&mut state, InputKey::Char('u'));
    assert_eq!(state.controller.call_status(), CallStatus::VideoConnected);
    let vis = state.controller.visibility();
    assert!(!vis.sidebar);
    assert!(!vis.header);

    let actions = press(&mut state, InputKey::Char('e'));
    assert_eq!(state.controller.call_status(), CallStatus::Idle);
    assert!(state.workstation.is_none());
    assert!(actions.contains(&UpdateAction::CancelTimers(TimerScope::Workstation)));
    assert!(toast_text(&state).is_some_and(|t| t.starts_with("Call ended")));
    assert_eq!(state.controller.view(), ViewState::Dashboard);
}

#[test]
fn test_start_call_key_requires_available_agent() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('c'));

    assert!(!state.controller.show_start_call_modal());
    assert_eq!(
        state.toasts.current().map(|t| t.level),
        Some(ToastLevel::Warning)
    );
}

#[test]
fn test_invalid_phone_keeps_modal_open() {
    let mut state = available_state();
    run(&mut state, Message::RequestStartCall);
    for _ in 0..4 {
        press(&mut state, InputKey::Backspace);
    }

    run(&mut state, Message::ConfirmStartCall);

    assert!(state.controller.show_start_call_modal());
    assert_eq!(state.controller.call_status(), CallStatus::Idle);
    assert_eq!(
        state.toasts.current().map(|t| t.level),
        Some(ToastLevel::Warning)
    );
}

#[test]
fn test_start_call_form_edits() {
    let mut state = available_state();
    run(&mut state, Message::RequestStartCall);

    press(&mut state, InputKey::Backspace);
    press(&mut state, InputKey::Char('9'));
    assert_eq!(state.start_call_form.phone, "134****6139");

    // Outbound line, then kind
    press(&mut state, InputKey::Tab);
    press(&mut state, InputKey::Right);
    assert_eq!(state.start_call_form.outbound_index, 1);
    press(&mut state, InputKey::Tab);
    press(&mut state, InputKey::Right);
    assert_eq!(state.start_call_form.kind, CallKind::Audio);

    press(&mut state, InputKey::Enter);
    let call = state.controller.active_call().expect("dialing");
    assert_eq!(call.phone(), "134****6139");
    assert_eq!(call.outbound_number(), "025-88880000");
    assert_eq!(call.call_kind(), CallKind::Audio);
}

#[test]
fn test_cancel_start_call_from_modal() {
    let mut state = available_state();
    run(&mut state, Message::RequestStartCall);
    press(&mut state, InputKey::Esc);
    assert!(!state.controller.show_start_call_modal());
    assert_eq!(state.controller.call_status(), CallStatus::Idle);
}

#[test]
fn test_hang_up_while_dialing() {
    let mut state = available_state();
    run(&mut state, Message::RequestStartCall);
    run(&mut state, Message::ConfirmStartCall);

    press(&mut state, InputKey::Esc);

    assert_eq!(state.controller.call_status(), CallStatus::Idle);
    assert_eq!(toast_text(&state).as_deref(), Some("Call cancelled"));
}

#[test]
fn test_upgrade_from_idle_is_rejected_without_change() {
    let mut state = test_state();
    let before = state.controller.clone();

    run(&mut state, Message::UpgradeToVideo);

    assert_eq!(state.controller, before);
    assert!(toast_text(&state).is_some_and(|t| t.contains("upgrade to video")));
}

#[test]
fn test_end_call_lands_on_idle_from_every_active_status() {
    for steps in 1..=3 {
        let mut state = available_state();
        run(&mut state, Message::RequestStartCall);
        run(&mut state, Message::ConfirmStartCall);
        if steps >= 2 {
            run(&mut state, Message::ConnectAudio);
        }
        if steps >= 3 {
            run(&mut state, Message::UpgradeToVideo);
        }
        run(&mut state, Message::EndCall);
        assert_eq!(state.controller.call_status(), CallStatus::Idle);
        assert!(state.workstation.is_none());
    }
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_sidebar_navigation_keys() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('2'));
    assert_eq!(state.controller.view(), ViewState::History);
    press(&mut state, InputKey::Char('3'));
    assert_eq!(state.controller.view(), ViewState::Report);
    press(&mut state, InputKey::Char('1'));
    assert_eq!(state.controller.view(), ViewState::Dashboard);
}

#[test]
fn test_open_recent_call_details_and_back() {
    let mut state = test_state();
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);

    assert_eq!(state.controller.view(), ViewState::Details);
    assert_eq!(state.controller.selected_call_id(), Some(&CallId::from("2")));
    assert!(!state.controller.visibility().sidebar);

    press(&mut state, InputKey::Esc);
    assert_eq!(state.controller.view(), ViewState::Dashboard);
    assert_eq!(state.controller.selected_call_id(), None);
}

#[test]
fn test_open_history_record_details() {
    let mut state = test_state();
    run(&mut state, Message::NavigateTo(ViewState::History));
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);

    assert_eq!(state.controller.view(), ViewState::Details);
    assert_eq!(
        state.controller.selected_call_id(),
        Some(&CallId::from("seataae123b..."))
    );
}

#[test]
fn test_open_details_resets_detail_tab() {
    let mut state = test_state();
    state.views.details.tab = crate::views::DetailTab::Location;
    state.views.details.playing = true;

    run(&mut state, Message::OpenDetails(CallId::from("1")));

    assert_eq!(state.views.details, Default::default());
}

#[test]
fn test_unknown_call_is_rejected() {
    let mut state = test_state();
    run(&mut state, Message::OpenDetails(CallId::from("nope")));
    assert_eq!(state.controller.view(), ViewState::Dashboard);
    assert_eq!(state.controller.selected_call_id(), None);
}

#[test]
fn test_navigate_away_from_details_clears_selection() {
    let mut state = test_state();
    run(&mut state, Message::OpenDetails(CallId::from("1")));
    press(&mut state, InputKey::Char('h'));
    assert_eq!(state.controller.view(), ViewState::History);
    assert_eq!(state.controller.selected_call_id(), None);
}

#[test]
fn test_backtrace_hides_chrome() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('t'));
    assert_eq!(state.controller.view(), ViewState::Backtrace);
    let vis = state.controller.visibility();
    assert!(!vis.sidebar);
    assert!(!vis.header);
}

#[test]
fn test_popover_toggle_and_outside_click() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('a'));
    assert_eq!(state.controller.active_popover(), ActivePopover::Alerts);

    press(&mut state, InputKey::Char('s'));
    assert_eq!(state.controller.active_popover(), ActivePopover::Settings);

    run(&mut state, Message::PointerDown { in_header: true });
    assert_eq!(state.controller.active_popover(), ActivePopover::Settings);

    run(&mut state, Message::PointerDown { in_header: false });
    assert_eq!(state.controller.active_popover(), ActivePopover::None);
}

#[test]
fn test_popover_esc_closes() {
    let mut state = test_state();
    run(&mut state, Message::TogglePopover(Popover::Alerts));
    press(&mut state, InputKey::Esc);
    assert_eq!(state.controller.active_popover(), ActivePopover::None);
}

#[test]
fn test_logout_request_closes_popover() {
    let mut state = test_state();
    run(&mut state, Message::TogglePopover(Popover::Settings));
    press(&mut state, InputKey::Char('L'));

    assert!(state.controller.show_logout_confirm());
    assert_eq!(state.controller.active_popover(), ActivePopover::None);
    assert_eq!(state.focus(), Focus::LogoutConfirm);
}

#[test]
fn test_cancel_logout_keeps_session() {
    let mut state = available_state();
    run(&mut state, Message::RequestLogout);
    press(&mut state, InputKey::Char('n'));

    assert!(!state.controller.show_logout_confirm());
    assert_eq!(state.agent.status(), AgentStatus::Available);
}

#[test]
fn test_confirm_logout_resets_session() {
    let mut state = available_state();
    run(&mut state, Message::NavigateTo(ViewState::History));
    run(&mut state, Message::RequestLogout);
    let old_session = state.session();

    let actions = press(&mut state, InputKey::Char('y'));

    assert_eq!(actions, vec![UpdateAction::CancelTimers(TimerScope::All)]);
    assert_eq!(state.agent.status(), AgentStatus::Offline);
    assert_eq!(state.controller.view(), ViewState::Dashboard);
    assert!(!state.controller.show_logout_confirm());
    assert!(state.toasts.current().is_none());
    assert_ne!(state.session(), old_session);
}

#[test]
fn test_confirm_logout_without_request_is_rejected() {
    let mut state = test_state();
    let session = state.session();
    run(&mut state, Message::ConfirmLogout);
    assert_eq!(state.session(), session);
}

// ─────────────────────────────────────────────────────────
// Agent status and toasts
// ─────────────────────────────────────────────────────────

#[test]
fn test_sign_in_schedules_completion() {
    let mut state = test_state();
    let actions = press(&mut state, InputKey::Char('i'));

    assert!(state.agent.is_signing_in());
    assert_eq!(
        actions,
        vec![UpdateAction::ScheduleTimer {
            kind: TimerKind::SignIn,
            after: state.settings.timers.sign_in(),
            message: Message::SignInCompleted { session: 0 },
        }]
    );

    run(&mut state, Message::SignInCompleted { session: 0 });
    assert_eq!(state.agent.status(), AgentStatus::Preparing);
    assert_eq!(toast_text(&state).as_deref(), Some("Signed in"));
}

#[test]
fn test_stale_sign_in_completion_is_ignored() {
    let mut state = test_state();
    run(&mut state, Message::SignIn);
    run(&mut state, Message::RequestLogout);
    run(&mut state, Message::ConfirmLogout);

    run(&mut state, Message::SignInCompleted { session: 0 });

    assert_eq!(state.agent.status(), AgentStatus::Offline);
    assert!(!state.agent.is_signing_in());
}

#[test]
fn test_status_keys() {
    let mut state = available_state();
    press(&mut state, InputKey::Char('b'));
    assert_eq!(state.agent.status(), AgentStatus::Busy);
    press(&mut state, InputKey::Char('v'));
    assert_eq!(state.agent.status(), AgentStatus::Available);
    press(&mut state, InputKey::Char('o'));
    assert_eq!(state.agent.status(), AgentStatus::Offline);
}

#[test]
fn test_set_available_while_offline_is_rejected() {
    let mut state = test_state();
    run(&mut state, Message::SetAvailable);
    assert_eq!(state.agent.status(), AgentStatus::Offline);
    assert_eq!(
        state.toasts.current().map(|t| t.level),
        Some(ToastLevel::Warning)
    );
}

#[test]
fn test_newer_toast_supersedes_older_expiry() {
    let mut state = test_state();
    let first = run(
        &mut state,
        Message::ShowToast {
            level: ToastLevel::Info,
            text: "one".into(),
        },
    );
    run(
        &mut state,
        Message::ShowToast {
            level: ToastLevel::Info,
            text: "two".into(),
        },
    );

    let Some(UpdateAction::ScheduleTimer {
        message: Message::ToastExpired { id },
        ..
    }) = first.first().cloned()
    else {
        panic!("expected toast dismissal timer");
    };
    run(&mut state, Message::ToastExpired { id });

    assert_eq!(toast_text(&state).as_deref(), Some("two"));
}

// ─────────────────────────────────────────────────────────
// Workstation
// ─────────────────────────────────────────────────────────

#[test]
fn test_clock_tick_for_current_mount_only() {
    let mut state = connected_state();
    let mount = state.workstation.as_ref().map(|w| w.mount()).expect("mounted");

    run(&mut state, Message::CallClockTick { mount });
    run(&mut state, Message::CallClockTick { mount });
    run(
        &mut state,
        Message::CallClockTick {
            mount: crate::workstation::MountId(mount.0 + 100),
        },
    );

    assert_eq!(state.workstation.as_ref().map(|w| w.elapsed_secs()), Some(2));
}

#[test]
fn test_verification_flow() {
    let mut state = connected_state();
    let mount = state.workstation.as_ref().map(|w| w.mount()).expect("mounted");

    // Face match before ID scan is refused
    let actions = press(&mut state, InputKey::Char('f'));
    assert!(!actions.iter().any(|a| matches!(
        a,
        UpdateAction::ScheduleTimer {
            kind: TimerKind::FaceMatch,
            ..
        }
    )));
    assert_eq!(
        state.toasts.current().map(|t| t.level),
        Some(ToastLevel::Warning)
    );

    let actions = press(&mut state, InputKey::Char('i'));
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::ScheduleTimer {
            kind: TimerKind::IdScan,
            ..
        }]
    ));
    // A running scan is not restarted
    assert!(press(&mut state, InputKey::Char('i')).is_empty());

    run(&mut state, Message::IdScanCompleted { mount });
    let ws = state.workstation.as_ref().expect("mounted");
    assert_eq!(ws.id_scan(), StepState::Done);

    press(&mut state, InputKey::Char('f'));
    run(&mut state, Message::FaceMatchCompleted { mount });
    press(&mut state, InputKey::Char('1'));
    press(&mut state, InputKey::Char('2'));

    let ws = state.workstation.as_ref().expect("mounted");
    assert!(ws.face_matched());
    assert!(ws.fraud_answer(FraudQuestion::First));
    assert!(ws.is_verified());
}

#[test]
fn test_late_scan_completion_after_hang_up_is_ignored() {
    let mut state = connected_state();
    let old = state.workstation.as_ref().map(|w| w.mount()).expect("mounted");
    run(&mut state, Message::StartIdScan);
    run(&mut state, Message::EndCall);

    // A new call mounts a fresh workstation
    run(&mut state, Message::RequestStartCall);
    run(&mut state, Message::ConfirmStartCall);
    run(&mut state, Message::ConnectAudio);
    run(&mut state, Message::IdScanCompleted { mount: old });

    let ws = state.workstation.as_ref().expect("mounted");
    assert_ne!(ws.mount(), old);
    assert_eq!(ws.id_scan(), StepState::Pending);
}

#[test]
fn test_camera_toggle_requires_video() {
    let mut state = connected_state();
    run(&mut state, Message::ToggleCamera);
    assert!(!state.workstation.as_ref().expect("mounted").camera_off);

    run(&mut state, Message::UpgradeToVideo);
    press(&mut state, InputKey::Char('k'));
    assert!(state.workstation.as_ref().expect("mounted").camera_off);
}

#[test]
fn test_mute_and_tabs() {
    let mut state = connected_state();
    press(&mut state, InputKey::Char('m'));
    press(&mut state, InputKey::Tab);
    press(&mut state, InputKey::Tab);

    let ws = state.workstation.as_ref().expect("mounted");
    assert!(ws.muted);
    assert_eq!(ws.tab, WorkstationTab::Notes);
}

#[test]
fn test_notes_typing_and_quick_tags() {
    let mut state = connected_state();
    run(&mut state, Message::SelectWorkstationTab(WorkstationTab::Notes));
    press(&mut state, InputKey::Char('1'));

    press(&mut state, InputKey::Enter);
    for c in " ok".chars() {
        press(&mut state, InputKey::Char(c));
    }
    // 'e' is text while editing, not hang-up
    press(&mut state, InputKey::Char('e'));
    press(&mut state, InputKey::Backspace);
    press(&mut state, InputKey::Esc);
    press(&mut state, InputKey::Char('2'));

    let ws = state.workstation.as_ref().expect("mounted");
    assert_eq!(ws.notes, "High intent ok, Needs callback");
    assert!(!ws.editing_notes);
    assert_eq!(state.controller.call_status(), CallStatus::AudioConnected);
}

#[test]
fn test_send_video_link_only_on_audio() {
    let mut state = connected_state();
    press(&mut state, InputKey::Char('l'));
    assert_eq!(
        toast_text(&state).as_deref(),
        Some("Video link sent to 134****6133")
    );

    run(&mut state, Message::UpgradeToVideo);
    run(&mut state, Message::SendVideoLink);
    assert_eq!(
        state.toasts.current().map(|t| t.level),
        Some(ToastLevel::Warning)
    );
}

// ─────────────────────────────────────────────────────────
// Content views
// ─────────────────────────────────────────────────────────

#[test]
fn test_history_filter_entry() {
    let mut state = test_state();
    run(&mut state, Message::NavigateTo(ViewState::History));
    press(&mut state, InputKey::Char('/'));
    for c in "zz".chars() {
        press(&mut state, InputKey::Char(c));
    }
    assert!(state.visible_history().is_empty());

    press(&mut state, InputKey::Enter);
    assert!(!state.views.history.filtering);
    assert_eq!(state.views.history.filter, "zz");

    press(&mut state, InputKey::Esc);
    assert!(state.views.history.filter.is_empty());
    assert_eq!(state.visible_history().len(), 9);
}

#[test]
fn test_history_cursor_clamps() {
    let mut state = test_state();
    run(&mut state, Message::NavigateTo(ViewState::History));
    for _ in 0..20 {
        run(&mut state, Message::SelectNext);
    }
    assert_eq!(state.views.history.selected, 8);
}

#[test]
fn test_backtrace_search() {
    let mut state = test_state();
    run(&mut state, Message::OpenBacktrace);
    press(&mut state, InputKey::Char('/'));
    for c in "risk".chars() {
        press(&mut state, InputKey::Char(c));
    }
    press(&mut state, InputKey::Enter);

    assert_eq!(state.visible_timeline().len(), 1);
    assert!(!state.views.backtrace.searching);
}

#[test]
fn test_detail_tabs_and_playback() {
    let mut state = test_state();
    run(&mut state, Message::OpenDetails(CallId::from("1")));
    press(&mut state, InputKey::Right);
    press(&mut state, InputKey::Char(' '));

    assert_eq!(state.views.details.tab, crate::views::DetailTab::Transcript);
    assert!(state.views.details.playing);

    press(&mut state, InputKey::Left);
    press(&mut state, InputKey::Left);
    assert_eq!(state.views.details.tab, crate::views::DetailTab::Location);
}

#[test]
fn test_report_period_cycle() {
    let mut state = test_state();
    run(&mut state, Message::NavigateTo(ViewState::Report));
    press(&mut state, InputKey::Right);
    assert_eq!(state.views.report.period, crate::views::ReportPeriod::Month);
    press(&mut state, InputKey::Left);
    press(&mut state, InputKey::Left);
    assert_eq!(state.views.report.period, crate::views::ReportPeriod::Today);
}
