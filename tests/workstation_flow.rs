//! End-to-end flows through the public engine API, driven by key presses
//! the way the terminal runner feeds them.

use std::time::Duration;

use agentdesk_app::{Engine, InputKey, Message, Settings};
use agentdesk_core::{ActivePopover, AgentStatus, CallId, CallStatus, FixtureSet, ViewState};

fn engine() -> Engine {
    Engine::new(
        Settings::default(),
        FixtureSet::builtin().expect("builtin fixtures"),
    )
}

fn press(engine: &mut Engine, key: InputKey) {
    engine.process_message(Message::Key(key));
}

async fn signed_in_available(engine: &mut Engine) {
    press(engine, InputKey::Char('i'));
    tokio::time::sleep(Duration::from_millis(600)).await;
    engine.drain_pending_messages();
    press(engine, InputKey::Char('v'));
    assert_eq!(engine.state.agent.status(), AgentStatus::Available);
}

#[tokio::test(start_paused = true)]
async fn test_outbound_call_from_dashboard_to_hang_up() {
    let mut engine = engine();
    signed_in_available(&mut engine).await;

    press(&mut engine, InputKey::Char('c'));
    assert!(engine.state.controller.show_start_call_modal());

    // Prefilled customer phone and first outbound line
    press(&mut engine, InputKey::Enter);
    assert_eq!(engine.state.controller.call_status(), CallStatus::Dialing);
    assert!(!engine.state.controller.show_start_call_modal());

    press(&mut engine, InputKey::Char('a'));
    assert_eq!(
        engine.state.controller.call_status(),
        CallStatus::AudioConnected
    );
    assert!(engine.state.workstation.is_some());
    assert!(engine.state.controller.visibility().workstation);
    assert!(engine.state.controller.visibility().sidebar);

    press(&mut engine, InputKey::Char('u'));
    let visibility = engine.state.controller.visibility();
    assert_eq!(
        engine.state.controller.call_status(),
        CallStatus::VideoConnected
    );
    assert!(!visibility.sidebar);
    assert!(!visibility.header);

    tokio::time::sleep(Duration::from_millis(2500)).await;
    engine.drain_pending_messages();
    let elapsed = engine.state.workstation.as_ref().map(|w| w.elapsed_secs());
    assert_eq!(elapsed, Some(2));

    press(&mut engine, InputKey::Char('e'));
    assert_eq!(engine.state.controller.call_status(), CallStatus::Idle);
    assert!(engine.state.workstation.is_none());
    assert_eq!(engine.state.controller.view(), ViewState::Dashboard);
}

#[tokio::test(start_paused = true)]
async fn test_start_call_requires_available_agent() {
    let mut engine = engine();

    press(&mut engine, InputKey::Char('c'));

    assert!(!engine.state.controller.show_start_call_modal());
    assert!(engine.state.toasts.current().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_identity_verification_in_call() {
    let mut engine = engine();
    signed_in_available(&mut engine).await;
    press(&mut engine, InputKey::Char('c'));
    press(&mut engine, InputKey::Enter);
    press(&mut engine, InputKey::Char('a'));

    press(&mut engine, InputKey::Char('i'));
    tokio::time::sleep(Duration::from_millis(1600)).await;
    engine.drain_pending_messages();
    press(&mut engine, InputKey::Char('f'));
    tokio::time::sleep(Duration::from_millis(2100)).await;
    engine.drain_pending_messages();
    press(&mut engine, InputKey::Char('1'));
    press(&mut engine, InputKey::Char('2'));

    let ws = engine.state.workstation.as_ref().expect("mounted");
    assert!(ws.is_verified());
}

#[tokio::test(start_paused = true)]
async fn test_recent_call_details_and_back() {
    let mut engine = engine();

    press(&mut engine, InputKey::Down);
    press(&mut engine, InputKey::Enter);

    assert_eq!(engine.state.controller.view(), ViewState::Details);
    assert_eq!(
        engine.state.controller.selected_call_id(),
        Some(&CallId::from("2"))
    );
    assert!(!engine.state.controller.visibility().sidebar);

    press(&mut engine, InputKey::Esc);
    assert_eq!(engine.state.controller.view(), ViewState::Dashboard);
    assert_eq!(engine.state.controller.selected_call_id(), None);
}

#[tokio::test(start_paused = true)]
async fn test_history_filter_and_open() {
    let mut engine = engine();

    press(&mut engine, InputKey::Char('2'));
    assert_eq!(engine.state.controller.view(), ViewState::History);

    press(&mut engine, InputKey::Char('/'));
    for c in "nobody".chars() {
        press(&mut engine, InputKey::Char(c));
    }
    press(&mut engine, InputKey::Enter);
    assert!(engine.state.visible_history().is_empty());

    // Enter on an empty table opens nothing
    press(&mut engine, InputKey::Enter);
    assert_eq!(engine.state.controller.view(), ViewState::History);

    press(&mut engine, InputKey::Esc);
    assert_eq!(engine.state.visible_history().len(), 9);

    press(&mut engine, InputKey::Down);
    press(&mut engine, InputKey::Enter);
    assert_eq!(engine.state.controller.view(), ViewState::Details);
}

#[tokio::test(start_paused = true)]
async fn test_popover_dismissed_by_outside_click() {
    let mut engine = engine();

    press(&mut engine, InputKey::Char('a'));
    assert_eq!(
        engine.state.controller.active_popover(),
        ActivePopover::Alerts
    );

    engine.process_message(Message::PointerDown { in_header: true });
    assert_eq!(
        engine.state.controller.active_popover(),
        ActivePopover::Alerts
    );

    engine.process_message(Message::PointerDown { in_header: false });
    assert_eq!(engine.state.controller.active_popover(), ActivePopover::None);
}

#[tokio::test(start_paused = true)]
async fn test_logout_returns_to_signed_out_dashboard() {
    let mut engine = engine();
    signed_in_available(&mut engine).await;
    press(&mut engine, InputKey::Char('3'));
    press(&mut engine, InputKey::Char('1'));

    press(&mut engine, InputKey::Char('L'));
    assert!(engine.state.controller.show_logout_confirm());
    press(&mut engine, InputKey::Char('y'));

    assert!(!engine.state.controller.show_logout_confirm());
    assert_eq!(engine.state.agent.status(), AgentStatus::Offline);
    assert_eq!(engine.state.controller.view(), ViewState::Dashboard);
    assert!(!engine.should_quit());
}

#[tokio::test(start_paused = true)]
async fn test_quit_key() {
    let mut engine = engine();
    press(&mut engine, InputKey::Char('q'));
    assert!(engine.should_quit());
}
