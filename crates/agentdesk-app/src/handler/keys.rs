//! Key event handlers for each focused surface

use agentdesk_core::{ActivePopover, CallStatus, Popover, ViewState};

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus, TextTarget};
use crate::toast::ToastLevel;
use crate::workstation::{FraudQuestion, WorkstationTab, QUICK_TAGS};

use super::helpers::toast;

/// Convert key events to messages based on the focused surface
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit works everywhere, text fields included.
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if let Some(target) = state.text_target() {
        return handle_key_text_entry(target, key);
    }

    match state.focus() {
        Focus::LogoutConfirm => handle_key_logout_confirm(key),
        Focus::Workstation => handle_key_workstation(state, key),
        Focus::Dialing => handle_key_dialing(key),
        Focus::StartCall => handle_key_start_call(key),
        Focus::Popover => handle_key_popover(state, key),
        Focus::View(view) => handle_key_view(state, view, key),
    }
}

/// Printable keys go into the focused field.
fn handle_key_text_entry(target: TextTarget, key: InputKey) -> Option<Message> {
    match (target, key) {
        (TextTarget::StartCallPhone, InputKey::Enter) => Some(Message::ConfirmStartCall),
        (TextTarget::StartCallPhone, InputKey::Esc) => Some(Message::CancelStartCall),
        (TextTarget::StartCallPhone, InputKey::Tab | InputKey::Down) => {
            Some(Message::StartCallNextField)
        }
        (TextTarget::StartCallPhone, InputKey::BackTab | InputKey::Up) => {
            Some(Message::StartCallPrevField)
        }

        (_, InputKey::Enter | InputKey::Esc) => Some(Message::EndTextEntry),
        (_, InputKey::Backspace) => Some(Message::TextBackspace),
        (_, key) => key.as_text().map(Message::TextInput),
    }
}

fn handle_key_logout_confirm(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::ConfirmLogout),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelLogout),
        _ => None,
    }
}

fn handle_key_dialing(key: InputKey) -> Option<Message> {
    match key {
        // Simulate the customer picking up
        InputKey::Char('a') | InputKey::Enter => Some(Message::ConnectAudio),
        InputKey::Char('e') | InputKey::Esc => Some(Message::EndCall),
        _ => None,
    }
}

fn handle_key_start_call(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::ConfirmStartCall),
        InputKey::Esc => Some(Message::CancelStartCall),
        InputKey::Tab | InputKey::Down => Some(Message::StartCallNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::StartCallPrevField),
        InputKey::Left => Some(Message::StartCallCycle { forward: false }),
        InputKey::Right | InputKey::Char(' ') => Some(Message::StartCallCycle { forward: true }),
        _ => None,
    }
}

fn handle_key_workstation(state: &AppState, key: InputKey) -> Option<Message> {
    let video = state.controller.call_status() == CallStatus::VideoConnected;
    let tab = state.workstation.as_ref().map(|w| w.tab)?;

    match key {
        InputKey::Char('e') => Some(Message::EndCall),
        InputKey::Char('m') => Some(Message::ToggleMute),
        InputKey::Char('k') if video => Some(Message::ToggleCamera),
        InputKey::Char('u') if !video => Some(Message::UpgradeToVideo),
        InputKey::Char('l') if !video => Some(Message::SendVideoLink),

        InputKey::Tab | InputKey::Right => Some(Message::NextWorkstationTab),
        InputKey::BackTab | InputKey::Left => Some(Message::PrevWorkstationTab),

        // Per-tab tools
        InputKey::Char('i') if tab == WorkstationTab::AiTools => Some(Message::StartIdScan),
        InputKey::Char('f') if tab == WorkstationTab::AiTools => Some(Message::StartFaceMatch),
        InputKey::Char('1') if tab == WorkstationTab::AiTools => {
            Some(Message::ToggleFraudCheck(FraudQuestion::First))
        }
        InputKey::Char('2') if tab == WorkstationTab::AiTools => {
            Some(Message::ToggleFraudCheck(FraudQuestion::Second))
        }
        InputKey::Enter if tab == WorkstationTab::Notes => Some(Message::BeginNotesEdit),
        InputKey::Char(c) if tab == WorkstationTab::Notes => c
            .to_digit(10)
            .map(|d| d as usize)
            .filter(|d| (1..=QUICK_TAGS.len()).contains(d))
            .map(|d| Message::AppendQuickTag(d - 1)),

        _ => None,
    }
}

fn handle_key_popover(state: &AppState, key: InputKey) -> Option<Message> {
    match (state.controller.active_popover(), key) {
        (ActivePopover::Alerts, InputKey::Esc) => Some(Message::TogglePopover(Popover::Alerts)),
        (ActivePopover::Settings, InputKey::Esc) => {
            Some(Message::TogglePopover(Popover::Settings))
        }
        (_, InputKey::Char('a')) => Some(Message::TogglePopover(Popover::Alerts)),
        (_, InputKey::Char('s')) => Some(Message::TogglePopover(Popover::Settings)),
        (_, InputKey::Char('L')) => Some(Message::RequestLogout),
        _ => None,
    }
}

fn handle_key_view(state: &AppState, view: ViewState, key: InputKey) -> Option<Message> {
    // Sidebar shortcuts, only where the sidebar is shown
    if state.controller.visibility().sidebar {
        match key {
            InputKey::Char('1') => return Some(Message::NavigateTo(ViewState::Dashboard)),
            InputKey::Char('2') => return Some(Message::NavigateTo(ViewState::History)),
            InputKey::Char('3') => return Some(Message::NavigateTo(ViewState::Report)),
            _ => {}
        }
    }
    if key == InputKey::Char('q') {
        return Some(Message::Quit);
    }

    match view {
        ViewState::Dashboard => handle_key_dashboard(state, key),
        ViewState::History => handle_key_history(state, key),
        ViewState::Details => handle_key_details(key),
        ViewState::Report => handle_key_report(key),
        ViewState::Backtrace => handle_key_backtrace(key),
    }
}

fn handle_key_dashboard(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Header
        InputKey::Char('a') => Some(Message::TogglePopover(Popover::Alerts)),
        InputKey::Char('s') => Some(Message::TogglePopover(Popover::Settings)),
        InputKey::Char('L') => Some(Message::RequestLogout),

        // Agent status
        InputKey::Char('i') => Some(Message::SignIn),
        InputKey::Char('o') => Some(Message::SignOut),
        InputKey::Char('v') => Some(Message::SetAvailable),
        InputKey::Char('b') => Some(Message::SetBusy),

        InputKey::Char('c') => {
            if state.agent.can_start_call() {
                Some(Message::RequestStartCall)
            } else {
                Some(toast(ToastLevel::Warning, "Sign in and set available first"))
            }
        }
        InputKey::Char('t') => Some(Message::OpenBacktrace),

        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Enter => Some(Message::OpenSelected),
        _ => None,
    }
}

fn handle_key_history(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Enter => Some(Message::OpenSelected),
        InputKey::Char('/') => Some(Message::BeginHistoryFilter),
        InputKey::Esc if !state.views.history.filter.is_empty() => {
            Some(Message::ClearHistoryFilter)
        }
        InputKey::Esc => Some(Message::BackToDashboard),
        _ => None,
    }
}

fn handle_key_details(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab | InputKey::Right => Some(Message::NextDetailTab),
        InputKey::BackTab | InputKey::Left => Some(Message::PrevDetailTab),
        InputKey::Char(' ') | InputKey::Char('p') => Some(Message::TogglePlayback),
        InputKey::Esc | InputKey::Backspace => Some(Message::BackToDashboard),
        InputKey::Char('h') => Some(Message::NavigateTo(ViewState::History)),
        _ => None,
    }
}

fn handle_key_report(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Right | InputKey::Tab => Some(Message::NextReportPeriod),
        InputKey::Left | InputKey::BackTab => Some(Message::PrevReportPeriod),
        InputKey::Esc => Some(Message::BackToDashboard),
        _ => None,
    }
}

fn handle_key_backtrace(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Char('/') => Some(Message::BeginBacktraceSearch),
        InputKey::Esc | InputKey::Backspace => Some(Message::BackToDashboard),
        _ => None,
    }
}
