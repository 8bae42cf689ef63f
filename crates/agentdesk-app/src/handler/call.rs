//! Call lifecycle handlers

use agentdesk_core::prelude::*;

use crate::call_setup::FormField;
use crate::controller::ControllerError;
use crate::state::AppState;
use crate::timers::TimerScope;
use crate::toast::ToastLevel;
use crate::workstation::WorkstationState;

use super::helpers::{reject, toast};
use super::{UpdateAction, UpdateResult};

pub fn handle_request_start_call(state: &mut AppState) -> UpdateResult {
    match state.controller.request_start_call() {
        Ok(()) => {
            state.reset_start_call_form();
            UpdateResult::none()
        }
        Err(e) => reject(e),
    }
}

/// Validate the form, then dial. An invalid form keeps the dialog open.
pub fn handle_confirm_start_call(state: &mut AppState) -> UpdateResult {
    let setup = match state.start_call_form.to_setup(state.outbound_lines()) {
        Ok(setup) => setup,
        Err(e) => return reject(ControllerError::from(e)),
    };
    match state.controller.confirm_start_call(setup) {
        Ok(()) => UpdateResult::none(),
        Err(e) => reject(e),
    }
}

pub fn handle_cancel_start_call(state: &mut AppState) -> UpdateResult {
    match state.controller.cancel_start_call() {
        Ok(()) => UpdateResult::none(),
        Err(e) => reject(e),
    }
}

/// Mount the workstation and start its clock.
pub fn handle_connect_audio(state: &mut AppState) -> UpdateResult {
    if let Err(e) = state.controller.connect_audio() {
        return reject(e);
    }
    let mount = state.next_mount();
    state.workstation = Some(WorkstationState::new(mount));
    debug!("Workstation mounted ({:?})", mount);
    UpdateResult::action(UpdateAction::StartCallClock { mount })
}

pub fn handle_upgrade_to_video(state: &mut AppState) -> UpdateResult {
    match state.controller.upgrade_to_video() {
        Ok(()) => UpdateResult::message(toast(ToastLevel::Success, "Switched to video")),
        Err(e) => reject(e),
    }
}

/// Hang up from any active status; the workstation and its timers go away.
pub fn handle_end_call(state: &mut AppState) -> UpdateResult {
    let was_connected = state.controller.call_status().is_connected();
    let elapsed = state
        .workstation
        .as_ref()
        .map(|w| w.elapsed_secs())
        .unwrap_or(0);

    if let Err(e) = state.controller.end_call() {
        return reject(e);
    }
    state.workstation = None;

    let text = if was_connected {
        format!("Call ended ({})", agentdesk_core::format_clock(elapsed))
    } else {
        "Call cancelled".to_string()
    };
    UpdateResult::action(UpdateAction::CancelTimers(TimerScope::Workstation))
        .then(toast(ToastLevel::Info, text))
}

// ─────────────────────────────────────────────────────────────────
// Start-call form
// ─────────────────────────────────────────────────────────────────

pub fn handle_form_next_field(state: &mut AppState) -> UpdateResult {
    let form = &mut state.start_call_form;
    form.focus = form.focus.next();
    UpdateResult::none()
}

pub fn handle_form_prev_field(state: &mut AppState) -> UpdateResult {
    let form = &mut state.start_call_form;
    form.focus = form.focus.prev();
    UpdateResult::none()
}

pub fn handle_form_cycle(state: &mut AppState, forward: bool) -> UpdateResult {
    let lines = state.settings.calls.outbound_numbers.len();
    let form = &mut state.start_call_form;
    match form.focus {
        FormField::Outbound => form.cycle_outbound(lines, forward),
        FormField::Kind => form.toggle_kind(),
        FormField::Phone => {}
    }
    UpdateResult::none()
}

