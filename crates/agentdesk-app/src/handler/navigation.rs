//! View navigation, popover and logout handlers

use agentdesk_core::prelude::*;
use agentdesk_core::{CallId, Popover, ViewState};

use crate::state::AppState;
use crate::timers::TimerScope;

use super::helpers::reject;
use super::{UpdateAction, UpdateResult};

pub fn handle_navigate_to(state: &mut AppState, view: ViewState) -> UpdateResult {
    match state.controller.navigate_to(view) {
        Ok(()) => UpdateResult::none(),
        Err(e) => reject(e),
    }
}

pub fn handle_open_details(state: &mut AppState, id: CallId) -> UpdateResult {
    let fixtures = state.fixtures.clone();
    match state.controller.open_details(id, &fixtures) {
        Ok(()) => {
            // Each opened call starts on its first tab, recording paused.
            state.views.details = Default::default();
            UpdateResult::none()
        }
        Err(e) => reject(e),
    }
}

pub fn handle_open_backtrace(state: &mut AppState) -> UpdateResult {
    state.controller.open_backtrace();
    UpdateResult::none()
}

pub fn handle_back_to_dashboard(state: &mut AppState) -> UpdateResult {
    state.controller.back_to_dashboard();
    UpdateResult::none()
}

pub fn handle_toggle_popover(state: &mut AppState, popover: Popover) -> UpdateResult {
    state.controller.toggle_popover(popover);
    UpdateResult::none()
}

/// Pointer-down outside the header closes any open popover.
pub fn handle_pointer_down(state: &mut AppState, in_header: bool) -> UpdateResult {
    if !in_header && state.controller.dismiss_popover_on_outside_click() {
        debug!("Popover dismissed by outside click");
    }
    UpdateResult::none()
}

pub fn handle_request_logout(state: &mut AppState) -> UpdateResult {
    state.controller.request_logout();
    UpdateResult::none()
}

/// Drop the whole session and every pending timer.
pub fn handle_confirm_logout(state: &mut AppState) -> UpdateResult {
    if let Err(e) = state.controller.confirm_logout() {
        return reject(e);
    }
    state.reset_session();
    info!("Session reset to signed-out state");
    UpdateResult::action(UpdateAction::CancelTimers(TimerScope::All))
}

pub fn handle_cancel_logout(state: &mut AppState) -> UpdateResult {
    match state.controller.cancel_logout() {
        Ok(()) => UpdateResult::none(),
        Err(e) => reject(e),
    }
}
