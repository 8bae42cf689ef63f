//! Agent status and toast handlers

use agentdesk_core::prelude::*;

use crate::message::Message;
use crate::state::AppState;
use crate::timers::TimerKind;
use crate::toast::ToastLevel;

use super::helpers::{reject, toast};
use super::{UpdateAction, UpdateResult};

pub fn handle_sign_in(state: &mut AppState) -> UpdateResult {
    if let Err(e) = state.agent.begin_sign_in() {
        return reject(e);
    }
    info!("Signing in agent {}", state.settings.agent.id);
    UpdateResult::action(UpdateAction::ScheduleTimer {
        kind: TimerKind::SignIn,
        after: state.settings.timers.sign_in(),
        message: Message::SignInCompleted {
            session: state.session(),
        },
    })
}

pub fn handle_sign_in_completed(state: &mut AppState, session: u64) -> UpdateResult {
    if session != state.session() || !state.agent.complete_sign_in() {
        debug!("Ignoring stale sign-in completion");
        return UpdateResult::none();
    }
    UpdateResult::message(toast(ToastLevel::Success, "Signed in"))
}

pub fn handle_sign_out(state: &mut AppState) -> UpdateResult {
    match state.agent.sign_out() {
        Ok(()) => UpdateResult::message(toast(ToastLevel::Success, "Signed out")),
        Err(e) => reject(e),
    }
}

pub fn handle_set_available(state: &mut AppState) -> UpdateResult {
    match state.agent.set_available() {
        Ok(()) => UpdateResult::message(toast(ToastLevel::Success, "Available, taking calls")),
        Err(e) => reject(e),
    }
}

pub fn handle_set_busy(state: &mut AppState) -> UpdateResult {
    match state.agent.set_busy() {
        Ok(()) => UpdateResult::message(toast(ToastLevel::Info, "Busy, calls paused")),
        Err(e) => reject(e),
    }
}

/// Show a toast and (re)arm its dismissal timer.
pub fn handle_show_toast(state: &mut AppState, level: ToastLevel, text: String) -> UpdateResult {
    let id = state.toasts.show(level, text);
    UpdateResult::action(UpdateAction::ScheduleTimer {
        kind: TimerKind::ToastDismiss,
        after: state.settings.timers.toast(),
        message: Message::ToastExpired { id },
    })
}

pub fn handle_toast_expired(state: &mut AppState, id: u64) -> UpdateResult {
    if !state.toasts.expire(id) {
        trace!("Toast {} already replaced", id);
    }
    UpdateResult::none()
}
