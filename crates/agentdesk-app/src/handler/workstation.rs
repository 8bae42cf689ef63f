//! In-call workstation handlers
//!
//! Every handler is a no-op without a mounted workstation, and timer
//! completions are matched against the current mount.

use agentdesk_core::prelude::*;

use crate::message::Message;
use crate::state::AppState;
use crate::timers::TimerKind;
use crate::toast::ToastLevel;
use crate::workstation::{FraudQuestion, MountId, WorkstationState, WorkstationTab};

use super::helpers::{reject, toast};
use super::{UpdateAction, UpdateResult};

/// Workstation of the given mount, if it is still the mounted one.
fn mounted(state: &mut AppState, mount: MountId) -> Option<&mut WorkstationState> {
    state.workstation.as_mut().filter(|w| w.mount() == mount)
}

pub fn handle_clock_tick(state: &mut AppState, mount: MountId) -> UpdateResult {
    match mounted(state, mount) {
        Some(ws) => ws.tick(),
        None => trace!("Dropping clock tick for unmounted {:?}", mount),
    }
    UpdateResult::none()
}

pub fn handle_toggle_mute(state: &mut AppState) -> UpdateResult {
    if let Some(ws) = state.workstation.as_mut() {
        ws.toggle_mute();
        debug!("Microphone muted: {}", ws.muted);
    }
    UpdateResult::none()
}

pub fn handle_toggle_camera(state: &mut AppState) -> UpdateResult {
    let status = state.controller.call_status();
    let Some(ws) = state.workstation.as_mut() else {
        return UpdateResult::none();
    };
    match ws.toggle_camera(status) {
        Ok(()) => UpdateResult::none(),
        Err(e) => reject(e),
    }
}

pub fn handle_select_tab(state: &mut AppState, tab: WorkstationTab) -> UpdateResult {
    if let Some(ws) = state.workstation.as_mut() {
        ws.tab = tab;
        ws.editing_notes = false;
    }
    UpdateResult::none()
}

pub fn handle_cycle_tab(state: &mut AppState, forward: bool) -> UpdateResult {
    let next = match state.workstation.as_ref() {
        Some(ws) if forward => ws.tab.next(),
        Some(ws) => ws.tab.prev(),
        None => return UpdateResult::none(),
    };
    handle_select_tab(state, next)
}

pub fn handle_start_id_scan(state: &mut AppState) -> UpdateResult {
    let after = state.settings.timers.id_scan();
    let Some(ws) = state.workstation.as_mut() else {
        return UpdateResult::none();
    };
    if !ws.start_id_scan() {
        return UpdateResult::none();
    }
    let mount = ws.mount();
    UpdateResult::action(UpdateAction::ScheduleTimer {
        kind: TimerKind::IdScan,
        after,
        message: Message::IdScanCompleted { mount },
    })
}

pub fn handle_id_scan_completed(state: &mut AppState, mount: MountId) -> UpdateResult {
    match mounted(state, mount) {
        Some(ws) => {
            ws.complete_id_scan();
            UpdateResult::message(toast(ToastLevel::Success, "ID card recognized"))
        }
        None => UpdateResult::none(),
    }
}

pub fn handle_start_face_match(state: &mut AppState) -> UpdateResult {
    let after = state.settings.timers.face_match();
    let Some(ws) = state.workstation.as_mut() else {
        return UpdateResult::none();
    };
    match ws.start_face_match() {
        Ok(true) => {
            let mount = ws.mount();
            UpdateResult::action(UpdateAction::ScheduleTimer {
                kind: TimerKind::FaceMatch,
                after,
                message: Message::FaceMatchCompleted { mount },
            })
        }
        Ok(false) => UpdateResult::none(),
        Err(e) => reject(e),
    }
}

pub fn handle_face_match_completed(state: &mut AppState, mount: MountId) -> UpdateResult {
    match mounted(state, mount) {
        Some(ws) => {
            ws.complete_face_match();
            UpdateResult::message(toast(ToastLevel::Success, "Identity verified"))
        }
        None => UpdateResult::none(),
    }
}

pub fn handle_toggle_fraud(state: &mut AppState, question: FraudQuestion) -> UpdateResult {
    if let Some(ws) = state.workstation.as_mut() {
        ws.toggle_fraud(question);
    }
    UpdateResult::none()
}

pub fn handle_append_tag(state: &mut AppState, index: usize) -> UpdateResult {
    let Some(ws) = state.workstation.as_mut() else {
        return UpdateResult::none();
    };
    match ws.append_tag(index) {
        Ok(()) => UpdateResult::none(),
        Err(e) => reject(e),
    }
}

pub fn handle_begin_notes_edit(state: &mut AppState) -> UpdateResult {
    if let Some(ws) = state.workstation.as_mut() {
        ws.tab = WorkstationTab::Notes;
        ws.editing_notes = true;
    }
    UpdateResult::none()
}

pub fn handle_send_video_link(state: &mut AppState) -> UpdateResult {
    if state.controller.call_status() != agentdesk_core::CallStatus::AudioConnected {
        return reject(crate::workstation::WorkstationError::VideoLinkRequiresAudio);
    }
    let phone = state
        .controller
        .active_call()
        .map(|c| c.phone().to_string())
        .unwrap_or_else(|| state.fixtures.customer.phone.clone());
    info!("Video link sent to {}", phone);
    UpdateResult::message(toast(
        ToastLevel::Info,
        format!("Video link sent to {}", phone),
    ))
}
