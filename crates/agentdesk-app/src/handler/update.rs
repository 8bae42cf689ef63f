//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in the sibling modules:
//! - `call`: Call lifecycle and the start-call form
//! - `navigation`: Views, popovers and logout
//! - `agent`: Agent status and toasts
//! - `workstation`: In-call tools
//! - `views`: Content view cursors, filters and text entry

use agentdesk_core::prelude::*;

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{agent, call, keys::handle_key, navigation, views, workstation, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            info!("Quit requested");
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::PointerDown { in_header } => navigation::handle_pointer_down(state, in_header),

        Message::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Call Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::RequestStartCall => call::handle_request_start_call(state),
        Message::ConfirmStartCall => call::handle_confirm_start_call(state),
        Message::CancelStartCall => call::handle_cancel_start_call(state),
        Message::ConnectAudio => call::handle_connect_audio(state),
        Message::UpgradeToVideo => call::handle_upgrade_to_video(state),
        Message::EndCall => call::handle_end_call(state),

        Message::StartCallNextField => call::handle_form_next_field(state),
        Message::StartCallPrevField => call::handle_form_prev_field(state),
        Message::StartCallCycle { forward } => call::handle_form_cycle(state, forward),

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::NavigateTo(view) => navigation::handle_navigate_to(state, view),
        Message::OpenDetails(id) => navigation::handle_open_details(state, id),
        Message::OpenBacktrace => navigation::handle_open_backtrace(state),
        Message::BackToDashboard => navigation::handle_back_to_dashboard(state),
        Message::TogglePopover(popover) => navigation::handle_toggle_popover(state, popover),
        Message::RequestLogout => navigation::handle_request_logout(state),
        Message::ConfirmLogout => navigation::handle_confirm_logout(state),
        Message::CancelLogout => navigation::handle_cancel_logout(state),

        // ─────────────────────────────────────────────────────────
        // Agent Status and Toasts
        // ─────────────────────────────────────────────────────────
        Message::SignIn => agent::handle_sign_in(state),
        Message::SignInCompleted { session } => agent::handle_sign_in_completed(state, session),
        Message::SignOut => agent::handle_sign_out(state),
        Message::SetAvailable => agent::handle_set_available(state),
        Message::SetBusy => agent::handle_set_busy(state),
        Message::ShowToast { level, text } => agent::handle_show_toast(state, level, text),
        Message::ToastExpired { id } => agent::handle_toast_expired(state, id),

        // ─────────────────────────────────────────────────────────
        // Workstation
        // ─────────────────────────────────────────────────────────
        Message::CallClockTick { mount } => workstation::handle_clock_tick(state, mount),
        Message::ToggleMute => workstation::handle_toggle_mute(state),
        Message::ToggleCamera => workstation::handle_toggle_camera(state),
        Message::SelectWorkstationTab(tab) => workstation::handle_select_tab(state, tab),
        Message::NextWorkstationTab => workstation::handle_cycle_tab(state, true),
        Message::PrevWorkstationTab => workstation::handle_cycle_tab(state, false),
        Message::StartIdScan => workstation::handle_start_id_scan(state),
        Message::IdScanCompleted { mount } => workstation::handle_id_scan_completed(state, mount),
        Message::StartFaceMatch => workstation::handle_start_face_match(state),
        Message::FaceMatchCompleted { mount } => {
            workstation::handle_face_match_completed(state, mount)
        }
        Message::ToggleFraudCheck(question) => workstation::handle_toggle_fraud(state, question),
        Message::AppendQuickTag(index) => workstation::handle_append_tag(state, index),
        Message::BeginNotesEdit => workstation::handle_begin_notes_edit(state),
        Message::SendVideoLink => workstation::handle_send_video_link(state),

        // ─────────────────────────────────────────────────────────
        // Text Entry
        // ─────────────────────────────────────────────────────────
        Message::TextInput(c) => views::handle_text_input(state, c),
        Message::TextBackspace => views::handle_text_backspace(state),
        Message::EndTextEntry => views::handle_end_text_entry(state),

        // ─────────────────────────────────────────────────────────
        // Content Views
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => views::handle_select(state, true),
        Message::SelectPrevious => views::handle_select(state, false),
        Message::OpenSelected => views::handle_open_selected(state),
        Message::BeginHistoryFilter => views::handle_begin_history_filter(state),
        Message::ClearHistoryFilter => views::handle_clear_history_filter(state),
        Message::NextDetailTab => views::handle_detail_tab(state, true),
        Message::PrevDetailTab => views::handle_detail_tab(state, false),
        Message::TogglePlayback => views::handle_toggle_playback(state),
        Message::NextReportPeriod => views::handle_report_period(state, true),
        Message::PrevReportPeriod => views::handle_report_period(state, false),
        Message::BeginBacktraceSearch => views::handle_begin_backtrace_search(state),
    }
}
