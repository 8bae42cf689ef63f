//! Content view handlers: list cursors, filters, tabs and text entry

use agentdesk_core::prelude::*;
use agentdesk_core::{CallId, ViewState};

use crate::message::Message;
use crate::state::{AppState, Focus, TextTarget};
use crate::views::step_selection;

use super::UpdateResult;

pub fn handle_select(state: &mut AppState, forward: bool) -> UpdateResult {
    match state.focus() {
        Focus::View(ViewState::Dashboard) => {
            let len = state.fixtures.recent_calls.len();
            let cursor = &mut state.views.dashboard.selected;
            *cursor = step_selection(*cursor, len, forward);
        }
        Focus::View(ViewState::History) => {
            let len = state.visible_history().len();
            let cursor = &mut state.views.history.selected;
            *cursor = step_selection(*cursor, len, forward);
        }
        Focus::View(ViewState::Backtrace) => {
            let len = state.visible_timeline().len();
            let cursor = &mut state.views.backtrace.selected;
            *cursor = step_selection(*cursor, len, forward);
        }
        _ => {}
    }
    UpdateResult::none()
}

/// Turn the row under the cursor into an `OpenDetails` request.
pub fn handle_open_selected(state: &mut AppState) -> UpdateResult {
    let id: Option<CallId> = match state.focus() {
        Focus::View(ViewState::Dashboard) => state.selected_recent_call().map(|c| c.id.clone()),
        Focus::View(ViewState::History) => state
            .visible_history()
            .get(state.views.history.selected)
            .map(|r| r.id.clone()),
        _ => None,
    };
    match id {
        Some(id) => UpdateResult::message(Message::OpenDetails(id)),
        None => UpdateResult::none(),
    }
}

pub fn handle_begin_history_filter(state: &mut AppState) -> UpdateResult {
    state.views.history.filtering = true;
    UpdateResult::none()
}

pub fn handle_clear_history_filter(state: &mut AppState) -> UpdateResult {
    let history = &mut state.views.history;
    history.filter.clear();
    history.filtering = false;
    history.selected = 0;
    UpdateResult::none()
}

pub fn handle_begin_backtrace_search(state: &mut AppState) -> UpdateResult {
    state.views.backtrace.searching = true;
    UpdateResult::none()
}

pub fn handle_detail_tab(state: &mut AppState, forward: bool) -> UpdateResult {
    let details = &mut state.views.details;
    details.tab = if forward {
        details.tab.next()
    } else {
        details.tab.prev()
    };
    UpdateResult::none()
}

pub fn handle_toggle_playback(state: &mut AppState) -> UpdateResult {
    let details = &mut state.views.details;
    details.playing = !details.playing;
    UpdateResult::none()
}

pub fn handle_report_period(state: &mut AppState, forward: bool) -> UpdateResult {
    let report = &mut state.views.report;
    report.period = if forward {
        report.period.next()
    } else {
        report.period.prev()
    };
    debug!("Report period: {}", report.period.label());
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────
// Text entry
// ─────────────────────────────────────────────────────────────────

pub fn handle_text_input(state: &mut AppState, c: char) -> UpdateResult {
    match state.text_target() {
        Some(TextTarget::StartCallPhone) => state.start_call_form.push_char(c),
        Some(TextTarget::Notes) => {
            if let Some(ws) = state.workstation.as_mut() {
                ws.push_note_char(c);
            }
        }
        Some(TextTarget::HistoryFilter) => {
            state.views.history.filter.push(c);
            state.views.history.selected = 0;
        }
        Some(TextTarget::BacktraceSearch) => {
            state.views.backtrace.query.push(c);
            state.views.backtrace.selected = 0;
        }
        None => trace!("Text input {:?} with no focused field", c),
    }
    UpdateResult::none()
}

pub fn handle_text_backspace(state: &mut AppState) -> UpdateResult {
    match state.text_target() {
        Some(TextTarget::StartCallPhone) => state.start_call_form.backspace(),
        Some(TextTarget::Notes) => {
            if let Some(ws) = state.workstation.as_mut() {
                ws.pop_note_char();
            }
        }
        Some(TextTarget::HistoryFilter) => {
            state.views.history.filter.pop();
            state.views.history.selected = 0;
        }
        Some(TextTarget::BacktraceSearch) => {
            state.views.backtrace.query.pop();
            state.views.backtrace.selected = 0;
        }
        None => {}
    }
    UpdateResult::none()
}

pub fn handle_end_text_entry(state: &mut AppState) -> UpdateResult {
    match state.text_target() {
        Some(TextTarget::Notes) => {
            if let Some(ws) = state.workstation.as_mut() {
                ws.editing_notes = false;
            }
        }
        Some(TextTarget::HistoryFilter) => state.views.history.filtering = false,
        Some(TextTarget::BacktraceSearch) => state.views.backtrace.searching = false,
        // The phone field stays editable while it has focus.
        Some(TextTarget::StartCallPhone) | None => {}
    }
    UpdateResult::none()
}
