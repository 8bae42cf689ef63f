//! Application state (Model in TEA pattern)

use std::sync::Arc;

use agentdesk_core::{CallLog, CallRecord, FixtureSet, TimelineEvent, ViewState};

use crate::agent::AgentState;
use crate::call_setup::{FormField, StartCallForm};
use crate::config::Settings;
use crate::controller::Controller;
use crate::toast::ToastState;
use crate::views::ViewStates;
use crate::workstation::{MountId, WorkstationState};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Topmost surface, which receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    LogoutConfirm,
    Workstation,
    Dialing,
    StartCall,
    Popover,
    View(ViewState),
}

/// Text field that currently captures printable keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTarget {
    StartCallPhone,
    Notes,
    HistoryFilter,
    BacktraceSearch,
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,

    /// Navigation and call lifecycle
    pub controller: Controller,

    pub agent: AgentState,

    pub toasts: ToastState,

    pub start_call_form: StartCallForm,

    /// Present while a call is connected
    pub workstation: Option<WorkstationState>,

    pub views: ViewStates,

    pub settings: Settings,

    pub fixtures: Arc<FixtureSet>,

    /// Incremented on logout; timer messages from an older session are dropped
    session: u64,

    next_mount: u64,

    /// Animation frame counter, advanced by `Message::Tick`
    pub tick_count: u64,
}

impl AppState {
    pub fn new(settings: Settings, fixtures: Arc<FixtureSet>) -> Self {
        let start_call_form =
            StartCallForm::new(fixtures.customer.phone.clone(), settings.calls.default_kind);
        Self {
            phase: AppPhase::Running,
            controller: Controller::new(),
            agent: AgentState::default(),
            toasts: ToastState::default(),
            start_call_form,
            workstation: None,
            views: ViewStates::default(),
            settings,
            fixtures,
            session: 0,
            next_mount: 0,
            tick_count: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    /// Allocate an id for a new workstation mount.
    pub fn next_mount(&mut self) -> MountId {
        self.next_mount += 1;
        MountId(self.next_mount)
    }

    /// Fresh start-call form prefilled with the current customer.
    pub fn reset_start_call_form(&mut self) {
        self.start_call_form = StartCallForm::new(
            self.fixtures.customer.phone.clone(),
            self.settings.calls.default_kind,
        );
    }

    /// Tear the session down to the initial signed-out state. Settings,
    /// fixtures and id counters survive.
    pub fn reset_session(&mut self) {
        self.controller = Controller::new();
        self.agent = AgentState::default();
        self.toasts.clear();
        self.workstation = None;
        self.views = ViewStates::default();
        self.reset_start_call_form();
        self.session += 1;
    }

    pub fn focus(&self) -> Focus {
        let vis = self.controller.visibility();
        if vis.logout_confirm {
            Focus::LogoutConfirm
        } else if vis.workstation {
            Focus::Workstation
        } else if vis.dialing_overlay {
            Focus::Dialing
        } else if vis.start_call_modal {
            Focus::StartCall
        } else if vis.popover.is_open() {
            Focus::Popover
        } else {
            Focus::View(self.controller.view())
        }
    }

    pub fn text_target(&self) -> Option<TextTarget> {
        match self.focus() {
            Focus::StartCall if self.start_call_form.focus == FormField::Phone => {
                Some(TextTarget::StartCallPhone)
            }
            Focus::Workstation => self
                .workstation
                .as_ref()
                .filter(|w| w.editing_notes)
                .map(|_| TextTarget::Notes),
            Focus::View(ViewState::History) if self.views.history.filtering => {
                Some(TextTarget::HistoryFilter)
            }
            Focus::View(ViewState::Backtrace) if self.views.backtrace.searching => {
                Some(TextTarget::BacktraceSearch)
            }
            _ => None,
        }
    }

    pub fn selected_recent_call(&self) -> Option<&CallLog> {
        self.fixtures
            .recent_calls
            .get(self.views.dashboard.selected)
    }

    pub fn visible_history(&self) -> Vec<&CallRecord> {
        self.fixtures.filter_history(&self.views.history.filter)
    }

    pub fn visible_timeline(&self) -> Vec<&TimelineEvent> {
        self.fixtures.filter_timeline(&self.views.backtrace.query)
    }

    /// Outbound lines from config
    pub fn outbound_lines(&self) -> &[String] {
        &self.settings.calls.outbound_numbers
    }
}
