//! Navigation and call-lifecycle controller
//!
//! Owns the view selector, the call status machine and the overlay flags.
//! Fields are private: every change goes through an operation, and a
//! rejected operation leaves the controller untouched.
//!
//! ```text
//! Idle/Ended --confirm_start_call--> Dialing --connect_audio--> AudioConnected
//!                                       |                            |
//!                                       |                     upgrade_to_video
//!                                       |                            v
//!                                       +------ end_call ------ VideoConnected
//!                                                  |
//!                                                  v
//!                                                 Idle
//! ```

use std::fmt;

use agentdesk_core::prelude::*;
use agentdesk_core::{ActivePopover, CallId, CallStatus, FixtureSet, Popover, ViewState};
use thiserror::Error;

use crate::call_setup::{CallSetup, CallSetupError};

/// Operation names, carried by [`ControllerError::InvalidTransition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    RequestStartCall,
    ConfirmStartCall,
    ConnectAudio,
    UpgradeToVideo,
    EndCall,
    SignIn,
    SignOut,
    SetAvailable,
    SetBusy,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::RequestStartCall => "start a call",
            Operation::ConfirmStartCall => "dial",
            Operation::ConnectAudio => "connect audio",
            Operation::UpgradeToVideo => "upgrade to video",
            Operation::EndCall => "end the call",
            Operation::SignIn => "sign in",
            Operation::SignOut => "sign out",
            Operation::SetAvailable => "set available",
            Operation::SetBusy => "set busy",
        };
        f.write_str(name)
    }
}

/// A rejected controller operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("Cannot {operation} while {status}")]
    InvalidTransition {
        operation: Operation,
        status: String,
    },

    #[error("No call with id '{id}'")]
    UnknownCall { id: CallId },

    #[error("No call is waiting to be started")]
    NoPendingStartCall,

    #[error("No logout is waiting for confirmation")]
    NoPendingLogout,

    #[error("Select a call before opening details")]
    DetailsWithoutSelection,

    #[error(transparent)]
    InvalidCallSetup(#[from] CallSetupError),
}

impl ControllerError {
    fn transition(operation: Operation, status: impl fmt::Display) -> Self {
        Self::InvalidTransition {
            operation,
            status: status.to_string(),
        }
    }
}

pub type ControllerResult = std::result::Result<(), ControllerError>;

/// Which surfaces are on screen. Derived from [`Controller`], never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub sidebar: bool,
    pub header: bool,
    /// Content view to render. `None` only for Details without a selection.
    pub content: Option<ViewState>,
    pub start_call_modal: bool,
    pub dialing_overlay: bool,
    pub workstation: bool,
    pub logout_confirm: bool,
    pub popover: ActivePopover,
}

/// Controller state tuple.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Controller {
    call_status: CallStatus,
    view: ViewState,
    selected_call_id: Option<CallId>,
    show_start_call_modal: bool,
    show_logout_confirm: bool,
    active_popover: ActivePopover,
    active_call: Option<CallSetup>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────

    pub fn call_status(&self) -> CallStatus {
        self.call_status
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn selected_call_id(&self) -> Option<&CallId> {
        self.selected_call_id.as_ref()
    }

    pub fn show_start_call_modal(&self) -> bool {
        self.show_start_call_modal
    }

    pub fn show_logout_confirm(&self) -> bool {
        self.show_logout_confirm
    }

    pub fn active_popover(&self) -> ActivePopover {
        self.active_popover
    }

    /// Setup of the call being dialed or in progress.
    pub fn active_call(&self) -> Option<&CallSetup> {
        self.active_call.as_ref()
    }

    // ─────────────────────────────────────────────────────────
    // Call lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn request_start_call(&mut self) -> ControllerResult {
        if self.call_status.is_active() {
            return Err(ControllerError::transition(
                Operation::RequestStartCall,
                self.call_status,
            ));
        }
        self.show_start_call_modal = true;
        debug!("Start-call dialog opened");
        Ok(())
    }

    /// Close the dialog and start dialing in one step.
    pub fn confirm_start_call(&mut self, setup: CallSetup) -> ControllerResult {
        if !self.show_start_call_modal {
            return Err(ControllerError::NoPendingStartCall);
        }
        if self.call_status.is_active() {
            return Err(ControllerError::transition(
                Operation::ConfirmStartCall,
                self.call_status,
            ));
        }
        info!(
            "Dialing {} from {} ({:?})",
            setup.phone(),
            setup.outbound_number(),
            setup.call_kind()
        );
        self.show_start_call_modal = false;
        self.call_status = CallStatus::Dialing;
        self.active_call = Some(setup);
        Ok(())
    }

    pub fn cancel_start_call(&mut self) -> ControllerResult {
        if !self.show_start_call_modal {
            return Err(ControllerError::NoPendingStartCall);
        }
        self.show_start_call_modal = false;
        debug!("Start-call dialog cancelled");
        Ok(())
    }

    pub fn connect_audio(&mut self) -> ControllerResult {
        self.advance(
            Operation::ConnectAudio,
            CallStatus::Dialing,
            CallStatus::AudioConnected,
        )
    }

    pub fn upgrade_to_video(&mut self) -> ControllerResult {
        self.advance(
            Operation::UpgradeToVideo,
            CallStatus::AudioConnected,
            CallStatus::VideoConnected,
        )
    }

    pub fn end_call(&mut self) -> ControllerResult {
        if !self.call_status.is_active() {
            return Err(ControllerError::transition(
                Operation::EndCall,
                self.call_status,
            ));
        }
        info!("Call ended from {}", self.call_status);
        self.call_status = CallStatus::Idle;
        self.active_call = None;
        Ok(())
    }

    fn advance(&mut self, op: Operation, from: CallStatus, to: CallStatus) -> ControllerResult {
        if self.call_status != from {
            return Err(ControllerError::transition(op, self.call_status));
        }
        debug!("Call status {} -> {}", from, to);
        self.call_status = to;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────

    /// Switch views. Details is only reachable with a selection in place;
    /// every other view clears the selection.
    pub fn navigate_to(&mut self, view: ViewState) -> ControllerResult {
        if view == ViewState::Details {
            if self.selected_call_id.is_none() {
                return Err(ControllerError::DetailsWithoutSelection);
            }
        } else {
            self.selected_call_id = None;
        }
        debug!("View {:?} -> {:?}", self.view, view);
        self.view = view;
        Ok(())
    }

    pub fn open_details(&mut self, id: CallId, fixtures: &FixtureSet) -> ControllerResult {
        if !fixtures.contains_call(&id) {
            return Err(ControllerError::UnknownCall { id });
        }
        debug!("Opening details for {}", id);
        self.selected_call_id = Some(id);
        self.view = ViewState::Details;
        Ok(())
    }

    pub fn open_backtrace(&mut self) {
        self.view = ViewState::Backtrace;
        self.selected_call_id = None;
    }

    pub fn back_to_dashboard(&mut self) {
        self.view = ViewState::Dashboard;
        self.selected_call_id = None;
    }

    /// No-op while the logout confirmation is up.
    pub fn toggle_popover(&mut self, popover: Popover) {
        if self.show_logout_confirm {
            debug!("Ignoring {:?} popover during logout confirmation", popover);
            return;
        }
        let target = ActivePopover::from(popover);
        self.active_popover = if self.active_popover == target {
            ActivePopover::None
        } else {
            target
        };
    }

    /// Returns whether a popover was actually closed.
    pub fn dismiss_popover_on_outside_click(&mut self) -> bool {
        let was_open = self.active_popover.is_open();
        self.active_popover = ActivePopover::None;
        was_open
    }

    // ─────────────────────────────────────────────────────────
    // Logout
    // ─────────────────────────────────────────────────────────

    pub fn request_logout(&mut self) {
        self.active_popover = ActivePopover::None;
        self.show_logout_confirm = true;
    }

    /// Reset to the initial state. The caller tears down the rest of the
    /// session (agent status, workstation, timers).
    pub fn confirm_logout(&mut self) -> ControllerResult {
        if !self.show_logout_confirm {
            return Err(ControllerError::NoPendingLogout);
        }
        info!("Logout confirmed");
        *self = Controller::default();
        Ok(())
    }

    pub fn cancel_logout(&mut self) -> ControllerResult {
        if !self.show_logout_confirm {
            return Err(ControllerError::NoPendingLogout);
        }
        self.show_logout_confirm = false;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Derived visibility
    // ─────────────────────────────────────────────────────────

    pub fn visibility(&self) -> Visibility {
        let in_video = self.call_status == CallStatus::VideoConnected;
        let content = match self.view {
            ViewState::Details if self.selected_call_id.is_none() => None,
            view => Some(view),
        };

        Visibility {
            sidebar: !in_video && !matches!(self.view, ViewState::Details | ViewState::Backtrace),
            header: !in_video && self.view == ViewState::Dashboard,
            content,
            start_call_modal: self.show_start_call_modal,
            dialing_overlay: self.call_status == CallStatus::Dialing,
            workstation: self.call_status.is_connected(),
            logout_confirm: self.show_logout_confirm,
            popover: self.active_popover,
        }
    }
}
