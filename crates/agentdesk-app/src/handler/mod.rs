//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `call`: Call lifecycle and the start-call form
//! - `navigation`: Views, popovers and logout
//! - `agent`: Agent status and toasts
//! - `workstation`: In-call tools
//! - `views`: Local state of the content views
//! - `keys`: Key event handlers per focused surface
//! - `helpers`: Shared rejection handling

pub(crate) mod agent;
pub(crate) mod call;
pub(crate) mod helpers;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod update;
pub(crate) mod views;
pub(crate) mod workstation;

#[cfg(test)]
mod tests;

use std::time::Duration;

use crate::message::Message;
use crate::timers::{TimerKind, TimerScope};
use crate::workstation::MountId;

pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Deliver `message` once after `after`
    ScheduleTimer {
        kind: TimerKind,
        after: Duration,
        message: Message,
    },

    /// Start the one-second call clock for a workstation mount
    StartCallClock { mount: MountId },

    /// Abort every timer in the scope
    CancelTimers(TimerScope),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Attach a follow-up message to this result
    pub fn then(mut self, msg: Message) -> Self {
        self.message = Some(msg);
        self
    }
}
