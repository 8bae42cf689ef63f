//! Agent availability state machine
//!
//! `Offline --sign_in--> (pending) --complete--> Preparing <--> Available <--> Busy`,
//! with `sign_out` returning to `Offline` from any signed-in status.

use agentdesk_core::AgentStatus;

use crate::controller::{ControllerError, ControllerResult, Operation};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentState {
    status: AgentStatus,
    signing_in: bool,
}

impl AgentState {
    pub fn status(&self) -> AgentStatus {
        self.status
    }

    /// A sign-in request is waiting on the back end.
    pub fn is_signing_in(&self) -> bool {
        self.signing_in
    }

    pub fn can_start_call(&self) -> bool {
        self.status == AgentStatus::Available
    }

    pub fn begin_sign_in(&mut self) -> ControllerResult {
        if self.status.is_signed_in() || self.signing_in {
            return Err(self.rejected(Operation::SignIn));
        }
        self.signing_in = true;
        Ok(())
    }

    /// Returns `false` when no sign-in was pending (stale completion).
    pub fn complete_sign_in(&mut self) -> bool {
        if !self.signing_in {
            return false;
        }
        self.signing_in = false;
        self.status = AgentStatus::Preparing;
        true
    }

    pub fn sign_out(&mut self) -> ControllerResult {
        if !self.status.is_signed_in() {
            return Err(self.rejected(Operation::SignOut));
        }
        self.status = AgentStatus::Offline;
        Ok(())
    }

    pub fn set_available(&mut self) -> ControllerResult {
        match self.status {
            AgentStatus::Preparing | AgentStatus::Busy => {
                self.status = AgentStatus::Available;
                Ok(())
            }
            _ => Err(self.rejected(Operation::SetAvailable)),
        }
    }

    pub fn set_busy(&mut self) -> ControllerResult {
        match self.status {
            AgentStatus::Available | AgentStatus::Preparing => {
                self.status = AgentStatus::Busy;
                Ok(())
            }
            _ => Err(self.rejected(Operation::SetBusy)),
        }
    }

    fn rejected(&self, operation: Operation) -> ControllerError {
        let status = if self.signing_in {
            "signing in".to_string()
        } else {
            self.status.label().to_lowercase()
        };
        ControllerError::InvalidTransition { operation, status }
    }
}
