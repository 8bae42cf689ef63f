//! Core domain types for the agent workstation

use std::fmt;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────
// Call lifecycle
// ─────────────────────────────────────────────────────────────────

/// Lifecycle phase of the (single) call the agent is handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CallStatus {
    #[default]
    Idle,
    Dialing,
    AudioConnected,
    VideoConnected,
    /// Terminal marker for a finished call. Never active.
    Ended,
}

impl CallStatus {
    /// Dialing or connected. Only one call may be active at a time.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            CallStatus::Dialing | CallStatus::AudioConnected | CallStatus::VideoConnected
        )
    }

    /// Audio or video media is flowing.
    pub fn is_connected(&self) -> bool {
        matches!(self, CallStatus::AudioConnected | CallStatus::VideoConnected)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CallStatus::Idle => "idle",
            CallStatus::Dialing => "dialing",
            CallStatus::AudioConnected => "audio connected",
            CallStatus::VideoConnected => "video connected",
            CallStatus::Ended => "ended",
        }
    }
}

impl fmt::Display for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Media kind requested when placing a call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallKind {
    #[default]
    Video,
    Audio,
}

impl CallKind {
    pub fn toggled(self) -> Self {
        match self {
            CallKind::Video => CallKind::Audio,
            CallKind::Audio => CallKind::Video,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CallKind::Video => "Video",
            CallKind::Audio => "Audio",
        }
    }
}

/// Identifier of a recent call log or history record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallId(String);

impl CallId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CallId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ─────────────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────────────

/// The main content view. Exactly one is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewState {
    #[default]
    Dashboard,
    Details,
    Backtrace,
    History,
    Report,
}

impl ViewState {
    pub const ALL: [ViewState; 5] = [
        ViewState::Dashboard,
        ViewState::Details,
        ViewState::Backtrace,
        ViewState::History,
        ViewState::Report,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Dashboard => "Workbench",
            ViewState::Details => "Call Details",
            ViewState::Backtrace => "Backtrace",
            ViewState::History => "History",
            ViewState::Report => "Quality Report",
        }
    }
}

/// A header popover that can be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Popover {
    Alerts,
    Settings,
}

/// The header popover currently open, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ActivePopover {
    #[default]
    None,
    Alerts,
    Settings,
}

impl ActivePopover {
    pub fn is_open(&self) -> bool {
        !matches!(self, ActivePopover::None)
    }
}

impl From<Popover> for ActivePopover {
    fn from(p: Popover) -> Self {
        match p {
            Popover::Alerts => ActivePopover::Alerts,
            Popover::Settings => ActivePopover::Settings,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Agent
// ─────────────────────────────────────────────────────────────────

/// Availability of the signed-in agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AgentStatus {
    #[default]
    Offline,
    Preparing,
    Available,
    Busy,
}

impl AgentStatus {
    pub fn is_signed_in(&self) -> bool {
        !matches!(self, AgentStatus::Offline)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgentStatus::Offline => "Offline",
            AgentStatus::Preparing => "Preparing",
            AgentStatus::Available => "Available",
            AgentStatus::Busy => "Busy",
        }
    }
}

/// Risk assessment attached to a customer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low risk",
            RiskLevel::Medium => "Medium risk",
            RiskLevel::High => "High risk",
        }
    }
}

/// Format a second count as `MM:SS`, rolling into `H:MM:SS` past one hour.
pub fn format_clock(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Format a second count as `05m12s`, the style used in call lists.
pub fn format_duration_short(total_secs: u64) -> String {
    format!("{:02}m{:02}s", total_secs / 60, total_secs % 60)
}
