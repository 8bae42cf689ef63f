//! Configuration types for agentdesk

use std::path::PathBuf;
use std::time::Duration;

use agentdesk_core::CallKind;
use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub agent: AgentSettings,

    #[serde(default)]
    pub calls: CallSettings,

    #[serde(default)]
    pub timers: TimerSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub fixtures: FixtureSettings,
}

/// Identity shown in the sidebar and settings popover
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AgentSettings {
    #[serde(default = "default_agent_id")]
    pub id: String,

    #[serde(default = "default_agent_name")]
    pub name: String,

    #[serde(default = "default_agent_title")]
    pub title: String,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            id: default_agent_id(),
            name: default_agent_name(),
            title: default_agent_title(),
        }
    }
}

fn default_agent_id() -> String {
    "88219".to_string()
}

fn default_agent_name() -> String {
    "Yang Huai".to_string()
}

fn default_agent_title() -> String {
    "Senior Agent".to_string()
}

/// Outbound calling options
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CallSettings {
    /// Lines the agent may dial out from. The first one is preselected.
    #[serde(default = "default_outbound_numbers")]
    pub outbound_numbers: Vec<String>,

    #[serde(default)]
    pub default_kind: CallKind,
}

impl Default for CallSettings {
    fn default() -> Self {
        Self {
            outbound_numbers: default_outbound_numbers(),
            default_kind: CallKind::default(),
        }
    }
}

fn default_outbound_numbers() -> Vec<String> {
    vec!["025-88219999".to_string(), "025-88880000".to_string()]
}

/// Delays of the simulated back-end operations, in milliseconds
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TimerSettings {
    #[serde(default = "default_id_scan_ms")]
    pub id_scan_ms: u64,

    #[serde(default = "default_face_match_ms")]
    pub face_match_ms: u64,

    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,

    #[serde(default = "default_sign_in_ms")]
    pub sign_in_ms: u64,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            id_scan_ms: default_id_scan_ms(),
            face_match_ms: default_face_match_ms(),
            toast_ms: default_toast_ms(),
            sign_in_ms: default_sign_in_ms(),
        }
    }
}

impl TimerSettings {
    pub fn id_scan(&self) -> Duration {
        Duration::from_millis(self.id_scan_ms)
    }

    pub fn face_match(&self) -> Duration {
        Duration::from_millis(self.face_match_ms)
    }

    pub fn toast(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }

    pub fn sign_in(&self) -> Duration {
        Duration::from_millis(self.sign_in_ms)
    }
}

fn default_id_scan_ms() -> u64 {
    1500
}

fn default_face_match_ms() -> u64 {
    2000
}

fn default_toast_ms() -> u64 {
    3000
}

fn default_sign_in_ms() -> u64 {
    500
}

/// Terminal UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Event poll timeout; also the redraw cadence while idle
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Capture mouse events (pointer-down dismisses popovers)
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            mouse: true,
        }
    }
}

impl UiSettings {
    /// Poll timeout, never below 10ms.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_true() -> bool {
    true
}

/// Where business data comes from
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FixtureSettings {
    /// JSON fixture file. Empty means the built-in set.
    #[serde(default)]
    pub path: String,
}

impl FixtureSettings {
    pub fn file(&self) -> Option<PathBuf> {
        let trimmed = self.path.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}
