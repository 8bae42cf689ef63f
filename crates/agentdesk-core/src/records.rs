//! Business records served by the fixture provider
//!
//! Everything here is read-only display data. Controller state lives in
//! `agentdesk-app`.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::types::{CallId, CallKind, RiskLevel};

// ─────────────────────────────────────────────────────────────────
// Customer & dashboard
// ─────────────────────────────────────────────────────────────────

/// The customer the agent is currently serving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    /// Masked phone number, e.g. `134****6133`
    pub phone: String,
    /// Masked national id number
    pub id_number: String,
    pub avatar: String,
    pub location: String,
    pub risk_level: RiskLevel,
    pub credit_score: u16,
}

/// Outcome shown for a recent call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallOutcome {
    Completed,
    Missed,
    Rejected,
}

impl CallOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            CallOutcome::Completed => "Completed",
            CallOutcome::Missed => "Missed",
            CallOutcome::Rejected => "Cancelled",
        }
    }
}

/// Entry of the dashboard's recent calls list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallLog {
    pub id: CallId,
    pub customer_name: String,
    pub phone: String,
    pub kind: CallKind,
    pub start_time: NaiveTime,
    pub duration_secs: u64,
    pub outcome: CallOutcome,
}

/// One of the dashboard's headline counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStat {
    pub label: String,
    pub value: String,
}

/// Call volume for one hour of the working day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyVolume {
    pub hour: String,
    pub calls: u32,
}

// ─────────────────────────────────────────────────────────────────
// History
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallDirection {
    Outbound,
    Inbound,
}

impl CallDirection {
    pub fn label(&self) -> &'static str {
        match self {
            CallDirection::Outbound => "Outbound",
            CallDirection::Inbound => "Inbound",
        }
    }
}

/// Quality band derived from a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScoreBand {
    /// Score 0 means the call was never reviewed (usually a missed call).
    Unscored,
    Poor,
    Fair,
    Good,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => ScoreBand::Unscored,
            1..=59 => ScoreBand::Poor,
            60..=89 => ScoreBand::Fair,
            _ => ScoreBand::Good,
        }
    }
}

/// A completed or missed call in the agent's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    pub id: CallId,
    pub agent_name: String,
    pub agent_account: String,
    pub phone: String,
    pub answered: bool,
    pub direction: CallDirection,
    pub outbound_number: String,
    pub kind: CallKind,
    pub start_time: NaiveDateTime,
    pub answer_time: Option<NaiveDateTime>,
    pub end_time: NaiveDateTime,
    pub score: u8,
}

impl CallRecord {
    /// Talk time from answer to hang-up. `None` for unanswered calls.
    pub fn talk_secs(&self) -> Option<u64> {
        let answered_at = self.answer_time?;
        let secs = (self.end_time - answered_at).num_seconds();
        u64::try_from(secs).ok()
    }

    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

// ─────────────────────────────────────────────────────────────────
// Call review (details view)
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Agent,
    Customer,
    /// Automated platform note, e.g. a completed face match
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptLine {
    /// Offset into the recording, `MM:SS`
    pub at: String,
    pub speaker: Speaker,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckResult {
    Pass,
    Warning,
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityItem {
    pub at: String,
    pub title: String,
    pub result: CheckResult,
    pub emotion: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityMetric {
    pub label: String,
    pub percent: u8,
}

/// AI quality inspection of a recorded call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityCheck {
    pub score: u8,
    pub grade: String,
    pub metrics: Vec<QualityMetric>,
    pub items: Vec<QualityItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSummary {
    pub headline: String,
    pub entities: Vec<LabeledValue>,
    pub tags: Vec<String>,
    pub follow_ups: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub address: String,
    pub network: String,
    pub ip: String,
    pub cell_id: String,
    pub longitude: f64,
    pub latitude: f64,
}

/// Everything the details view shows for a call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallReview {
    pub transcript: Vec<TranscriptLine>,
    pub quality: QualityCheck,
    pub summary: CallSummary,
    pub location: LocationInfo,
}

// ─────────────────────────────────────────────────────────────────
// Backtrace timeline
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimelineKind {
    CallVideo,
    CallAudio,
    SystemAlert,
    DocSign,
    SmsSent,
    AppLogin,
}

impl TimelineKind {
    pub fn label(&self) -> &'static str {
        match self {
            TimelineKind::CallVideo => "Video call",
            TimelineKind::CallAudio => "Voice call",
            TimelineKind::SystemAlert => "System alert",
            TimelineKind::DocSign => "Document",
            TimelineKind::SmsSent => "Message",
            TimelineKind::AppLogin => "Login",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Success,
    Warning,
    Info,
}

/// One auditable event on the customer's timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: u32,
    pub kind: TimelineKind,
    pub time: NaiveDateTime,
    pub title: String,
    pub user: String,
    pub description: String,
    pub status: EventStatus,
    #[serde(default)]
    pub duration_secs: Option<u64>,
}

impl TimelineEvent {
    /// Case-insensitive match over title, user and description.
    /// An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        [&self.title, &self.user, &self.description]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

// ─────────────────────────────────────────────────────────────────
// Quality report
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpi {
    pub label: String,
    pub value: String,
    pub delta: String,
    /// Whether the delta is good news (a rise in violations is not)
    pub favorable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBucket {
    pub label: String,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defect {
    pub label: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub day: String,
    pub score: u8,
    pub calls: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankTrend {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRank {
    pub name: String,
    pub calls: u32,
    pub score: f32,
    pub trend: RankTrend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub kpis: Vec<Kpi>,
    pub distribution: Vec<ScoreBucket>,
    pub defects: Vec<Defect>,
    pub trend: Vec<TrendPoint>,
    pub ranking: Vec<AgentRank>,
}

impl QualityReport {
    /// Defects sorted by count, most frequent first.
    pub fn top_defects(&self) -> Vec<&Defect> {
        let mut sorted: Vec<&Defect> = self.defects.iter().collect();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
    }
}
