//! # agentdesk-core - Core Domain Types
//!
//! Foundation crate for agentdesk. Provides the call/navigation enums shared
//! by every layer, the read-only business records, the fixture provider,
//! error handling and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`CallStatus`] - Lifecycle of the single active call
//! - [`ViewState`] - Main content view selector
//! - [`ActivePopover`], [`Popover`] - Header popovers
//! - [`AgentStatus`] - Agent availability
//! - [`CallId`], [`CallKind`], [`RiskLevel`]
//!
//! ### Records (`records`)
//! - [`Customer`], [`CallLog`], [`CallRecord`], [`TimelineEvent`],
//!   [`CallReview`], [`QualityReport`]
//!
//! ### Fixtures (`fixtures`)
//! - [`FixtureSet`] - Built-in or JSON-loaded data set
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum grouped by layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use agentdesk_core::prelude::*;
//! ```

pub mod error;
pub mod fixtures;
pub mod logging;
pub mod records;
pub mod types;

/// Prelude for common imports used throughout all agentdesk crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use fixtures::{CallRef, FixtureSet};
pub use records::{
    AgentRank, CallDirection, CallLog, CallOutcome, CallRecord, CallReview, CallSummary,
    CheckResult, Customer, DailyStat, Defect, EventStatus, HourlyVolume, Kpi, LabeledValue,
    LocationInfo, QualityCheck, QualityItem, QualityMetric, QualityReport, RankTrend, ScoreBand,
    ScoreBucket, Speaker, TimelineEvent, TimelineKind, TranscriptLine, TrendPoint,
};
pub use types::{
    format_clock, format_duration_short, ActivePopover, AgentStatus, CallId, CallKind,
    CallStatus, Popover, RiskLevel, ViewState,
};
