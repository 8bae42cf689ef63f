//! Fixture provider for all business data shown by the workstation
//!
//! The built-in set is compiled into the binary. A replacement set can be
//! loaded from a JSON file with the same shape.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, ResultExt};
use crate::records::{
    CallLog, CallRecord, CallReview, Customer, DailyStat, EventStatus, HourlyVolume, QualityReport,
    TimelineEvent,
};
use crate::types::CallId;

const BUILTIN_FIXTURES: &str = include_str!("../fixtures/builtin.json");

/// Read-only data set backing every view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureSet {
    pub customer: Customer,
    pub daily_stats: Vec<DailyStat>,
    pub hourly_volume: Vec<HourlyVolume>,
    pub recent_calls: Vec<CallLog>,
    /// Total shown in the history footer; the table only holds one page.
    pub history_total: u32,
    pub history: Vec<CallRecord>,
    /// Review shown in the details view. Every known call shares it.
    pub review: CallReview,
    pub timeline: Vec<TimelineEvent>,
    pub report: QualityReport,
}

/// A call located in either the recent list or the history table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CallRef<'a> {
    Recent(&'a CallLog),
    History(&'a CallRecord),
}

impl FixtureSet {
    /// Parse the fixtures compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_FIXTURES)
    }

    /// Load a fixture set from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::fixtures_not_found(path));
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixtures {:?}", path))?;
        let set = Self::from_json(&content)
            .with_context(|| format!("Rejected fixture file {:?}", path))?;
        tracing::info!(
            "Loaded fixtures from {:?} ({} recent calls, {} history records)",
            path,
            set.recent_calls.len(),
            set.history.len()
        );
        Ok(set)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let set: FixtureSet = serde_json::from_str(content)?;
        set.validate()?;
        Ok(set)
    }

    /// The customer and history must be present, and call ids must be
    /// unique across the recent list and history.
    fn validate(&self) -> Result<()> {
        if self.customer.id.trim().is_empty() {
            return Err(Error::fixtures_invalid("customer has no id"));
        }
        if self.history.is_empty() {
            return Err(Error::fixtures_invalid("history is empty"));
        }

        let mut seen = HashSet::new();
        let ids = self
            .recent_calls
            .iter()
            .map(|c| &c.id)
            .chain(self.history.iter().map(|r| &r.id));
        for id in ids {
            if !seen.insert(id) {
                return Err(Error::fixtures_invalid(format!("duplicate call id '{}'", id)));
            }
        }
        Ok(())
    }

    pub fn find_call(&self, id: &CallId) -> Option<CallRef<'_>> {
        if let Some(log) = self.recent_calls.iter().find(|c| &c.id == id) {
            return Some(CallRef::Recent(log));
        }
        self.history
            .iter()
            .find(|r| &r.id == id)
            .map(CallRef::History)
    }

    pub fn contains_call(&self, id: &CallId) -> bool {
        self.find_call(id).is_some()
    }

    /// Review for a known call. `None` for ids no fixture knows.
    pub fn review_for(&self, id: &CallId) -> Option<&CallReview> {
        self.contains_call(id).then_some(&self.review)
    }

    /// History records whose agent name or account contains `query`.
    pub fn filter_history(&self, query: &str) -> Vec<&CallRecord> {
        let needle = query.trim().to_lowercase();
        self.history
            .iter()
            .filter(|r| {
                needle.is_empty()
                    || r.agent_name.to_lowercase().contains(&needle)
                    || r.agent_account.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn filter_timeline(&self, query: &str) -> Vec<&TimelineEvent> {
        self.timeline.iter().filter(|e| e.matches(query)).collect()
    }

    /// Warning-level timeline events, listed in the alerts popover.
    pub fn alerts(&self) -> Vec<&TimelineEvent> {
        self.timeline
            .iter()
            .filter(|e| e.status == EventStatus::Warning)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::ScoreBand;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_fixtures_parse() {
        let set = FixtureSet::builtin().unwrap();
        assert_eq!(set.customer.id, "C-8821");
        assert_eq!(set.customer.phone, "134****6133");
        assert_eq!(set.recent_calls.len(), 5);
        assert_eq!(set.history.len(), 9);
        assert_eq!(set.history_total, 128);
        assert_eq!(set.timeline.len(), 6);
        assert_eq!(set.report.ranking.len(), 7);
    }

    #[test]
    fn test_find_call_in_both_lists() {
        let set = FixtureSet::builtin().unwrap();
        assert!(matches!(
            set.find_call(&CallId::from("1")),
            Some(CallRef::Recent(_))
        ));
        assert!(matches!(
            set.find_call(&CallId::from("seataaf09bd...")),
            Some(CallRef::History(_))
        ));
        assert!(set.find_call(&CallId::from("nope")).is_none());
    }

    #[test]
    fn test_review_only_for_known_calls() {
        let set = FixtureSet::builtin().unwrap();
        assert!(set.review_for(&CallId::from("2")).is_some());
        assert!(set.review_for(&CallId::from("unknown")).is_none());
        assert_eq!(set.review.quality.score, 98);
    }

    #[test]
    fn test_history_bands_match_scores() {
        let set = FixtureSet::builtin().unwrap();
        let unscored = set
            .history
            .iter()
            .filter(|r| r.score_band() == ScoreBand::Unscored)
            .count();
        let poor = set
            .history
            .iter()
            .filter(|r| r.score_band() == ScoreBand::Poor)
            .count();
        assert_eq!(unscored, 2);
        assert_eq!(poor, 2);
        assert!(set
            .history
            .iter()
            .filter(|r| !r.answered)
            .all(|r| r.talk_secs().is_none()));
    }

    #[test]
    fn test_filter_history_by_agent() {
        let set = FixtureSet::builtin().unwrap();
        assert_eq!(set.filter_history("").len(), 9);
        assert_eq!(set.filter_history("yang").len(), 9);
        assert_eq!(set.filter_history("YANGHUAI").len(), 9);
        assert!(set.filter_history("zhao").is_empty());
    }

    #[test]
    fn test_filter_timeline_and_alerts() {
        let set = FixtureSet::builtin().unwrap();
        assert_eq!(set.filter_timeline("").len(), 6);
        assert_eq!(set.filter_timeline("system").len(), 2);
        assert_eq!(set.alerts().len(), 1);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut set = FixtureSet::builtin().unwrap();
        set.history[0].id = CallId::from("1");
        let json = serde_json::to_string(&set).unwrap();
        let err = FixtureSet::from_json(&json).unwrap_err();
        assert!(matches!(err, Error::FixturesInvalid { .. }));
        assert!(err.to_string().contains("'1'"));
    }

    #[test]
    fn test_missing_customer_or_history_rejected() {
        let mut set = FixtureSet::builtin().unwrap();
        set.history.clear();
        let err = FixtureSet::from_json(&serde_json::to_string(&set).unwrap()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid fixture data: history is empty");

        let mut set = FixtureSet::builtin().unwrap();
        set.customer.id = String::new();
        let err = FixtureSet::from_json(&serde_json::to_string(&set).unwrap()).unwrap_err();
        assert!(matches!(err, Error::FixturesInvalid { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let set = FixtureSet::builtin().unwrap();
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&set).unwrap()).unwrap();

        let loaded = FixtureSet::load(file.path()).unwrap();
        assert_eq!(loaded, set);
    }

    #[test]
    fn test_load_missing_file() {
        let err = FixtureSet::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, Error::FixturesNotFound { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ \"customer\": ").unwrap();
        let err = FixtureSet::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
