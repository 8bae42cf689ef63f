//! Local UI state of the five content views
//!
//! None of this affects navigation; the controller owns that.

/// Move a list cursor one step, clamped to `[0, len)`.
pub fn step_selection(selected: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (selected + 1).min(len - 1)
    } else {
        selected.saturating_sub(1)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    /// Cursor in the recent calls list
    pub selected: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryState {
    pub selected: usize,
    /// Agent name/account filter
    pub filter: String,
    /// Keystrokes go to the filter
    pub filtering: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    Basic,
    Transcript,
    Quality,
    Summary,
    Location,
}

impl DetailTab {
    pub const ALL: [DetailTab; 5] = [
        DetailTab::Basic,
        DetailTab::Transcript,
        DetailTab::Quality,
        DetailTab::Summary,
        DetailTab::Location,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DetailTab::Basic => "Basic",
            DetailTab::Transcript => "Transcript",
            DetailTab::Quality => "AI Quality",
            DetailTab::Summary => "Summary",
            DetailTab::Location => "Location",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailsState {
    pub tab: DetailTab,
    /// Recording playback
    pub playing: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportPeriod {
    Today,
    #[default]
    Week,
    Month,
    Custom,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 4] = [
        ReportPeriod::Today,
        ReportPeriod::Week,
        ReportPeriod::Month,
        ReportPeriod::Custom,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportPeriod::Today => "Today",
            ReportPeriod::Week => "This week",
            ReportPeriod::Month => "This month",
            ReportPeriod::Custom => "Custom",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportState {
    pub period: ReportPeriod,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BacktraceState {
    pub query: String,
    pub searching: bool,
    pub selected: usize,
}

/// Local state of every view, reset on logout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewStates {
    pub dashboard: DashboardState,
    pub history: HistoryState,
    pub details: DetailsState,
    pub report: ReportState,
    pub backtrace: BacktraceState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_selection_clamps() {
        assert_eq!(step_selection(0, 5, false), 0);
        assert_eq!(step_selection(0, 5, true), 1);
        assert_eq!(step_selection(4, 5, true), 4);
        assert_eq!(step_selection(3, 0, true), 0);
    }

    #[test]
    fn test_detail_tab_cycle() {
        assert_eq!(DetailTab::Basic.next(), DetailTab::Transcript);
        assert_eq!(DetailTab::Location.next(), DetailTab::Basic);
        assert_eq!(DetailTab::Basic.prev(), DetailTab::Location);
    }

    #[test]
    fn test_report_period_cycle() {
        assert_eq!(ReportPeriod::default(), ReportPeriod::Week);
        assert_eq!(ReportPeriod::Custom.next(), ReportPeriod::Today);
        assert_eq!(ReportPeriod::Today.prev(), ReportPeriod::Custom);
    }
}
