//! Quality report: KPIs, score distribution, top defects, trend and ranking

use agentdesk_app::views::{ReportPeriod, ReportState};
use agentdesk_core::{QualityReport, RankTrend};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Defects listed in the top defects card
const TOP_DEFECTS: usize = 5;

pub struct QualityReportView<'a> {
    report: &'a QualityReport,
    state: &'a ReportState,
}

impl<'a> QualityReportView<'a> {
    pub fn new(report: &'a QualityReport, state: &'a ReportState) -> Self {
        Self { report, state }
    }

    fn render_periods(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(" Period ", styles::text_muted())];
        for period in ReportPeriod::ALL {
            let style = if period == self.state.period {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {} ", period.label()), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled("  ←/→ change", styles::keybinding()));
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_kpis(&self, area: Rect, buf: &mut Buffer) {
        let count = self.report.kpis.len().max(1) as u32;
        let cards = Layout::horizontal(
            self.report
                .kpis
                .iter()
                .map(|_| Constraint::Ratio(1, count)),
        )
        .split(area);

        for (kpi, card) in self.report.kpis.iter().zip(cards.iter()) {
            let block = styles::glass_block(false);
            let inner = block.inner(*card);
            block.render(*card, buf);

            let delta_style = if kpi.favorable {
                Style::default().fg(palette::STATUS_GREEN)
            } else {
                Style::default().fg(palette::STATUS_RED)
            };
            Paragraph::new(vec![
                Line::from(Span::styled(kpi.label.as_str(), styles::text_muted())),
                Line::from(vec![
                    Span::styled(kpi.value.as_str(), styles::text_bright_bold()),
                    Span::styled(format!(" {}", kpi.delta), delta_style),
                ]),
            ])
            .render(inner, buf);
        }
    }

    fn render_distribution(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Score distribution ");
        let inner = block.inner(area);
        block.render(area, buf);

        let bar_room = inner.width.saturating_sub(24) as usize;
        let lines: Vec<Line> = self
            .report
            .distribution
            .iter()
            .map(|bucket| {
                let filled = bar_room * usize::from(bucket.percent.min(100)) / 100;
                Line::from(vec![
                    Span::styled(format!("{:<18}", bucket.label), styles::text_secondary()),
                    Span::styled("█".repeat(filled), Style::default().fg(palette::BAR_FILL)),
                    Span::styled(format!(" {}%", bucket.percent), styles::text_primary()),
                ])
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_defects(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Top defects ");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .report
            .top_defects()
            .into_iter()
            .take(TOP_DEFECTS)
            .enumerate()
            .map(|(i, defect)| {
                Line::from(vec![
                    Span::styled(format!("{}. ", i + 1), styles::accent()),
                    Span::styled(format!("{:<24}", defect.label), styles::text_primary()),
                    Span::styled(defect.count.to_string(), styles::text_bright_bold()),
                ])
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_trend(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Score trend ");
        let inner = block.inner(area);
        block.render(area, buf);

        let peak = self.report.trend.iter().map(|p| p.score).max().unwrap_or(0);
        let lines: Vec<Line> = self
            .report
            .trend
            .iter()
            .map(|point| {
                // Scores cluster high, so bars start from 80
                let filled = usize::from(point.score.saturating_sub(80));
                let color = if point.score == peak {
                    palette::BAR_PEAK
                } else {
                    palette::BAR_FILL
                };
                Line::from(vec![
                    Span::styled(format!("{:<5}", point.day), styles::text_muted()),
                    Span::styled("▇".repeat(filled), Style::default().fg(color)),
                    Span::styled(
                        format!(" {} ({} calls)", point.score, point.calls),
                        styles::text_secondary(),
                    ),
                ])
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_ranking(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Agent ranking ");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .report
            .ranking
            .iter()
            .enumerate()
            .map(|(i, agent)| {
                let (arrow, arrow_style) = match agent.trend {
                    RankTrend::Up => ("▲", Style::default().fg(palette::STATUS_GREEN)),
                    RankTrend::Down => ("▼", Style::default().fg(palette::STATUS_RED)),
                };
                Line::from(vec![
                    Span::styled(format!("{:>2} ", i + 1), styles::accent()),
                    Span::styled(format!("{:<12}", agent.name), styles::text_primary()),
                    Span::styled(format!("{:>4} calls ", agent.calls), styles::text_muted()),
                    Span::styled(format!("{:>5.1} ", agent.score), styles::text_bright_bold()),
                    Span::styled(arrow, arrow_style),
                ])
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for QualityReportView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [periods, kpis, middle, bottom] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Min(5),
        ])
        .areas(area);

        self.render_periods(periods, buf);
        self.render_kpis(kpis, buf);

        let [distribution, defects] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(middle);
        self.render_distribution(distribution, buf);
        self.render_defects(defects, buf);

        let [trend, ranking] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(bottom);
        self.render_trend(trend, buf);
        self.render_ranking(ranking, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use agentdesk_core::FixtureSet;

    fn render(state: &ReportState) -> TestTerminal {
        let fixtures = FixtureSet::builtin().expect("builtin fixtures");
        let mut term = TestTerminal::with_size(120, 36);
        term.render_widget(QualityReportView::new(&fixtures.report, state), term.area());
        term
    }

    #[test]
    fn test_report_shows_kpis_and_cards() {
        let term = render(&ReportState::default());
        assert!(term.buffer_contains("Calls reviewed"));
        assert!(term.buffer_contains("Score distribution"));
        assert!(term.buffer_contains("Agent ranking"));
    }

    #[test]
    fn test_top_defects_are_sorted_by_count() {
        let term = render(&ReportState::default());
        assert!(term.buffer_contains("1. Interrupting customer"));
        assert!(term.buffer_contains("2. Missing opening"));
    }

    #[test]
    fn test_all_periods_listed() {
        let state = ReportState {
            period: ReportPeriod::Month,
        };
        let term = render(&state);
        for period in ReportPeriod::ALL {
            assert!(term.buffer_contains(period.label()));
        }
    }
}
