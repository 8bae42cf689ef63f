//! Call history table with the agent filter

use agentdesk_app::views::HistoryState;
use agentdesk_core::{format_duration_short, CallRecord};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::theme::{palette, styles};

pub struct HistoryTable<'a> {
    records: &'a [&'a CallRecord],
    state: &'a HistoryState,
    total: u32,
}

impl<'a> HistoryTable<'a> {
    pub fn new(records: &'a [&'a CallRecord], state: &'a HistoryState, total: u32) -> Self {
        Self {
            records,
            state,
            total,
        }
    }

    fn render_filter(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(" Agent: ", styles::text_muted())];
        if self.state.filter.is_empty() && !self.state.filtering {
            spans.push(Span::styled("all", styles::text_secondary()));
            spans.push(Span::styled("   / filter", styles::keybinding()));
        } else {
            spans.push(Span::styled(
                self.state.filter.as_str(),
                styles::text_bright_bold(),
            ));
            if self.state.filtering {
                spans.push(Span::styled("▏", styles::accent()));
            } else {
                spans.push(Span::styled("   Esc clear", styles::keybinding()));
            }
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn row(record: &CallRecord) -> Row<'_> {
        let (badge, badge_style) = styles::score_band_badge(record.score_band());
        let score = if record.score == 0 {
            "-".to_string()
        } else {
            record.score.to_string()
        };
        let answered = if record.answered {
            Span::styled("Yes", Style::default().fg(palette::STATUS_GREEN))
        } else {
            Span::styled("No", Style::default().fg(palette::STATUS_RED))
        };
        let talk = record
            .talk_secs()
            .map(format_duration_short)
            .unwrap_or_else(|| "-".to_string());

        Row::new(vec![
            Cell::from(record.id.as_str()),
            Cell::from(record.agent_name.as_str()),
            Cell::from(record.phone.as_str()),
            Cell::from(answered),
            Cell::from(record.direction.label()),
            Cell::from(record.kind.label()),
            Cell::from(record.start_time.format("%m-%d %H:%M").to_string()),
            Cell::from(talk),
            Cell::from(Line::from(vec![
                Span::styled(format!("{:>3} ", score), styles::text_primary()),
                Span::styled(badge, badge_style),
            ])),
        ])
    }
}

impl Widget for HistoryTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Call history ({} of {}) ", self.records.len(), self.total);
        let block = styles::glass_block(true).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 {
            return;
        }

        let [filter, table_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(inner);
        self.render_filter(filter, buf);

        if self.records.is_empty() {
            Paragraph::new(Span::styled(
                "No calls match this filter",
                styles::text_muted(),
            ))
            .render(table_area, buf);
            return;
        }

        let header = Row::new(vec![
            "Call ID", "Agent", "Customer", "Answered", "Direction", "Type", "Started", "Talk",
            "Score",
        ])
        .style(styles::text_muted());
        let rows: Vec<Row> = self.records.iter().map(|r| Self::row(r)).collect();
        let widths = [
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Length(5),
            Constraint::Length(11),
            Constraint::Length(7),
            Constraint::Min(8),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(styles::focused_selected());

        let mut table_state = TableState::default().with_selected(Some(self.state.selected));
        StatefulWidget::render(table, table_area, buf, &mut table_state);
    }
}
