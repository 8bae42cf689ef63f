//! Workbench: customer card, daily stats, recent calls and hourly volume

use agentdesk_app::agent::AgentState;
use agentdesk_core::{format_duration_short, CallOutcome, FixtureSet, HourlyVolume};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Width in cells of the longest volume bar
const MAX_BAR_WIDTH: u16 = 30;

pub struct Dashboard<'a> {
    fixtures: &'a FixtureSet,
    agent: &'a AgentState,
    selected: usize,
}

impl<'a> Dashboard<'a> {
    pub fn new(fixtures: &'a FixtureSet, agent: &'a AgentState, selected: usize) -> Self {
        Self {
            fixtures,
            agent,
            selected,
        }
    }

    fn render_customer(&self, area: Rect, buf: &mut Buffer) {
        let c = &self.fixtures.customer;
        let block = styles::glass_block(false).title(" Customer ");
        let inner = block.inner(area);
        block.render(area, buf);

        let credit = c.credit_score.to_string();
        let lines = vec![
            Line::from(vec![
                Span::styled(c.name.as_str(), styles::text_bright_bold()),
                Span::styled(format!("  {}", c.id), styles::text_muted()),
            ]),
            field("Phone", &c.phone),
            field("ID card", &c.id_number),
            field("Location", &c.location),
            Line::from(vec![
                Span::styled(format!("{:<10}", "Risk"), styles::text_muted()),
                Span::styled(c.risk_level.label(), styles::risk_style(c.risk_level)),
                Span::styled("  credit ", styles::text_muted()),
                Span::styled(credit, styles::accent()),
            ]),
        ];
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_actions(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Actions ");
        let inner = block.inner(area);
        block.render(area, buf);

        let hint = |key: &'static str, label: &'static str, enabled: bool| {
            let style = if enabled {
                styles::text_secondary()
            } else {
                styles::text_muted()
            };
            Line::from(vec![
                Span::styled(format!("{:>2} ", key), styles::keybinding()),
                Span::styled(label, style),
            ])
        };
        let status = self.agent.status();
        let lines = vec![
            hint("i", "Sign in", !status.is_signed_in()),
            hint("o", "Sign out", status.is_signed_in()),
            hint("v", "Set available", status.is_signed_in()),
            hint("b", "Set busy", status.is_signed_in()),
            hint("c", "Start call", self.agent.can_start_call()),
            hint("t", "Backtrace", true),
        ];
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_stats(&self, area: Rect, buf: &mut Buffer) {
        let stats = &self.fixtures.daily_stats;
        if stats.is_empty() {
            return;
        }
        let columns = Layout::horizontal(vec![Constraint::Fill(1); stats.len()]).split(area);
        for (stat, col) in stats.iter().zip(columns.iter()) {
            let block = styles::glass_block(false);
            let inner = block.inner(*col);
            block.render(*col, buf);
            Paragraph::new(vec![
                Line::from(Span::styled(stat.label.as_str(), styles::text_muted())),
                Line::from(Span::styled(stat.value.as_str(), styles::accent_bold())),
            ])
            .render(inner, buf);
        }
    }

    fn render_recent_calls(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(" Recent calls ");
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let lines: Vec<Line> = self
            .fixtures
            .recent_calls
            .iter()
            .enumerate()
            .map(|(i, call)| {
                let outcome_style = match call.outcome {
                    CallOutcome::Completed => Style::default().fg(palette::STATUS_GREEN),
                    CallOutcome::Missed => Style::default().fg(palette::STATUS_RED),
                    CallOutcome::Rejected => styles::text_muted(),
                };
                let text = format!(
                    "{:<12} {:<12} {:<6} {} {:>7}",
                    call.customer_name,
                    call.phone,
                    call.kind.label(),
                    call.start_time.format("%H:%M"),
                    format_duration_short(call.duration_secs),
                );
                if i == self.selected {
                    Line::from(Span::styled(
                        format!("{:<width$}", format!("{} {}", text, call.outcome.label())),
                        styles::focused_selected(),
                    ))
                } else {
                    Line::from(vec![
                        Span::styled(text, styles::text_primary()),
                        Span::styled(format!(" {}", call.outcome.label()), outcome_style),
                    ])
                }
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_volume(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Calls by hour ");
        let inner = block.inner(area);
        block.render(area, buf);

        let bar_room = inner.width.saturating_sub(12).min(MAX_BAR_WIDTH);
        let lines = volume_lines(&self.fixtures.hourly_volume, bar_room);
        Paragraph::new(lines).render(inner, buf);
    }
}

fn field<'b>(label: &'static str, value: &'b str) -> Line<'b> {
    Line::from(vec![
        Span::styled(format!("{:<10}", label), styles::text_muted()),
        Span::styled(value, styles::text_primary()),
    ])
}

/// One text bar per hour, scaled so the busiest hour fills `max_width`.
fn volume_lines(volume: &[HourlyVolume], max_width: u16) -> Vec<Line<'_>> {
    let peak = volume.iter().map(|v| v.calls).max().unwrap_or(0);
    volume
        .iter()
        .map(|v| {
            let len = if peak == 0 {
                0
            } else {
                (v.calls as u64 * max_width as u64 / peak as u64) as usize
            };
            let color = if v.calls == peak {
                palette::BAR_PEAK
            } else {
                palette::BAR_FILL
            };
            Line::from(vec![
                Span::styled(format!("{:>5} ", v.hour), styles::text_muted()),
                Span::styled("█".repeat(len), Style::default().fg(color)),
                Span::styled(format!(" {}", v.calls), styles::text_secondary()),
            ])
        })
        .collect()
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [top, stats, bottom] = Layout::vertical([
            Constraint::Length(8),
            Constraint::Length(4),
            Constraint::Min(3),
        ])
        .areas(area);

        let [customer, actions] =
            Layout::horizontal([Constraint::Fill(2), Constraint::Fill(1)]).areas(top);
        self.render_customer(customer, buf);
        self.render_actions(actions, buf);
        self.render_stats(stats, buf);

        let [recent, volume] =
            Layout::horizontal([Constraint::Fill(3), Constraint::Fill(2)]).areas(bottom);
        self.render_recent_calls(recent, buf);
        self.render_volume(volume, buf);
    }
}
