//! Dashboard header bar and its popovers

use agentdesk_app::agent::AgentState;
use agentdesk_app::config::AgentSettings;
use agentdesk_core::{ActivePopover, TimelineEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

/// Header with the agent status pill and the popover/logout shortcuts
pub struct MainHeader<'a> {
    agent: &'a AgentState,
    alert_count: usize,
    popover: ActivePopover,
}

impl<'a> MainHeader<'a> {
    pub fn new(agent: &'a AgentState, alert_count: usize, popover: ActivePopover) -> Self {
        Self {
            agent,
            alert_count,
            popover,
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.popover.is_open())
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (icon, status_style) =
            styles::agent_status_indicator(self.agent.status(), self.agent.is_signing_in());
        let status_label = if self.agent.is_signing_in() {
            "Signing in"
        } else {
            self.agent.status().label()
        };

        let left = Line::from(vec![
            Span::styled(" Agent Workbench ", styles::text_bright_bold()),
            Span::styled(format!("{} ", icon), status_style),
            Span::styled(status_label, status_style),
        ]);
        Paragraph::new(left).render(inner, buf);

        let shortcut = |key: &'static str, label: String, open: bool| {
            let style = if open {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            };
            [
                Span::styled(key, styles::keybinding()),
                Span::styled(format!(" {}  ", label), style),
            ]
        };
        let alerts = if self.alert_count > 0 {
            format!("Alerts ({})", self.alert_count)
        } else {
            "Alerts".to_string()
        };
        let mut spans = Vec::new();
        spans.extend(shortcut(
            "a",
            alerts,
            self.popover == ActivePopover::Alerts,
        ));
        spans.extend(shortcut(
            "s",
            "Settings".to_string(),
            self.popover == ActivePopover::Settings,
        ));
        spans.extend(shortcut("L", "Logout".to_string(), false));
        let right = Line::from(spans);

        let width = right.width() as u16;
        if width < inner.width {
            let right_area = Rect::new(inner.right() - width, inner.y, width, 1);
            Paragraph::new(right).render(right_area, buf);
        }
    }
}

/// Warning events listed under the alerts shortcut
pub struct AlertsPopover<'a> {
    alerts: &'a [&'a TimelineEvent],
}

impl<'a> AlertsPopover<'a> {
    pub fn new(alerts: &'a [&'a TimelineEvent]) -> Self {
        Self { alerts }
    }

    pub fn height(&self) -> u16 {
        (self.alerts.len() as u16 * 3).max(1) + 2
    }
}

impl Widget for AlertsPopover<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = styles::modal_block(" Alerts ");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.alerts.is_empty() {
            Paragraph::new(Span::styled("No alerts", styles::text_muted())).render(inner, buf);
            return;
        }

        let mut lines = Vec::new();
        for alert in self.alerts {
            lines.push(Line::from(vec![
                Span::styled("! ", styles::event_status_style(alert.status)),
                Span::styled(alert.title.as_str(), styles::text_bright_bold()),
                Span::styled(
                    format!("  {}", alert.time.format("%H:%M")),
                    styles::text_muted(),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                alert.description.as_str(),
                styles::text_secondary(),
            )));
            lines.push(Line::default());
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

/// Agent identity and status, with the logout hint
pub struct SettingsPopover<'a> {
    agent: &'a AgentSettings,
    state: &'a AgentState,
}

impl<'a> SettingsPopover<'a> {
    pub const HEIGHT: u16 = 7;

    pub fn new(agent: &'a AgentSettings, state: &'a AgentState) -> Self {
        Self { agent, state }
    }
}

impl Widget for SettingsPopover<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = styles::modal_block(" Settings ");
        let inner = block.inner(area);
        block.render(area, buf);

        let row = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{:<8}", label), styles::text_muted()),
                Span::styled(value, styles::text_primary()),
            ])
        };
        let lines = vec![
            row("Agent", self.agent.name.clone()),
            row("ID", self.agent.id.clone()),
            row("Role", self.agent.title.clone()),
            row("Status", self.state.status().label().to_string()),
            Line::from(vec![
                Span::styled("L", styles::keybinding()),
                Span::styled(" sign out of the workstation", styles::text_secondary()),
            ]),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
