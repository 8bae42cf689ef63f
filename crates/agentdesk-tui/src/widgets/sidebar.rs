//! Left navigation rail

use agentdesk_app::config::AgentSettings;
use agentdesk_core::ViewState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Views reachable from the sidebar, with their shortcut keys
pub const NAV_ITEMS: [(char, ViewState); 3] = [
    ('1', ViewState::Dashboard),
    ('2', ViewState::History),
    ('3', ViewState::Report),
];

pub struct Sidebar<'a> {
    active: ViewState,
    agent: &'a AgentSettings,
}

impl<'a> Sidebar<'a> {
    pub fn new(active: ViewState, agent: &'a AgentSettings) -> Self {
        Self { active, agent }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 4 || inner.width == 0 {
            return;
        }

        let [brand, nav, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .areas(inner);

        Paragraph::new(vec![
            Line::from(Span::styled(" agentdesk", styles::accent_bold())),
            Line::from(Span::styled(" 5G Call Center", styles::text_muted())),
        ])
        .render(brand, buf);

        let width = nav.width as usize;
        let lines: Vec<Line> = NAV_ITEMS
            .iter()
            .map(|(key, view)| {
                let text = format!(" {} {}", key, view.label());
                if *view == self.active {
                    Line::from(Span::styled(
                        format!("{:<width$}", text, width = width),
                        styles::focused_selected(),
                    ))
                } else {
                    Line::from(vec![
                        Span::styled(format!(" {}", key), styles::keybinding()),
                        Span::styled(format!(" {}", view.label()), styles::text_secondary()),
                    ])
                }
            })
            .collect();
        Paragraph::new(lines).render(nav, buf);

        Paragraph::new(vec![
            Line::from(Span::styled(
                format!(" {}", self.agent.name),
                styles::text_primary(),
            )),
            Line::from(Span::styled(
                format!(" #{} {}", self.agent.id, self.agent.title),
                styles::text_muted(),
            )),
        ])
        .render(footer, buf);
    }
}
