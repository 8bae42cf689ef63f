//! Customer backtrace: profile summary and the searchable event timeline

use agentdesk_app::views::BacktraceState;
use agentdesk_core::{format_duration_short, Customer, TimelineEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct Backtrace<'a> {
    customer: &'a Customer,
    events: &'a [&'a TimelineEvent],
    state: &'a BacktraceState,
}

impl<'a> Backtrace<'a> {
    pub fn new(
        customer: &'a Customer,
        events: &'a [&'a TimelineEvent],
        state: &'a BacktraceState,
    ) -> Self {
        Self {
            customer,
            events,
            state,
        }
    }

    fn render_profile(&self, area: Rect, buf: &mut Buffer) {
        let c = self.customer;
        let block = styles::glass_block(false).title(" Customer ");
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(vec![
            Line::from(Span::styled(c.name.as_str(), styles::text_bright_bold())),
            Line::from(Span::styled(c.id.as_str(), styles::text_muted())),
            Line::default(),
            Line::from(Span::styled(c.phone.as_str(), styles::text_primary())),
            Line::from(Span::styled(c.location.as_str(), styles::text_secondary())),
            Line::from(vec![
                Span::styled("Risk ", styles::text_muted()),
                Span::styled(c.risk_level.label(), styles::risk_style(c.risk_level)),
            ]),
        ])
        .render(inner, buf);
    }

    fn render_search(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(" Search: ", styles::text_muted())];
        if self.state.query.is_empty() && !self.state.searching {
            spans.push(Span::styled("/ to search events", styles::keybinding()));
        } else {
            spans.push(Span::styled(
                self.state.query.as_str(),
                styles::text_bright_bold(),
            ));
            if self.state.searching {
                spans.push(Span::styled("▏", styles::accent()));
            }
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn event_lines(event: &TimelineEvent, selected: bool) -> Vec<Line<'_>> {
        let marker = if selected { "▶" } else { "●" };
        let title_style = if selected {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };
        let mut head = vec![
            Span::styled(format!("{} ", marker), styles::event_status_style(event.status)),
            Span::styled(
                event.time.format("%Y-%m-%d %H:%M ").to_string(),
                styles::text_muted(),
            ),
            Span::styled(event.title.as_str(), title_style),
            Span::styled(format!("  {}", event.kind.label()), styles::text_muted()),
        ];
        if let Some(secs) = event.duration_secs {
            head.push(Span::styled(
                format!("  {}", format_duration_short(secs)),
                styles::text_secondary(),
            ));
        }
        vec![
            Line::from(head),
            Line::from(vec![
                Span::styled("│ ", styles::border_inactive()),
                Span::styled(format!("{}: ", event.user), styles::accent()),
                Span::styled(event.description.as_str(), styles::text_secondary()),
            ]),
        ]
    }
}

impl Widget for Backtrace<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [profile, timeline] =
            Layout::horizontal([Constraint::Length(26), Constraint::Min(20)]).areas(area);
        self.render_profile(profile, buf);

        let title = format!(" Timeline ({}) ", self.events.len());
        let block = styles::glass_block(true).title(title);
        let inner = block.inner(timeline);
        block.render(timeline, buf);

        let [search, _, list] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);
        self.render_search(search, buf);

        if self.events.is_empty() {
            Paragraph::new(Span::styled("No events match", styles::text_muted()))
                .render(list, buf);
            return;
        }

        // Keep the selected event on screen; each event takes two rows.
        let per_page = usize::from((list.height / 2).max(1));
        let skip = self.state.selected.saturating_sub(per_page - 1);
        let lines: Vec<Line> = self
            .events
            .iter()
            .enumerate()
            .skip(skip)
            .flat_map(|(i, event)| Self::event_lines(event, i == self.state.selected))
            .collect();
        Paragraph::new(lines).render(list, buf);
    }
}
