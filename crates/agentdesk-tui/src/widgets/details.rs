//! Call details: recording player and the review tabs

use agentdesk_app::views::{DetailTab, DetailsState};
use agentdesk_core::{format_duration_short, CallRef, CallReview, Speaker};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget, Wrap},
};

use crate::theme::{palette, styles};

pub struct CallDetails<'a> {
    call: CallRef<'a>,
    review: &'a CallReview,
    state: &'a DetailsState,
}

impl<'a> CallDetails<'a> {
    pub fn new(call: CallRef<'a>, review: &'a CallReview, state: &'a DetailsState) -> Self {
        Self {
            call,
            review,
            state,
        }
    }

    /// `(id, phone, kind label, duration)` for either source of the call.
    fn summary(&self) -> (&'a str, &'a str, &'static str, String) {
        match self.call {
            CallRef::Recent(log) => (
                log.id.as_str(),
                log.phone.as_str(),
                log.kind.label(),
                format_duration_short(log.duration_secs),
            ),
            CallRef::History(record) => (
                record.id.as_str(),
                record.phone.as_str(),
                record.kind.label(),
                record
                    .talk_secs()
                    .map(format_duration_short)
                    .unwrap_or_else(|| "-".to_string()),
            ),
        }
    }

    fn render_player(&self, area: Rect, buf: &mut Buffer) {
        let (id, phone, kind, duration) = self.summary();
        let (icon, label) = if self.state.playing {
            ("⏸", "Playing")
        } else {
            ("▶", "Paused")
        };
        let lines = vec![
            Line::from(vec![
                Span::styled(format!(" {} ", id), styles::text_bright_bold()),
                Span::styled(format!("{}  {}  {}", phone, kind, duration), styles::text_secondary()),
            ]),
            Line::from(vec![
                Span::styled(format!(" {} ", icon), styles::accent_bold()),
                Span::styled(label, styles::text_primary()),
                Span::styled("   space play/pause", styles::keybinding()),
            ]),
        ];
        Paragraph::new(lines).render(area, buf);
    }

    fn render_tabs(&self, area: Rect, buf: &mut Buffer) {
        let selected = DetailTab::ALL
            .iter()
            .position(|t| *t == self.state.tab)
            .unwrap_or(0);
        Tabs::new(DetailTab::ALL.iter().map(|t| t.label()))
            .select(selected)
            .style(styles::text_muted())
            .highlight_style(styles::accent_bold().add_modifier(Modifier::UNDERLINED))
            .divider(Span::styled("│", styles::border_inactive()))
            .render(area, buf);
    }

    fn basic_lines(&self) -> Vec<Line<'a>> {
        match self.call {
            CallRef::Recent(log) => vec![
                row("Customer", log.customer_name.clone()),
                row("Phone", log.phone.clone()),
                row("Type", log.kind.label().to_string()),
                row("Started", log.start_time.format("%H:%M:%S").to_string()),
                row("Duration", format_duration_short(log.duration_secs)),
                row("Outcome", log.outcome.label().to_string()),
            ],
            CallRef::History(r) => vec![
                row("Agent", format!("{} ({})", r.agent_name, r.agent_account)),
                row("Customer", r.phone.clone()),
                row("Direction", r.direction.label().to_string()),
                row("Line", r.outbound_number.clone()),
                row("Type", r.kind.label().to_string()),
                row("Started", r.start_time.format("%Y-%m-%d %H:%M:%S").to_string()),
                row(
                    "Answered",
                    r.answer_time
                        .map(|t| t.format("%H:%M:%S").to_string())
                        .unwrap_or_else(|| "No".to_string()),
                ),
                row("Ended", r.end_time.format("%H:%M:%S").to_string()),
                row("Score", r.score.to_string()),
            ],
        }
    }

    fn transcript_lines(&self) -> Vec<Line<'a>> {
        let review = self.review;
        review
            .transcript
            .iter()
            .map(|line| {
                let (who, style) = match line.speaker {
                    Speaker::Agent => ("Agent", styles::accent()),
                    Speaker::Customer => ("Customer", Style::default().fg(palette::STATUS_GREEN)),
                    Speaker::System => ("System", styles::text_muted()),
                };
                Line::from(vec![
                    Span::styled(format!("{} ", line.at), styles::text_muted()),
                    Span::styled(format!("{:<9}", who), style),
                    Span::styled(line.text.as_str(), styles::text_primary()),
                ])
            })
            .collect()
    }

    fn quality_lines(&self) -> Vec<Line<'a>> {
        let review = self.review;
        let q = &review.quality;
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Score ", styles::text_muted()),
                Span::styled(q.score.to_string(), styles::text_bright_bold()),
                Span::styled(format!("  grade {}", q.grade), styles::text_secondary()),
            ]),
            Line::default(),
        ];
        for metric in &q.metrics {
            let filled = usize::from(metric.percent.min(100)) / 5;
            lines.push(Line::from(vec![
                Span::styled(format!("{:<14}", metric.label), styles::text_secondary()),
                Span::styled("█".repeat(filled), Style::default().fg(palette::BAR_FILL)),
                Span::styled("░".repeat(20 - filled), styles::text_muted()),
                Span::styled(format!(" {}%", metric.percent), styles::text_primary()),
            ]));
        }
        lines.push(Line::default());
        for item in &q.items {
            let (badge, badge_style) = styles::check_result_badge(item.result);
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", item.at), styles::text_muted()),
                Span::styled(format!("{:<5}", badge), badge_style),
                Span::styled(item.title.as_str(), styles::text_primary()),
                Span::styled(format!("  {}", item.emotion), styles::text_muted()),
            ]));
            if !item.note.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("      {}", item.note),
                    styles::text_secondary(),
                )));
            }
        }
        lines
    }

    fn summary_lines(&self) -> Vec<Line<'a>> {
        let review = self.review;
        let s = &review.summary;
        let mut lines = vec![
            Line::from(Span::styled(s.headline.as_str(), styles::text_bright_bold())),
            Line::default(),
        ];
        lines.extend(
            s.entities
                .iter()
                .map(|e| row_ref(e.label.as_str(), e.value.as_str())),
        );
        if !s.tags.is_empty() {
            lines.push(Line::default());
            let mut tags = vec![Span::styled("Tags  ", styles::text_muted())];
            for tag in &s.tags {
                tags.push(Span::styled(format!("[{}] ", tag), styles::accent()));
            }
            lines.push(Line::from(tags));
        }
        if !s.follow_ups.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Follow-ups", styles::text_muted())));
            lines.extend(s.follow_ups.iter().map(|f| {
                Line::from(Span::styled(format!("  • {}", f), styles::text_primary()))
            }));
        }
        lines
    }

    fn location_lines(&self) -> Vec<Line<'a>> {
        let review = self.review;
        let l = &review.location;
        vec![
            row_ref("Address", l.address.as_str()),
            row_ref("Network", l.network.as_str()),
            row_ref("IP", l.ip.as_str()),
            row_ref("Cell", l.cell_id.as_str()),
            row("Lng/Lat", format!("{:.4}, {:.4}", l.longitude, l.latitude)),
        ]
    }
}

fn row<'b>(label: &'static str, value: String) -> Line<'b> {
    Line::from(vec![
        Span::styled(format!("{:<11}", label), styles::text_muted()),
        Span::styled(value, styles::text_primary()),
    ])
}

fn row_ref<'b>(label: &'b str, value: &'b str) -> Line<'b> {
    Line::from(vec![
        Span::styled(format!("{:<11}", label), styles::text_muted()),
        Span::styled(value, styles::text_primary()),
    ])
}

impl Widget for CallDetails<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(" Call details ");
        let inner = block.inner(area);
        block.render(area, buf);

        let [player, tabs, _, body] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        self.render_player(player, buf);
        self.render_tabs(tabs, buf);

        let lines = match self.state.tab {
            DetailTab::Basic => self.basic_lines(),
            DetailTab::Transcript => self.transcript_lines(),
            DetailTab::Quality => self.quality_lines(),
            DetailTab::Summary => self.summary_lines(),
            DetailTab::Location => self.location_lines(),
        };
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(body, buf);
    }
}

/// Shown when the details view is reached without a resolvable call.
pub struct NoCallSelected;

impl Widget for NoCallSelected {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Call details ");
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(vec![
            Line::from(Span::styled("No call selected", styles::text_secondary())),
            Line::from(Span::styled(
                "Pick a call from the workbench or history",
                styles::text_muted(),
            )),
        ])
        .render(inner, buf);
    }
}
