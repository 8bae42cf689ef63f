//! Full-screen in-call workstation
//!
//! Left: the call feed with mute/camera state. Right: the tool tabs
//! (verification, live transcript, notes, location). The bottom row lists
//! the keys valid for the current call state.

use agentdesk_app::workstation::{
    FraudQuestion, StepState, WorkstationState, WorkstationTab, FACE_MATCH_SIMILARITY,
    FRAUD_QUESTIONS, QUICK_TAGS,
};
use agentdesk_app::CallSetup;
use agentdesk_core::{format_clock, CallStatus, FixtureSet, Speaker};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Tabs, Widget, Wrap},
};

use crate::theme::{palette, styles};

/// Spinner for running verification steps
const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct Workstation<'a> {
    ws: &'a WorkstationState,
    status: CallStatus,
    call: Option<&'a CallSetup>,
    fixtures: &'a FixtureSet,
    tick: u64,
}

impl<'a> Workstation<'a> {
    pub fn new(
        ws: &'a WorkstationState,
        status: CallStatus,
        call: Option<&'a CallSetup>,
        fixtures: &'a FixtureSet,
        tick: u64,
    ) -> Self {
        Self {
            ws,
            status,
            call,
            fixtures,
            tick,
        }
    }

    fn video(&self) -> bool {
        self.status == CallStatus::VideoConnected
    }

    fn phone(&self) -> &'a str {
        let fixtures = self.fixtures;
        self.call
            .map(|c| c.phone())
            .unwrap_or(fixtures.customer.phone.as_str())
    }

    fn render_top_bar(&self, area: Rect, buf: &mut Buffer) {
        let (icon, label, status_style) = styles::call_status_indicator(self.status);
        let mut spans = vec![
            Span::styled(format!(" {} {} ", icon, label), status_style),
            Span::styled("│ ", styles::border_inactive()),
            Span::styled(
                self.fixtures.customer.name.as_str(),
                styles::text_bright_bold(),
            ),
            Span::styled(format!("  {}", self.phone()), styles::text_secondary()),
            Span::styled("  ", styles::text_muted()),
            Span::styled(format_clock(self.ws.elapsed_secs()), styles::accent_bold()),
        ];
        if self.ws.muted {
            spans.push(Span::styled(
                "  MUTED",
                Style::default()
                    .fg(palette::STATUS_RED)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        if self.ws.is_verified() {
            spans.push(Span::styled(
                "  ✓ Verified",
                Style::default().fg(palette::STATUS_GREEN),
            ));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_feed(&self, area: Rect, buf: &mut Buffer) {
        let title = if self.video() {
            " Video "
        } else {
            " Voice "
        };
        let block = styles::glass_block(false).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        let centre = if self.video() && self.ws.camera_off {
            vec![Line::from(Span::styled("Camera off", styles::text_muted()))]
        } else if self.video() {
            vec![
                Line::from(Span::styled("◉ LIVE", Style::default().fg(palette::STATUS_RED))),
                Line::default(),
                Line::from(Span::styled(
                    self.fixtures.customer.name.as_str(),
                    styles::text_bright_bold(),
                )),
            ]
        } else {
            // Simple level meter so an audio call reads as live
            let bars = ["▂▄▆█▆▄▂", "▄▆█▆▄▂▂", "▆█▆▄▂▂▄", "█▆▄▂▂▄▆"];
            let meter = bars[(self.tick % bars.len() as u64) as usize];
            vec![
                Line::from(Span::styled(
                    self.fixtures.customer.name.as_str(),
                    styles::text_bright_bold(),
                )),
                Line::default(),
                Line::from(Span::styled(
                    if self.ws.muted { "▁▁▁▁▁▁▁" } else { meter },
                    styles::accent(),
                )),
            ]
        };
        let pad = inner.height.saturating_sub(centre.len() as u16) / 2;
        let [_, body] =
            Layout::vertical([Constraint::Length(pad), Constraint::Min(0)]).areas(inner);
        Paragraph::new(centre)
            .alignment(Alignment::Center)
            .render(body, buf);
    }

    fn render_tabs(&self, area: Rect, buf: &mut Buffer) {
        let selected = WorkstationTab::ALL
            .iter()
            .position(|t| *t == self.ws.tab)
            .unwrap_or(0);
        Tabs::new(WorkstationTab::ALL.iter().map(|t| t.label()))
            .select(selected)
            .style(styles::text_muted())
            .highlight_style(styles::accent_bold().add_modifier(Modifier::UNDERLINED))
            .divider(Span::styled("│", styles::border_inactive()))
            .render(area, buf);
    }

    fn step_line(&self, key: &'static str, label: &'static str, step: StepState) -> Line<'a> {
        let (icon, detail, style) = match step {
            StepState::Pending => ("○", "pending".to_string(), styles::text_muted()),
            StepState::Running => (
                SPINNER[(self.tick % SPINNER.len() as u64) as usize],
                "running".to_string(),
                styles::accent(),
            ),
            StepState::Done => (
                "●",
                "done".to_string(),
                Style::default().fg(palette::STATUS_GREEN),
            ),
        };
        Line::from(vec![
            Span::styled(format!("{} ", icon), style),
            Span::styled(format!("{:<22}", label), styles::text_primary()),
            Span::styled(detail, style),
            Span::styled(format!("   {}", key), styles::keybinding()),
        ])
    }

    fn ai_tools_lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::from(Span::styled("Identity verification", styles::text_secondary())),
            self.step_line("i", "ID card recognition", self.ws.id_scan()),
            self.step_line("f", "Face match", self.ws.face_match()),
        ];
        if self.ws.face_matched() {
            lines.push(Line::from(Span::styled(
                format!("  similarity {:.1}%", FACE_MATCH_SIMILARITY),
                Style::default().fg(palette::STATUS_GREEN),
            )));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Fraud questions",
            styles::text_secondary(),
        )));
        for (i, (question, text)) in [FraudQuestion::First, FraudQuestion::Second]
            .into_iter()
            .zip(FRAUD_QUESTIONS)
            .enumerate()
        {
            let checked = self.ws.fraud_answer(question);
            let (mark, style) = if checked {
                ("[x]", Style::default().fg(palette::STATUS_GREEN))
            } else {
                ("[ ]", styles::text_muted())
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", i + 1), styles::keybinding()),
                Span::styled(format!("{} ", mark), style),
                Span::styled(text, styles::text_primary()),
            ]));
        }
        lines
    }

    fn transcript_lines(&self) -> Vec<Line<'a>> {
        let fixtures = self.fixtures;
        fixtures
            .review
            .transcript
            .iter()
            .map(|line| {
                let (who, style) = match line.speaker {
                    Speaker::Agent => ("You", styles::accent()),
                    Speaker::Customer => (
                        "Customer",
                        Style::default().fg(palette::STATUS_GREEN),
                    ),
                    Speaker::System => ("System", styles::text_muted()),
                };
                Line::from(vec![
                    Span::styled(format!("{:<9}", who), style),
                    Span::styled(line.text.as_str(), styles::text_primary()),
                ])
            })
            .collect()
    }

    fn notes_lines(&self) -> Vec<Line<'a>> {
        let mut note = vec![Span::styled(
            if self.ws.notes.is_empty() && !self.ws.editing_notes {
                "No notes yet".to_string()
            } else {
                self.ws.notes.clone()
            },
            if self.ws.notes.is_empty() {
                styles::text_muted()
            } else {
                styles::text_primary()
            },
        )];
        if self.ws.editing_notes {
            note.push(Span::styled("▏", styles::accent()));
        }

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Notes ", styles::text_secondary()),
                Span::styled(
                    if self.ws.editing_notes {
                        "(Esc to finish)"
                    } else {
                        "(Enter to edit)"
                    },
                    styles::keybinding(),
                ),
            ]),
            Line::from(note),
            Line::default(),
            Line::from(Span::styled("Quick tags", styles::text_secondary())),
        ];
        lines.extend(QUICK_TAGS.iter().enumerate().map(|(i, tag)| {
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), styles::keybinding()),
                Span::styled(*tag, styles::text_primary()),
            ])
        }));
        lines
    }

    fn location_lines(&self) -> Vec<Line<'a>> {
        let fixtures = self.fixtures;
        let l = &fixtures.review.location;
        let row = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{:<9}", label), styles::text_muted()),
                Span::styled(value, styles::text_primary()),
            ])
        };
        vec![
            row("Address", l.address.clone()),
            row("Network", l.network.clone()),
            row("IP", l.ip.clone()),
            row("Cell", l.cell_id.clone()),
            row("Lng/Lat", format!("{:.4}, {:.4}", l.longitude, l.latitude)),
        ]
    }

    fn render_tools(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(" Tools ");
        let inner = block.inner(area);
        block.render(area, buf);

        let [tabs, _, body] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);
        self.render_tabs(tabs, buf);

        let lines = match self.ws.tab {
            WorkstationTab::AiTools => self.ai_tools_lines(),
            WorkstationTab::Transcript => self.transcript_lines(),
            WorkstationTab::Notes => self.notes_lines(),
            WorkstationTab::Location => self.location_lines(),
        };
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(body, buf);
    }

    fn render_hints(&self, area: Rect, buf: &mut Buffer) {
        let mut hints: Vec<(&str, &str)> = vec![("e", "end"), ("m", "mute")];
        if self.video() {
            hints.push(("k", "camera"));
        } else {
            hints.push(("u", "upgrade to video"));
            hints.push(("l", "send video link"));
        }
        hints.push(("Tab", "next tab"));

        let spans: Vec<Span> = hints
            .into_iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(format!(" {}", key), styles::keybinding()),
                    Span::styled(format!(" {} ", label), styles::text_muted()),
                ]
            })
            .collect();
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

impl Widget for Workstation<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .style(Style::default().bg(palette::CALL_BG))
            .render(area, buf);

        let [top, main, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_top_bar(top, buf);
        let [feed, tools] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(main);
        self.render_feed(feed, buf);
        self.render_tools(tools, buf);
        self.render_hints(hints, buf);
    }
}
