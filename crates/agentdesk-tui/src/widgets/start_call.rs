//! Start-call dialog over the workbench

use agentdesk_app::call_setup::{FormField, StartCallForm};
use agentdesk_core::CallKind;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::modal_overlay;
use crate::theme::styles;

const DIALOG_WIDTH: u16 = 52;
const DIALOG_HEIGHT: u16 = 11;

pub struct StartCallDialog<'a> {
    form: &'a StartCallForm,
    lines: &'a [String],
}

impl<'a> StartCallDialog<'a> {
    pub fn new(form: &'a StartCallForm, lines: &'a [String]) -> Self {
        Self { form, lines }
    }

    fn label_style(&self, field: FormField) -> Style {
        if self.form.focus == field {
            styles::accent_bold()
        } else {
            styles::text_muted()
        }
    }

    fn marker(&self, field: FormField) -> Span<'static> {
        if self.form.focus == field {
            Span::styled("› ", styles::accent_bold())
        } else {
            Span::raw("  ")
        }
    }

    fn phone_line(&self) -> Line<'a> {
        let mut spans = vec![
            self.marker(FormField::Phone),
            Span::styled("Phone     ", self.label_style(FormField::Phone)),
        ];
        if self.form.phone.is_empty() {
            spans.push(Span::styled("enter 11 digits", styles::text_muted()));
        } else {
            spans.push(Span::styled(
                self.form.phone.as_str(),
                styles::text_bright_bold(),
            ));
        }
        if self.form.focus == FormField::Phone {
            spans.push(Span::styled("▏", styles::accent()));
        }
        Line::from(spans)
    }

    fn outbound_line(&self) -> Line<'a> {
        let value = self.form.outbound(self.lines).unwrap_or("no lines configured");
        Line::from(vec![
            self.marker(FormField::Outbound),
            Span::styled("Line      ", self.label_style(FormField::Outbound)),
            Span::styled("‹ ", styles::text_muted()),
            Span::styled(value, styles::text_primary()),
            Span::styled(
                format!(" ›  ({}/{})", self.form.outbound_index + 1, self.lines.len()),
                styles::text_muted(),
            ),
        ])
    }

    fn kind_line(&self) -> Line<'a> {
        let option = |kind: CallKind| {
            let style = if self.form.kind == kind {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            Span::styled(format!(" {} ", kind.label()), style)
        };
        Line::from(vec![
            self.marker(FormField::Kind),
            Span::styled("Type      ", self.label_style(FormField::Kind)),
            option(CallKind::Video),
            Span::raw(" "),
            option(CallKind::Audio),
        ])
    }
}

impl Widget for StartCallDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = modal_overlay::open_dialog(buf, area, DIALOG_WIDTH, DIALOG_HEIGHT);
        let block = styles::modal_block(" Start call ");
        let inner = block.inner(rect);
        block.render(rect, buf);

        let lines = vec![
            Line::default(),
            self.phone_line(),
            Line::default(),
            self.outbound_line(),
            Line::default(),
            self.kind_line(),
            Line::default(),
            Line::from(vec![
                Span::styled(" Enter", styles::keybinding()),
                Span::styled(" dial  ", styles::text_muted()),
                Span::styled("Tab", styles::keybinding()),
                Span::styled(" next  ", styles::text_muted()),
                Span::styled("←/→", styles::keybinding()),
                Span::styled(" change  ", styles::text_muted()),
                Span::styled("Esc", styles::keybinding()),
                Span::styled(" cancel", styles::text_muted()),
            ]),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
