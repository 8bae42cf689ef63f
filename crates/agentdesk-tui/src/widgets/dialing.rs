//! Dialing overlay shown while the outbound call rings

use agentdesk_app::CallSetup;
use agentdesk_core::Customer;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::modal_overlay;
use crate::theme::styles;

const DIALOG_WIDTH: u16 = 44;
const DIALOG_HEIGHT: u16 = 10;

/// Ring animation frames, advanced by the UI tick
const FRAMES: [&str; 4] = ["·    ", "··   ", "···  ", "···· "];

pub struct DialingOverlay<'a> {
    customer: &'a Customer,
    call: Option<&'a CallSetup>,
    tick: u64,
}

impl<'a> DialingOverlay<'a> {
    pub fn new(customer: &'a Customer, call: Option<&'a CallSetup>, tick: u64) -> Self {
        Self {
            customer,
            call,
            tick,
        }
    }
}

impl Widget for DialingOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = modal_overlay::open_dialog(buf, area, DIALOG_WIDTH, DIALOG_HEIGHT);
        let block = styles::modal_block(" Calling ");
        let inner = block.inner(rect);
        block.render(rect, buf);

        let frame = FRAMES[(self.tick % FRAMES.len() as u64) as usize];
        let (phone, kind, line) = match self.call {
            Some(call) => (call.phone(), call.call_kind().label(), call.outbound_number()),
            None => (self.customer.phone.as_str(), "Audio", ""),
        };

        let mut lines = vec![
            Line::default(),
            Line::from(Span::styled(
                self.customer.name.as_str(),
                styles::text_bright_bold(),
            )),
            Line::from(Span::styled(phone, styles::text_primary())),
            Line::from(vec![
                Span::styled(format!("{} call ", kind), styles::text_secondary()),
                Span::styled(frame, styles::accent_bold()),
            ]),
        ];
        if !line.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("via {}", line),
                styles::text_muted(),
            )));
        } else {
            lines.push(Line::default());
        }
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("a", styles::keybinding()),
            Span::styled(" answered   ", styles::text_muted()),
            Span::styled("e", styles::keybinding()),
            Span::styled(" hang up", styles::text_muted()),
        ]));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
