//! Logout confirmation dialog

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::modal_overlay;
use crate::theme::styles;

const DIALOG_WIDTH: u16 = 44;
const DIALOG_HEIGHT: u16 = 7;

pub struct LogoutConfirm;

impl Widget for LogoutConfirm {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = modal_overlay::open_dialog(buf, area, DIALOG_WIDTH, DIALOG_HEIGHT);
        let block = styles::modal_block(" Log out ");
        let inner = block.inner(rect);
        block.render(rect, buf);

        Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(
                "Log out of the agent workstation?",
                styles::text_primary(),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("y", styles::keybinding()),
                Span::styled(" log out   ", styles::text_muted()),
                Span::styled("n", styles::keybinding()),
                Span::styled(" stay", styles::text_muted()),
            ]),
        ])
        .alignment(Alignment::Center)
        .render(inner, buf);
    }
}
