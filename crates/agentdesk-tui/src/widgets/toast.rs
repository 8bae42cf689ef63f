//! Transient notification in the bottom-right corner

use agentdesk_app::{Toast, ToastLevel};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

pub struct ToastView<'a> {
    toast: &'a Toast,
}

impl<'a> ToastView<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }

    fn icon(&self) -> &'static str {
        match self.toast.level {
            ToastLevel::Success => "✓",
            ToastLevel::Info => "ℹ",
            ToastLevel::Warning => "⚠",
        }
    }
}

impl Widget for ToastView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // icon, spaces and borders
        let width = (self.toast.text.width() as u16 + 6).min(area.width);
        let height = 3.min(area.height);
        if width < 4 || height < 3 {
            return;
        }
        let rect = Rect {
            x: area.right() - width,
            y: area.bottom() - height,
            width,
            height,
        };

        Clear.render(rect, buf);
        let style = styles::toast_style(self.toast.level);
        let block = styles::modal_block("").border_style(style);
        let inner = block.inner(rect);
        block.render(rect, buf);

        Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", self.icon()), style),
            Span::styled(self.toast.text.as_str(), styles::text_primary()),
        ]))
        .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn toast(level: ToastLevel, text: &str) -> Toast {
        Toast {
            id: 1,
            level,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_toast_renders_bottom_right() {
        let t = toast(ToastLevel::Success, "Signed in");
        let mut term = TestTerminal::new();
        term.render_widget(ToastView::new(&t), term.area());

        assert!(term.line_contains(30, "Signed in"));
        assert!(term.buffer_contains("✓"));
    }

    #[test]
    fn test_toast_skipped_when_area_too_small() {
        let t = toast(ToastLevel::Warning, "Sign in and set available first");
        let mut term = TestTerminal::with_size(3, 2);
        term.render_widget(ToastView::new(&t), term.area());

        assert!(!term.buffer_contains("Sign"));
    }
}
