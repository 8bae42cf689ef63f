//! Screen layout definitions for the TUI
//!
//! The sidebar and header come and go with the controller's derived
//! visibility; the content view takes whatever is left.

use agentdesk_app::Visibility;
use ratatui::layout::{Constraint, Layout, Rect};

pub const SIDEBAR_WIDTH: u16 = 22;
pub const HEADER_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub sidebar: Option<Rect>,
    pub header: Option<Rect>,
    /// Content view area
    pub content: Rect,
}

pub fn create(area: Rect, visibility: &Visibility) -> ScreenAreas {
    let (sidebar, main) = if visibility.sidebar {
        let [side, main] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)])
                .areas(area);
        (Some(side), main)
    } else {
        (None, area)
    };

    let (header, content) = if visibility.header {
        let [head, content] =
            Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(3)]).areas(main);
        (Some(head), content)
    } else {
        (None, main)
    };

    ScreenAreas {
        sidebar,
        header,
        content,
    }
}

/// Rect for a popover hanging below the right end of the header.
pub fn popover_area(header: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(header.width);
    Rect::new(
        header.right().saturating_sub(width),
        header.bottom(),
        width,
        height,
    )
}
