//! Main render/view function (View in TEA pattern)
//!
//! Everything drawn is derived from `AppState`: the controller's visibility
//! decides which surfaces exist, and each surface reads its own slice of
//! state. Overlays are layered in a fixed order, lowest first: views,
//! popover, start-call modal, dialing overlay, workstation, logout
//! confirmation, toast.

#[cfg(test)]
mod tests;

use agentdesk_app::AppState;
use agentdesk_core::{ActivePopover, ViewState};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Width of the header popovers
const POPOVER_WIDTH: u16 = 48;

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let visibility = state.controller.visibility();

    // The workstation covers everything beneath it.
    if !visibility.workstation {
        let areas = layout::create(area, &visibility);

        if let Some(sidebar) = areas.sidebar {
            frame.render_widget(
                widgets::Sidebar::new(state.controller.view(), &state.settings.agent),
                sidebar,
            );
        }

        render_content(frame, state, visibility.content, areas.content);

        if let Some(header) = areas.header {
            let alerts = state.fixtures.alerts();
            frame.render_widget(
                widgets::MainHeader::new(&state.agent, alerts.len(), visibility.popover),
                header,
            );
            render_popover(frame, state, visibility.popover, header);
        }

        if visibility.start_call_modal {
            frame.render_widget(
                widgets::StartCallDialog::new(&state.start_call_form, state.outbound_lines()),
                area,
            );
        }

        if visibility.dialing_overlay {
            frame.render_widget(
                widgets::DialingOverlay::new(
                    &state.fixtures.customer,
                    state.controller.active_call(),
                    state.tick_count,
                ),
                area,
            );
        }
    } else if let Some(ws) = state.workstation.as_ref() {
        frame.render_widget(
            widgets::Workstation::new(
                ws,
                state.controller.call_status(),
                state.controller.active_call(),
                &state.fixtures,
                state.tick_count,
            ),
            area,
        );
    }

    if visibility.logout_confirm {
        frame.render_widget(widgets::LogoutConfirm, area);
    }

    if let Some(toast) = state.toasts.current() {
        frame.render_widget(widgets::ToastView::new(toast), area);
    }
}

fn render_content(frame: &mut Frame, state: &AppState, content: Option<ViewState>, area: Rect) {
    let fixtures = &state.fixtures;
    let views = &state.views;

    match content {
        Some(ViewState::Dashboard) => frame.render_widget(
            widgets::Dashboard::new(fixtures, &state.agent, views.dashboard.selected),
            area,
        ),
        Some(ViewState::History) => {
            let records = state.visible_history();
            frame.render_widget(
                widgets::HistoryTable::new(&records, &views.history, fixtures.history_total),
                area,
            );
        }
        Some(ViewState::Details) => {
            let resolved = state.controller.selected_call_id().and_then(|id| {
                fixtures
                    .find_call(id)
                    .zip(fixtures.review_for(id))
            });
            match resolved {
                Some((call, review)) => frame.render_widget(
                    widgets::CallDetails::new(call, review, &views.details),
                    area,
                ),
                None => frame.render_widget(widgets::NoCallSelected, area),
            }
        }
        Some(ViewState::Report) => frame.render_widget(
            widgets::QualityReportView::new(&fixtures.report, &views.report),
            area,
        ),
        Some(ViewState::Backtrace) => {
            let events = state.visible_timeline();
            frame.render_widget(
                widgets::Backtrace::new(&fixtures.customer, &events, &views.backtrace),
                area,
            );
        }
        None => frame.render_widget(widgets::NoCallSelected, area),
    }
}

/// Header bar plus the open popover. A pointer-down inside any of these
/// leaves the popover open.
pub fn header_regions(state: &AppState, screen: Rect) -> Vec<Rect> {
    let visibility = state.controller.visibility();
    if visibility.workstation {
        return Vec::new();
    }
    let Some(header) = layout::create(screen, &visibility).header else {
        return Vec::new();
    };

    let mut regions = vec![header];
    regions.extend(popover_rect(state, visibility.popover, header, screen));
    regions
}

fn popover_rect(
    state: &AppState,
    popover: ActivePopover,
    header: Rect,
    screen: Rect,
) -> Option<Rect> {
    let height = match popover {
        ActivePopover::None => return None,
        ActivePopover::Alerts => {
            let alerts = state.fixtures.alerts();
            widgets::AlertsPopover::new(&alerts).height()
        }
        ActivePopover::Settings => widgets::SettingsPopover::HEIGHT,
    };
    Some(layout::popover_area(header, POPOVER_WIDTH, height).intersection(screen))
}

fn render_popover(frame: &mut Frame, state: &AppState, popover: ActivePopover, header: Rect) {
    let Some(rect) = popover_rect(state, popover, header, frame.area()) else {
        return;
    };
    match popover {
        ActivePopover::None => {}
        ActivePopover::Alerts => {
            let alerts = state.fixtures.alerts();
            frame.render_widget(widgets::AlertsPopover::new(&alerts), rect);
        }
        ActivePopover::Settings => frame.render_widget(
            widgets::SettingsPopover::new(&state.settings.agent, &state.agent),
            rect,
        ),
    }
}
