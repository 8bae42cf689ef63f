//! Semantic style builders.

use agentdesk_app::ToastLevel;
use agentdesk_core::{AgentStatus, CallStatus, CheckResult, EventStatus, RiskLevel, ScoreBand};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright_bold() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Status indicators ---

/// Call status indicator: `(icon, label, style)`.
pub fn call_status_indicator(status: CallStatus) -> (&'static str, &'static str, Style) {
    match status {
        CallStatus::Idle => ("○", "Idle", text_muted()),
        CallStatus::Dialing => (
            "◌",
            "Dialing",
            Style::default()
                .fg(palette::STATUS_YELLOW)
                .add_modifier(Modifier::BOLD),
        ),
        CallStatus::AudioConnected => (
            "●",
            "Audio",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        CallStatus::VideoConnected => (
            "●",
            "Video",
            Style::default()
                .fg(palette::STATUS_BLUE)
                .add_modifier(Modifier::BOLD),
        ),
        CallStatus::Ended => ("✗", "Ended", Style::default().fg(palette::STATUS_RED)),
    }
}

/// Agent status indicator: `(icon, style)`.
pub fn agent_status_indicator(status: AgentStatus, signing_in: bool) -> (&'static str, Style) {
    if signing_in {
        return ("↻", Style::default().fg(palette::STATUS_YELLOW));
    }
    match status {
        AgentStatus::Offline => ("○", text_muted()),
        AgentStatus::Preparing => ("◐", Style::default().fg(palette::STATUS_BLUE)),
        AgentStatus::Available => ("●", Style::default().fg(palette::STATUS_GREEN)),
        AgentStatus::Busy => ("●", Style::default().fg(palette::STATUS_RED)),
    }
}

pub fn toast_style(level: ToastLevel) -> Style {
    let fg = match level {
        ToastLevel::Success => palette::STATUS_GREEN,
        ToastLevel::Info => palette::STATUS_BLUE,
        ToastLevel::Warning => palette::STATUS_YELLOW,
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

pub fn risk_style(risk: RiskLevel) -> Style {
    match risk {
        RiskLevel::Low => Style::default().fg(palette::STATUS_GREEN),
        RiskLevel::Medium => Style::default().fg(palette::STATUS_YELLOW),
        RiskLevel::High => Style::default().fg(palette::STATUS_RED),
    }
}

/// Badge text and style for a history score band.
pub fn score_band_badge(band: ScoreBand) -> (&'static str, Style) {
    match band {
        ScoreBand::Unscored => ("--", text_muted()),
        ScoreBand::Poor => ("Poor", Style::default().fg(palette::STATUS_RED)),
        ScoreBand::Fair => ("Fair", Style::default().fg(palette::STATUS_YELLOW)),
        ScoreBand::Good => ("Good", Style::default().fg(palette::STATUS_GREEN)),
    }
}

pub fn check_result_badge(result: CheckResult) -> (&'static str, Style) {
    match result {
        CheckResult::Pass => ("PASS", Style::default().fg(palette::STATUS_GREEN)),
        CheckResult::Warning => ("WARN", Style::default().fg(palette::STATUS_YELLOW)),
        CheckResult::Fail => ("FAIL", Style::default().fg(palette::STATUS_RED)),
    }
}

pub fn event_status_style(status: EventStatus) -> Style {
    match status {
        EventStatus::Success => Style::default().fg(palette::STATUS_GREEN),
        EventStatus::Warning => Style::default().fg(palette::STATUS_YELLOW),
        EventStatus::Info => Style::default().fg(palette::STATUS_BLUE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_border_styles_have_correct_colors() {
        assert_eq!(border_inactive().fg, Some(palette::BORDER_DIM));
        assert_eq!(border_active().fg, Some(palette::BORDER_ACTIVE));
    }

    #[test]
    fn test_focused_selected_uses_black_on_cyan() {
        let style = focused_selected();
        assert_eq!(style.fg, Some(palette::CONTRAST_FG));
        assert_eq!(style.bg, Some(palette::ACCENT));
    }

    #[test]
    fn test_call_status_indicator_labels() {
        assert_eq!(call_status_indicator(CallStatus::Idle).1, "Idle");
        assert_eq!(call_status_indicator(CallStatus::Dialing).1, "Dialing");
        let (icon, label, style) = call_status_indicator(CallStatus::VideoConnected);
        assert_eq!(icon, "●");
        assert_eq!(label, "Video");
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_signing_in_overrides_status() {
        let (icon, style) = agent_status_indicator(AgentStatus::Offline, true);
        assert_eq!(icon, "↻");
        assert_eq!(style.fg, Some(palette::STATUS_YELLOW));
    }

    #[test]
    fn test_warning_toast_is_yellow() {
        assert_eq!(
            toast_style(ToastLevel::Warning).fg,
            Some(palette::STATUS_YELLOW)
        );
    }

    #[test]
    fn test_score_band_badges() {
        assert_eq!(score_band_badge(ScoreBand::Unscored).0, "--");
        assert_eq!(score_band_badge(ScoreBand::Good).1.fg, Some(palette::STATUS_GREEN));
    }
}
