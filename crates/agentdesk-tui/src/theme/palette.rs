//! Color palette. Named terminal colors so the UI follows the user's theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);
/// Full-screen call workstation backdrop
pub const CALL_BG: Color = Color::Rgb(10, 12, 16);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;
/// Foreground on accent backgrounds
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const STATUS_BLUE: Color = Color::Blue;
pub const STATUS_INDIGO: Color = Color::Magenta;

// --- Effects ---
pub const SHADOW: Color = Color::Black;

// --- Bars ---
pub const BAR_FILL: Color = Color::Blue;
pub const BAR_PEAK: Color = Color::Cyan;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_backgrounds_are_rgb() {
        for color in [POPUP_BG, CALL_BG] {
            assert!(matches!(color, Color::Rgb(_, _, _)));
        }
    }

    #[test]
    fn test_contrast_differs_from_accent() {
        assert_ne!(CONTRAST_FG, ACCENT);
    }
}
