//! Theme: dark canvas with the cyan/purple SyntaxScope accents.

use ratatui::style::Color;

pub mod colors {
    use super::*;
    /// Main canvas — dark slate so white text pops.
    pub const BG: Color = Color::Rgb(0x0f, 0x17, 0x2a);
    /// Search bar, tabs, status.
    pub const ELEVATED: Color = Color::Rgb(0x13, 0x1c, 0x31);
    /// Borders / separators.
    pub const BORDER: Color = Color::Rgb(0x1e, 0x29, 0x3b);
    /// Primary accent (cyan: prompt, selection bar, active tab).
    pub const ACCENT: Color = Color::Rgb(0x22, 0xd3, 0xee);
    /// Secondary accent (purple: category badges).
    pub const ACCENT_ALT: Color = Color::Rgb(0xc0, 0x84, 0xfc);
    /// Copy confirmation.
    pub const SUCCESS: Color = Color::Rgb(0x4a, 0xde, 0x80);
    /// Body text.
    pub const TEXT: Color = Color::Rgb(0xf1, 0xf5, 0xf9);
    /// Secondary text.
    pub const TEXT_DIM: Color = Color::Rgb(0x94, 0xa3, 0xb8);
    /// Hints, tags, placeholder.
    pub const MUTED: Color = Color::Rgb(0x64, 0x74, 0x8b);
}

pub const HEADER_HEIGHT: u16 = 2;
pub const SEARCH_HEIGHT: u16 = 3;
pub const TABS_HEIGHT: u16 = 1;
pub const STATUS_HEIGHT: u16 = 1;
/// Minimum lines reserved for the results pane.
pub const MIN_RESULT_LINES: u16 = 3;
/// Inner horizontal margin (chars each side).
pub const MARGIN_X: u16 = 1;
/// Lines one result row occupies (command line, detail line, gap).
pub const RESULT_ROW_LINES: u16 = 3;
