//! Theme configuration for the control bar and CLI
//!
//! The bar comes in two palettes: dark (black bar, light icons) and light
//! (white bar, dark icons). Provides both ratatui styles (for the TUI) and
//! ANSI escape codes (for CLI output).

use ratatui::style::{Color, Modifier, Style};

/// Colors used by the control bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Bar background
    pub background: Color,
    /// Icons and labels
    pub icon: Color,
    /// Played portion of the track
    pub accent: Color,
    /// Unplayed track and hints
    pub text_secondary: Color,
    /// Plain text in CLI output
    pub text_primary: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Black bar with light gray icons.
    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            icon: Color::Rgb(0xdd, 0xdd, 0xdd),
            accent: Color::Green,
            text_secondary: Color::DarkGray,
            text_primary: Color::Gray,
            success: Color::Green,
        }
    }

    /// White bar with dark gray icons.
    pub fn light() -> Self {
        Self {
            background: Color::White,
            icon: Color::Rgb(0x33, 0x33, 0x33),
            accent: Color::Blue,
            text_secondary: Color::Gray,
            text_primary: Color::Black,
            success: Color::Green,
        }
    }

    /// Pick the palette for the `light` option.
    pub fn for_mode(light: bool) -> Self {
        if light {
            Self::light()
        } else {
            Self::dark()
        }
    }

    // Style helpers

    /// Base style for the whole bar.
    pub fn bar_style(&self) -> Style {
        Style::default().bg(self.background).fg(self.icon)
    }

    /// Style for icons and the speed label.
    pub fn icon_style(&self) -> Style {
        Style::default().fg(self.icon).bg(self.background)
    }

    /// Style for the played part of the track.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).bg(self.background)
    }

    /// Style for the selected entry in the rate picker.
    pub fn accent_bold_style(&self) -> Style {
        self.accent_style().add_modifier(Modifier::BOLD)
    }

    /// Style for the unplayed track and borders.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary).bg(self.background)
    }

    // CLI output

    /// Primary text color, for command output.
    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    /// Secondary text color, for summaries and hints.
    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    /// Success color, for confirmations.
    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

/// Wrap `text` in the SGR sequence for `color`.
///
/// Plain text when `NO_COLOR` is set or the color has no basic ANSI code.
fn paint(color: Color, text: &str) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        return text.to_string();
    }
    match sgr_code(color) {
        Some(code) => format!("\x1b[{code}m{text}\x1b[0m"),
        None => text.to_string(),
    }
}

/// SGR foreground code of a basic terminal color.
fn sgr_code(color: Color) -> Option<u8> {
    let code = match color {
        Color::Black => 30,
        Color::Red => 31,
        Color::Green => 32,
        Color::Yellow => 33,
        Color::Blue => 34,
        Color::Magenta => 35,
        Color::Cyan => 36,
        Color::Gray => 37,
        Color::DarkGray => 90,
        Color::White => 97,
        _ => return None,
    };
    Some(code)
}

/// Theme for CLI output.
pub fn current_theme() -> Theme {
    Theme::default()
}
