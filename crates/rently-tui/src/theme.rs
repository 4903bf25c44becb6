//! Color palette and shared styles.

use ratatui::style::{Color, Modifier, Style};

use rently_core::format::Tone;

pub const ACCENT: Color = Color::Cyan;
pub const SUCCESS: Color = Color::Green;
pub const WARNING: Color = Color::Yellow;
pub const ERROR: Color = Color::Red;
pub const MUTED: Color = Color::DarkGray;

/// Terminal color for a status-badge tone.
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Positive => SUCCESS,
        Tone::Warning => WARNING,
        Tone::Negative => ERROR,
        Tone::Neutral => MUTED,
    }
}

pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn tab_active() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn tab_inactive() -> Style {
    Style::default().fg(MUTED)
}

pub fn key_hint() -> Style {
    Style::default().fg(MUTED)
}

pub fn selected_row() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

pub fn header_row() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}
