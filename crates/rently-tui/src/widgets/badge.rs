//! Status-badge rendering.

use ratatui::style::Style;
use ratatui::text::Span;

use rently_core::format::StatusBadge;

use crate::theme;

/// Render a badge as a colored span.
pub fn badge_span(badge: StatusBadge) -> Span<'static> {
    Span::styled(
        badge.label,
        Style::default().fg(theme::tone_color(badge.tone)),
    )
}
