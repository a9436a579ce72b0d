//! Scrub track rendering for the control bar.

use ratatui::text::{Line, Span};

use crate::theme::Theme;

/// Format progress as a right-aligned percentage (always 4 columns).
pub fn format_percent(progress: f64) -> String {
    let pct = (progress.clamp(0.0, 1.0) * 100.0).round() as u32;
    format!("{:>3}%", pct)
}

/// Build the track character array.
///
/// # Returns
/// A tuple of (bar_chars, filled_count). The playhead sits at `filled_count`
/// and disappears once the track is full.
pub fn build_progress_bar_chars(bar_width: usize, progress: f64) -> (Vec<char>, usize) {
    let progress = progress.clamp(0.0, 1.0);
    let filled = ((bar_width as f64 * progress) as usize).min(bar_width);

    let mut bar: Vec<char> = vec!['─'; bar_width];
    for c in bar.iter_mut().take(filled) {
        *c = '━';
    }
    if filled < bar_width {
        bar[filled] = '⏺';
    }

    (bar, filled)
}

/// Track as a styled line: played part in the accent color, the rest dimmed.
pub fn progress_bar_line(bar_width: usize, progress: f64, theme: &Theme) -> Line<'static> {
    let (bar, filled) = build_progress_bar_chars(bar_width, progress);
    let played: String = bar[..filled].iter().collect();
    let mut spans = vec![Span::styled(played, theme.accent_style())];
    if filled < bar_width {
        spans.push(Span::styled(bar[filled].to_string(), theme.icon_style()));
        let rest: String = bar[filled + 1..].iter().collect();
        spans.push(Span::styled(rest, theme.text_secondary_style()));
    }
    Line::from(spans)
}
