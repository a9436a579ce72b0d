//! Placement of the control bar inside its container.

use ratatui::layout::Rect;

/// Rows taken by the bar (one content row plus borders).
pub const BAR_HEIGHT: u16 = 3;

/// Compute the bar rectangle.
///
/// # Arguments
/// * `area` - Container area
/// * `bottom` - Rows left free below the bar
/// * `full_width` - Span 99% of the container instead of 80% with 10% margins
pub fn bar_area(area: Rect, bottom: u16, full_width: bool) -> Rect {
    let percent: u32 = if full_width { 99 } else { 80 };
    let width = (area.width as u32 * percent / 100) as u16;
    let x = if full_width {
        area.x
    } else {
        area.x + area.width / 10
    };

    let height = BAR_HEIGHT.min(area.height);
    let y = area
        .bottom()
        .saturating_sub(bottom)
        .saturating_sub(height)
        .max(area.y);

    Rect::new(x, y, width, height)
}
