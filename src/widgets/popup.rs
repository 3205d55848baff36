use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area for a popup whose top-left corner and width come from `origin`
///
/// Height is `height`, clamped so the popup stays inside `bounds`; width is
/// clamped the same way.
pub fn popup_below_anchor(origin: Rect, height: u16, bounds: Rect) -> Rect {
    let bottom = bounds.y.saturating_add(bounds.height);
    let right = bounds.x.saturating_add(bounds.width);
    let y = origin.y.min(bottom);
    let x = origin.x.min(right);

    Rect {
        x,
        y,
        width: origin.width.min(right - x),
        height: height.min(bottom - y),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
