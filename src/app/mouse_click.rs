//! Mouse click handling
//!
//! Clicks on the open menu select a suggestion; clicks elsewhere move focus
//! between the input and the details pane.

use std::time::Instant;

use ratatui::layout::{Position, Rect};

use super::app_state::{App, Focus};

/// Handle a left mouse button click at the given terminal cell
pub fn handle_click(app: &mut App, column: u16, row: u16, now: Instant) {
    // The menu overlaps the details pane, so it gets the first look
    if app.widget.handle_click(column, row) {
        return;
    }

    if contains(app.input_area, column, row) {
        app.set_focus(Focus::Input, now);
    } else if contains(app.details_area, column, row) {
        app.set_focus(Focus::Details, now);
    }
}

fn contains(area: Option<Rect>, column: u16, row: u16) -> bool {
    area.is_some_and(|area| area.contains(Position::new(column, row)))
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
