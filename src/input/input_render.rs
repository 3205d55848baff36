//! Input field rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};

use super::InputField;

/// Render the bound input, highlighting the border when focused
pub fn render_field(input: &mut InputField, frame: &mut Frame, area: Rect, focused: bool) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    input.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Clinician ")
            .border_style(Style::default().fg(border_color)),
    );

    // Hide the cursor block while the field is not focused
    let cursor_style = if focused {
        Style::default().bg(Color::White).fg(Color::Black)
    } else {
        Style::default()
    };
    input.textarea.set_cursor_style(cursor_style);

    frame.render_widget(&input.textarea, area);
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
