use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::{App, Details, Focus};
use crate::widget::widget_render;

const TITLE: &str = " cac: clinician lookup ";
const KEY_HINTS: &str =
    "Tab first | Enter highlighted | Shift+Tab switch pane | Ctrl+S print & quit | Ctrl+C quit";
const EMPTY_DETAILS: &str = "Select a clinician to see their full record.";
const NOT_FOUND: &str = "No record found";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1), // Title bar
            Constraint::Length(3), // Input field is fixed 3 lines
            Constraint::Min(3),    // Details pane takes the rest
            Constraint::Length(1), // Status line
        ])
        .split(frame.area());

        self.input_area = Some(layout[1]);
        self.details_area = Some(layout[2]);

        render_title(frame, layout[0]);
        widget_render::render_input(&mut self.widget, frame, layout[1]);
        self.render_details(frame, layout[2]);
        self.render_status(frame, layout[3]);

        // Menu last so it draws over the details pane
        widget_render::render_menu(&mut self.widget, frame);
    }

    fn render_details(&self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::Details {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let title = match &self.details {
            Details::Record { npi, .. } | Details::NotFound { npi } => format!(" Record {} ", npi),
            Details::Empty => " Record ".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color));

        let (text, style) = match &self.details {
            Details::Empty => (
                EMPTY_DETAILS.to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Details::NotFound { .. } => (NOT_FOUND.to_string(), Style::default().fg(Color::Red)),
            Details::Record { record, .. } => (
                serde_json::to_string_pretty(record).unwrap_or_else(|_| record.to_string()),
                Style::default(),
            ),
        };

        let content = Paragraph::new(text)
            .block(block)
            .style(style)
            .scroll((self.details_scroll, 0));

        frame.render_widget(content, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.status),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::styled(format!(" {}", KEY_HINTS), Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
