use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::{App, Focus};
use super::mouse_click;

const PAGE_SCROLL: u16 = 10;

impl App {
    /// Handle one terminal event and update application state
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key, now),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse, now),
            Event::Paste(text) => self.handle_paste_event(text, now),
            Event::Resize(_, _) => self.widget.handle_resize(),
            _ => {}
        }
        self.drain_widget_events();
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.handle_global_keys(key, now) {
            return;
        }

        match self.focus {
            Focus::Input => {
                self.widget.handle_key(key, now);
            }
            Focus::Details => self.handle_details_key(key),
        }
    }

    /// Handle pasted text; only the input accepts it
    pub fn handle_paste_event(&mut self, text: String, now: Instant) {
        if self.focus == Focus::Input {
            self.widget.handle_paste(&text, now);
        }
    }

    /// Keys that work regardless of focus; returns true if handled
    fn handle_global_keys(&mut self, key: KeyEvent, now: Instant) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('s') if ctrl => {
                self.output_record = true;
                self.should_quit = true;
                true
            }
            KeyCode::BackTab => {
                let next = match self.focus {
                    Focus::Input => Focus::Details,
                    Focus::Details => Focus::Input,
                };
                self.set_focus(next, now);
                true
            }
            _ => false,
        }
    }

    fn handle_details_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.details_scroll = self.details_scroll.saturating_add(1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.details_scroll = self.details_scroll.saturating_sub(1);
            }
            KeyCode::PageDown => {
                self.details_scroll = self.details_scroll.saturating_add(PAGE_SCROLL);
            }
            KeyCode::PageUp => {
                self.details_scroll = self.details_scroll.saturating_sub(PAGE_SCROLL);
            }
            KeyCode::Home | KeyCode::Char('g') => self.details_scroll = 0,
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            mouse_click::handle_click(self, mouse.column, mouse.row, now);
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
