use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

/// Single-line text input a widget binds to
pub struct InputField {
    id: String,
    pub textarea: TextArea<'static>,
}

impl InputField {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            textarea: build_textarea(String::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn value(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the whole value, leaving the cursor at the end
    pub fn set_value(&mut self, value: &str) {
        let block = self.textarea.block().cloned();
        self.textarea = build_textarea(value.to_string());
        if let Some(block) = block {
            self.textarea.set_block(block);
        }
        self.textarea.move_cursor(CursorMove::End);
    }

    /// Feed a key to the text area; returns true when the value changed
    ///
    /// Line breaks are swallowed so the field stays single-line.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if is_line_break(&key) {
            return false;
        }
        self.textarea.input(key)
    }

    /// Insert pasted text at the cursor; returns true when anything was inserted
    ///
    /// Line breaks become spaces.
    pub fn insert_str(&mut self, text: &str) -> bool {
        let flattened: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        if flattened.is_empty() {
            return false;
        }
        self.textarea.insert_str(flattened)
    }
}

impl Default for InputField {
    fn default() -> Self {
        Self::new("")
    }
}

fn build_textarea(value: String) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![value]);

    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Clinician ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text("Start typing a clinician name...");

    textarea
}

fn is_line_break(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_new_input_field() {
        let field = InputField::new("clinician");
        assert_eq!(field.id(), "clinician");
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_default_has_empty_id() {
        let field = InputField::default();
        assert_eq!(field.id(), "");
    }

    #[test]
    fn test_typing_changes_value() {
        let mut field = InputField::new("f");
        assert!(field.handle_key(key(KeyCode::Char('S'))));
        assert!(field.handle_key(key(KeyCode::Char('m'))));
        assert_eq!(field.value(), "Sm");
    }

    #[test]
    fn test_cursor_movement_is_not_a_change() {
        let mut field = InputField::new("f");
        field.set_value("Smith");
        assert!(!field.handle_key(key(KeyCode::Left)));
        assert!(!field.handle_key(key(KeyCode::Home)));
        assert_eq!(field.value(), "Smith");
    }

    #[test]
    fn test_enter_does_not_insert_newline() {
        let mut field = InputField::new("f");
        field.set_value("Smith");
        assert!(!field.handle_key(key(KeyCode::Enter)));
        assert!(!field.handle_key(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
        assert_eq!(field.textarea.lines().len(), 1);
    }

    #[test]
    fn test_set_value_replaces_and_moves_cursor_to_end() {
        let mut field = InputField::new("f");
        field.set_value("Smi");
        field.set_value("Jane Doe");
        assert_eq!(field.value(), "Jane Doe");
        assert_eq!(field.textarea.cursor(), (0, 8));
    }

    #[test]
    fn test_insert_str_flattens_line_breaks() {
        let mut field = InputField::new("f");
        assert!(field.insert_str("Jane\nDoe"));
        assert_eq!(field.value(), "Jane Doe");
        assert_eq!(field.textarea.lines().len(), 1);
    }

    #[test]
    fn test_insert_empty_str_is_not_a_change() {
        let mut field = InputField::new("f");
        assert!(!field.insert_str(""));
    }

    #[test]
    fn test_backspace_to_empty() {
        let mut field = InputField::new("f");
        field.set_value("a");
        assert!(field.handle_key(key(KeyCode::Backspace)));
        assert_eq!(field.value(), "");
    }
}
