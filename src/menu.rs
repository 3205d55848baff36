//! Suggestion menu controller
//!
//! Owns the rendered content of the dropdown, the keyboard cursor, visibility
//! and on-screen position. Event emission is left to the widget so the menu
//! stays a plain state container.

use ratatui::layout::Rect;

use crate::suggestion::{Suggestion, SuggestionCache};

/// Rows taken by one suggestion: name line + address line
pub const SUGGESTION_HEIGHT: u16 = 2;
/// Rows taken by the header and by the placeholder
pub const LINE_ENTRY_HEIGHT: u16 = 1;
/// Top + bottom border rows
pub const MENU_BORDER_HEIGHT: u16 = 2;

pub const NO_RESULTS_MESSAGE: &str = "No results found";

/// One rendered item of the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// "Clinicians Near {zip}:" shown before the suggestions
    Header { zipcode: String },
    /// Placeholder for an empty result set
    NoResults,
    Suggestion(Suggestion),
}

impl MenuEntry {
    pub fn height(&self) -> u16 {
        match self {
            MenuEntry::Suggestion(_) => SUGGESTION_HEIGHT,
            MenuEntry::Header { .. } | MenuEntry::NoResults => LINE_ENTRY_HEIGHT,
        }
    }

    pub fn as_suggestion(&self) -> Option<&Suggestion> {
        match self {
            MenuEntry::Suggestion(s) => Some(s),
            _ => None,
        }
    }
}

pub fn header_text(zipcode: &str) -> String {
    format!("Clinicians Near {}:", zipcode)
}

#[derive(Debug, Clone, Default)]
pub struct MenuController {
    entries: Vec<MenuEntry>,
    /// Index into the suggestion entries only (header/placeholder excluded)
    cursor: Option<usize>,
    visible: bool,
    /// Top-left of the menu and its width, flush below the bound input
    position: Option<Rect>,
    /// Popup area as last drawn, after clipping to the frame
    drawn_area: Option<Rect>,
}

impl MenuController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rendered content with a new result set
    ///
    /// Old entries and the cursor are dropped before anything new is inserted.
    /// At most `limit` suggestions are kept; each kept one is recorded in `cache`.
    /// The caller is responsible for opening the menu afterwards.
    pub fn populate(
        &mut self,
        suggestions: Vec<Suggestion>,
        limit: usize,
        header_zipcode: Option<&str>,
        cache: &mut SuggestionCache,
    ) {
        self.entries.clear();
        self.cursor = None;
        self.drawn_area = None;

        if suggestions.is_empty() {
            self.entries.push(MenuEntry::NoResults);
        } else if let Some(zipcode) = header_zipcode {
            self.entries.push(MenuEntry::Header {
                zipcode: zipcode.to_string(),
            });
        }

        for suggestion in suggestions.into_iter().take(limit) {
            cache.insert(suggestion.clone());
            self.entries.push(MenuEntry::Suggestion(suggestion));
        }
    }

    /// Show the menu flush below `anchor` (the bound input's last known area)
    pub fn open(&mut self, anchor: Option<Rect>) {
        if let Some(anchor) = anchor {
            self.position = Some(Rect {
                x: anchor.x,
                y: anchor.y.saturating_add(anchor.height),
                width: anchor.width,
                height: 0,
            });
        }
        self.drawn_area = None;
        self.visible = true;
    }

    /// Hide the menu; rendered content is kept
    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn position(&self) -> Option<Rect> {
        self.position
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn suggestions(&self) -> impl Iterator<Item = &Suggestion> {
        self.entries.iter().filter_map(MenuEntry::as_suggestion)
    }

    pub fn suggestion_count(&self) -> usize {
        self.suggestions().count()
    }

    pub fn first_suggestion(&self) -> Option<&Suggestion> {
        self.suggestions().next()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn cursor_suggestion(&self) -> Option<&Suggestion> {
        self.cursor.and_then(|index| self.suggestions().nth(index))
    }

    /// Highlight the next suggestion, wrapping to the first
    ///
    /// With nothing highlighted, starts at the first suggestion.
    pub fn move_cursor_down(&mut self) {
        let count = self.suggestion_count();
        if count == 0 {
            return;
        }
        self.cursor = Some(match self.cursor {
            Some(current) => (current + 1) % count,
            None => 0,
        });
    }

    /// Highlight the previous suggestion, wrapping to the last
    ///
    /// With nothing highlighted, starts at the last suggestion.
    pub fn move_cursor_up(&mut self) {
        let count = self.suggestion_count();
        if count == 0 {
            return;
        }
        self.cursor = Some(match self.cursor {
            Some(0) | None => count - 1,
            Some(current) => current - 1,
        });
    }

    /// Total rows including borders, saturating at `u16::MAX`
    pub fn height(&self) -> u16 {
        self.entries
            .iter()
            .fold(MENU_BORDER_HEIGHT, |rows, entry| rows.saturating_add(entry.height()))
    }

    /// Record the area the popup was drawn in
    ///
    /// Hit testing uses it until the next populate or open, so clicks match what
    /// is on screen when the frame clipped the popup.
    pub fn set_drawn_area(&mut self, area: Rect) {
        self.drawn_area = Some(area);
    }

    pub fn drawn_area(&self) -> Option<Rect> {
        self.drawn_area
    }

    /// Entry drawn at the given terminal cell, if the menu is open and covers it
    ///
    /// Borders never hit, and neither does an entry cut off by the bottom border.
    pub fn entry_at(&self, column: u16, row: u16) -> Option<&MenuEntry> {
        if !self.visible {
            return None;
        }
        let area = match self.drawn_area {
            Some(area) => area,
            None => Rect {
                height: self.height(),
                ..self.position?
            },
        };
        let inside_columns =
            column > area.x && column < area.x.saturating_add(area.width).saturating_sub(1);
        if !inside_columns {
            return None;
        }

        let inner_bottom = area.y.saturating_add(area.height).saturating_sub(1);
        let mut top = area.y.saturating_add(1);
        for entry in &self.entries {
            let bottom = top.saturating_add(entry.height());
            if bottom > inner_bottom {
                return None;
            }
            if row >= top && row < bottom {
                return Some(entry);
            }
            top = bottom;
        }
        None
    }
}

#[cfg(test)]
#[path = "menu_tests.rs"]
mod menu_tests;
