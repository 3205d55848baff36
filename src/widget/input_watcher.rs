//! Input watching
//!
//! Translates focus, blur, key, resize and click events on the bound input into
//! widget intents: request predictions, move the cursor, select, close.

use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::Widget;
use crate::events::SelectTrigger;
use crate::lookup::{LookupRequest, LookupResponse, PredictionQuery};
use crate::menu::MenuEntry;

impl Widget {
    /// Input gained focus: request predictions and start watching for resizes
    ///
    /// Also cancels a close scheduled by a preceding blur.
    pub fn handle_focus(&mut self, now: Instant) {
        self.focused = true;
        self.predictions_on_hold = false;
        self.blur_timer.cancel();
        self.request_predictions(now);
        self.observing_resize = true;
    }

    /// Input lost focus: stop watching resizes and close after the grace period
    ///
    /// The delay lets a click on a suggestion, which blurs the input first,
    /// reach its handler before the menu goes away. A pending prediction request
    /// is dropped, and answers to ones already sent are ignored until the next
    /// focus, so nothing reopens the menu behind the closed input.
    pub fn handle_blur(&mut self, now: Instant) {
        self.focused = false;
        self.observing_resize = false;
        self.debouncer.cancel();
        self.predictions_on_hold = true;
        self.blur_timer.schedule(now);
    }

    /// Viewport resized; dismisses the menu while the input is focused
    pub fn handle_resize(&mut self) {
        if self.observing_resize {
            self.close_menu();
        }
    }

    /// Route a key press; returns true when the key was consumed
    ///
    /// Navigation keys are handled here and never reach the text field. Any other
    /// key is passed to the field and, if it changed the value, follows the
    /// value-change path.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        match key.code {
            KeyCode::Esc => {
                self.close_menu();
                true
            }
            KeyCode::Up => {
                self.menu.move_cursor_up();
                true
            }
            KeyCode::Down => {
                self.menu.move_cursor_down();
                true
            }
            KeyCode::Tab => {
                if let Some(npi) = self.menu.first_suggestion().map(|s| s.npi.clone()) {
                    self.select_entry(&npi, SelectTrigger::Tab);
                }
                true
            }
            KeyCode::Enter => {
                if let Some(npi) = self.menu.cursor_suggestion().map(|s| s.npi.clone()) {
                    self.select_entry(&npi, SelectTrigger::Enter);
                }
                true
            }
            _ => {
                if self.input.handle_key(key) {
                    self.handle_value_change(now);
                }
                false
            }
        }
    }

    /// Text pasted into the input; follows the value-change path
    pub fn handle_paste(&mut self, text: &str, now: Instant) {
        if self.input.insert_str(text) {
            self.handle_value_change(now);
        }
    }

    /// The input value changed through editing
    ///
    /// An empty value closes the menu synchronously and drops any pending
    /// prediction request; anything else (re)starts the debounce timer.
    pub fn handle_value_change(&mut self, now: Instant) {
        if self.input.value().is_empty() {
            self.debouncer.cancel();
            self.close_menu();
            return;
        }
        self.request_predictions(now);
    }

    /// Left click at a terminal cell; returns true when it landed on the menu
    ///
    /// Only suggestion rows select; the header and placeholder are inert.
    pub fn handle_click(&mut self, column: u16, row: u16) -> bool {
        let npi = match self.menu.entry_at(column, row) {
            Some(MenuEntry::Suggestion(suggestion)) => suggestion.npi.clone(),
            Some(_) => return true,
            None => return false,
        };
        self.select_entry(&npi, SelectTrigger::Click);
        true
    }

    /// Start (or restart) the debounce timer for a prediction request
    pub fn request_predictions(&mut self, now: Instant) {
        self.debouncer.schedule(now);
    }

    /// Debounce timer fired: build the query from the current value and send it
    pub(super) fn fire_predictions(&mut self) {
        let query = PredictionQuery {
            text: self.input.value().to_string(),
            limit: self.options.result_limit,
            distance: self.options.distance_radius,
            zipcode: self.active_zipcode().map(str::to_string),
        };

        match self.dispatch(|request_id| LookupRequest::Predictions { request_id, query }) {
            Ok(request_id) => {
                log::debug!("Prediction request {} dispatched", request_id);
                self.latest_prediction_id = Some(request_id);
            }
            Err(e) => {
                log::debug!("Prediction request not sent: {}", e);
                self.latest_prediction_id = Some(self.next_request_id);
                self.handle_response(LookupResponse::Predictions {
                    request_id: self.next_request_id,
                    suggestions: Vec::new(),
                });
            }
        }
    }
}
