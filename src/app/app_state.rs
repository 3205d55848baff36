use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use serde_json::Value;

use crate::events::{EventKind, WidgetEvent};
use crate::widget::Widget;

/// Upper bound on how long the host waits for terminal input, so lookup
/// responses are applied promptly even when the user is idle
pub const RESPONSE_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Details,
}

/// What the details pane shows
#[derive(Debug, Clone, PartialEq)]
pub enum Details {
    /// Nothing selected yet
    Empty,
    /// Selection made but the full record could not be fetched
    NotFound { npi: String },
    Record { npi: String, record: Value },
}

/// Application state
pub struct App {
    pub widget: Widget,
    pub focus: Focus,
    pub details: Details,
    pub details_scroll: u16,
    /// Last widget activity, shown in the status line
    pub status: String,
    pub should_quit: bool,
    /// Print the selected record to stdout on exit
    pub output_record: bool,
    /// Areas from the last render, for mouse hit testing
    pub input_area: Option<Rect>,
    pub details_area: Option<Rect>,
    widget_events: Receiver<WidgetEvent>,
}

impl App {
    /// Wrap `widget`, subscribe to its events and give the input focus
    pub fn new(mut widget: Widget, now: Instant) -> Self {
        let (tx, widget_events) = mpsc::channel();
        for kind in [EventKind::Open, EventKind::Close, EventKind::Select] {
            let tx = tx.clone();
            widget.on(kind, move |event| {
                let _ = tx.send(event.clone());
            });
        }

        let status = match widget.config_errors().first() {
            Some(error) => error.to_string().lines().next().unwrap_or_default().to_string(),
            None => "Ready".to_string(),
        };

        let mut app = Self {
            widget,
            focus: Focus::Input,
            details: Details::Empty,
            details_scroll: 0,
            status,
            should_quit: false,
            output_record: false,
            input_area: None,
            details_area: None,
            widget_events,
        };
        app.widget.handle_focus(now);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Full record of the last selection, if it was found
    pub fn selected_record(&self) -> Option<&Value> {
        match &self.details {
            Details::Record { record, .. } => Some(record),
            _ => None,
        }
    }

    /// Move focus, reporting focus and blur to the widget
    pub fn set_focus(&mut self, focus: Focus, now: Instant) {
        if self.focus == focus {
            return;
        }
        self.focus = focus;
        match focus {
            Focus::Input => self.widget.handle_focus(now),
            Focus::Details => self.widget.handle_blur(now),
        }
    }

    /// Advance widget timers and apply lookup responses
    pub fn tick(&mut self, now: Instant) {
        self.widget.tick(now);
        self.drain_widget_events();
    }

    /// How long the host may block waiting for terminal input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.widget.next_deadline() {
            Some(deadline) => deadline
                .saturating_duration_since(now)
                .min(RESPONSE_POLL_INTERVAL),
            None => RESPONSE_POLL_INTERVAL,
        }
    }

    /// Fold events emitted by the widget into the status line and details pane
    pub fn drain_widget_events(&mut self) {
        while let Ok(event) = self.widget_events.try_recv() {
            self.apply_widget_event(event);
        }
    }

    fn apply_widget_event(&mut self, event: WidgetEvent) {
        match event {
            WidgetEvent::Open => {
                let count = self.widget.menu().suggestion_count();
                self.status = format!("open: {} suggestion(s)", count);
            }
            WidgetEvent::Close => {
                self.status = "close".to_string();
            }
            WidgetEvent::Select {
                trigger,
                npi,
                record,
            } => {
                log::debug!("Selected {} via {:?}", npi, trigger);
                self.details_scroll = 0;
                match record {
                    Some(record) => {
                        self.status = format!("select: {} ({:?})", npi, trigger);
                        self.details = Details::Record { npi, record };
                    }
                    None => {
                        self.status = format!("select: {} ({:?}), no record found", npi, trigger);
                        self.details = Details::NotFound { npi };
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
