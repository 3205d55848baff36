//! Clinician autocomplete widget
//!
//! Binds to a single-line input and drives the suggestion menu. All state is
//! owned here and mutated only through the widget's own handlers; network work
//! happens on the lookup worker and comes back through `poll_responses`.

use std::collections::HashMap;
use std::sync::mpsc::Receiver;
use std::time::Instant;

use ratatui::layout::Rect;
use tokio::sync::mpsc::UnboundedSender;

use crate::config::Config;
use crate::debouncer::Debouncer;
use crate::error::CacError;
use crate::events::{EventEmitter, EventKind, ListenerId, SelectTrigger, WidgetEvent};
use crate::input::InputField;
use crate::lookup::{LookupChannels, LookupError, LookupRequest, LookupResponse};
use crate::menu::MenuController;
use crate::suggestion::{Suggestion, SuggestionCache};

mod input_watcher;
mod responses;
mod selection;
pub mod widget_render;

/// Options recognized by the widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetOptions {
    /// Root URL for all lookup calls
    pub api_base: String,
    /// Required credential; absence is reported but not fatal
    pub api_key: Option<String>,
    /// Maximum suggestions shown
    pub result_limit: usize,
    /// Emphasize matched query text in suggestions
    pub highlight: bool,
    /// Bias results by, and display, the user's zip code
    pub geolocation: bool,
    /// Miles around the zip code
    pub distance_radius: u32,
    pub debounce_ms: u64,
    pub blur_grace_ms: u64,
    /// Ignore prediction responses to anything but the latest request
    pub discard_stale_predictions: bool,
    pub timeout_ms: u64,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl WidgetOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            api_base: config.api.base_url.clone(),
            api_key: config.api.api_key.clone(),
            result_limit: config.menu.result_limit,
            highlight: config.menu.highlight,
            geolocation: config.geolocation.enabled,
            distance_radius: config.geolocation.distance_radius,
            debounce_ms: config.timing.debounce_ms,
            blur_grace_ms: config.timing.blur_grace_ms,
            discard_stale_predictions: config.timing.discard_stale_predictions,
            timeout_ms: config.api.timeout_ms,
        }
    }

    /// API key with surrounding whitespace removed, or `None` when blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// Clinician lookup autocomplete bound to one input
pub struct Widget {
    input: InputField,
    options: WidgetOptions,
    menu: MenuController,
    cache: SuggestionCache,
    /// Set at most once, from the location lookup made at construction
    zipcode: Option<String>,
    debouncer: Debouncer,
    blur_timer: Debouncer,
    focused: bool,
    /// Set by blur, cleared by focus; prediction responses are dropped meanwhile
    predictions_on_hold: bool,
    observing_resize: bool,
    /// Last area the input was drawn in; anchors the menu
    input_area: Option<Rect>,
    emitter: EventEmitter,
    request_tx: UnboundedSender<LookupRequest>,
    response_rx: Receiver<LookupResponse>,
    next_request_id: u64,
    latest_prediction_id: Option<u64>,
    /// Record lookups in flight, keyed by request id
    pending_selections: HashMap<u64, SelectTrigger>,
    config_errors: Vec<CacError>,
}

impl Widget {
    /// Create a widget bound to `input`
    ///
    /// A missing input or API key is logged and recorded, and the widget is built
    /// anyway: a missing input is replaced by a detached field. When geolocation
    /// is enabled the zip code lookup is dispatched right away.
    pub fn new(input: Option<InputField>, options: WidgetOptions, channels: LookupChannels) -> Self {
        let mut config_errors = Vec::new();

        let input = input.unwrap_or_else(|| {
            config_errors.push(CacError::MissingInput);
            InputField::default()
        });
        if options.api_key().is_none() {
            config_errors.push(CacError::MissingApiKey);
        }
        for error in &config_errors {
            log::error!("{}", error);
        }

        let mut widget = Self {
            input,
            menu: MenuController::new(),
            cache: SuggestionCache::new(),
            zipcode: None,
            debouncer: Debouncer::new(options.debounce_ms),
            blur_timer: Debouncer::new(options.blur_grace_ms),
            focused: false,
            predictions_on_hold: false,
            observing_resize: false,
            input_area: None,
            emitter: EventEmitter::new(),
            request_tx: channels.request_tx,
            response_rx: channels.response_rx,
            next_request_id: 0,
            latest_prediction_id: None,
            pending_selections: HashMap::new(),
            config_errors,
            options,
        };

        if widget.options.geolocation {
            let dispatched = widget.dispatch(|request_id| LookupRequest::Location { request_id });
            if let Err(e) = dispatched {
                log::debug!("Proceeding without geolocation: {}", e);
            }
        }

        widget
    }

    /// Register a listener for `kind`
    pub fn on<F>(&mut self, kind: EventKind, listener: F) -> ListenerId
    where
        F: FnMut(&WidgetEvent) + 'static,
    {
        self.emitter.on(kind, listener)
    }

    pub fn off(&mut self, kind: EventKind, id: ListenerId) -> bool {
        self.emitter.off(kind, id)
    }

    pub fn input(&self) -> &InputField {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputField {
        &mut self.input
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn options(&self) -> &WidgetOptions {
        &self.options
    }

    pub fn menu(&self) -> &MenuController {
        &self.menu
    }

    pub fn cache(&self) -> &SuggestionCache {
        &self.cache
    }

    pub fn is_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn zipcode(&self) -> Option<&str> {
        self.zipcode.as_deref()
    }

    /// Configuration problems found at construction
    pub fn config_errors(&self) -> &[CacError] {
        &self.config_errors
    }

    /// Zip code to bias and label results with, if geolocation is active
    pub fn active_zipcode(&self) -> Option<&str> {
        if self.options.geolocation {
            self.zipcode()
        } else {
            None
        }
    }

    pub fn input_area(&self) -> Option<Rect> {
        self.input_area
    }

    pub fn set_input_area(&mut self, area: Rect) {
        self.input_area = Some(area);
    }

    /// Advance timers and apply any lookup responses that have arrived
    pub fn tick(&mut self, now: Instant) {
        if self.blur_timer.fire_if_due(now) {
            self.close_menu();
        }
        if self.debouncer.fire_if_due(now) {
            self.fire_predictions();
        }
        self.poll_responses();
    }

    /// Earliest pending timer deadline, for sizing the host's poll timeout
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.debouncer.deadline(), self.blur_timer.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Replace the menu content with `suggestions` and show it
    pub fn populate_menu(&mut self, suggestions: Vec<Suggestion>) {
        let zipcode = self.active_zipcode().map(str::to_string);
        self.menu.populate(
            suggestions,
            self.options.result_limit,
            zipcode.as_deref(),
            &mut self.cache,
        );
        self.open_menu();
    }

    pub fn open_menu(&mut self) {
        self.menu.open(self.input_area);
        self.emitter.emit(&WidgetEvent::Open);
    }

    /// Hide the menu; emits `close` even when already hidden
    pub fn close_menu(&mut self) {
        self.menu.close();
        self.emitter.emit(&WidgetEvent::Close);
    }

    /// Send a request to the lookup worker under a fresh request id
    fn dispatch<F>(&mut self, build: F) -> Result<u64, LookupError>
    where
        F: FnOnce(u64) -> LookupRequest,
    {
        self.next_request_id = self.next_request_id.wrapping_add(1);
        let request_id = self.next_request_id;
        self.request_tx
            .send(build(request_id))
            .map_err(|e| LookupError::WorkerUnavailable(e.to_string()))?;
        Ok(request_id)
    }
}

#[cfg(test)]
#[path = "widget_tests.rs"]
mod widget_tests;
