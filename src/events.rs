//! Widget event emitter
//!
//! Listeners are registered per event kind and called in registration order.
//! Nothing is buffered: a listener only sees events emitted after it was added.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

/// Names of the events a widget emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Open,
    Close,
    Select,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Open => write!(f, "open"),
            EventKind::Close => write!(f, "close"),
            EventKind::Select => write!(f, "select"),
        }
    }
}

/// What caused a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectTrigger {
    /// Tab picks the first rendered suggestion
    Tab,
    /// Enter picks the highlighted suggestion
    Enter,
    Click,
}

/// Payload delivered to listeners
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    Open,
    Close,
    /// `record` is `None` when the full-record lookup failed
    Select {
        trigger: SelectTrigger,
        npi: String,
        record: Option<Value>,
    },
}

impl WidgetEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            WidgetEvent::Open => EventKind::Open,
            WidgetEvent::Close => EventKind::Close,
            WidgetEvent::Select { .. } => EventKind::Select,
        }
    }
}

/// Handle returned by `on`, used to remove the listener again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&WidgetEvent)>;

#[derive(Default)]
pub struct EventEmitter {
    listeners: HashMap<EventKind, Vec<(ListenerId, Listener)>>,
    next_id: u64,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(&mut self, kind: EventKind, listener: F) -> ListenerId
    where
        F: FnMut(&WidgetEvent) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(kind)
            .or_default()
            .push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns false if it was not registered for `kind`
    pub fn off(&mut self, kind: EventKind, id: ListenerId) -> bool {
        let Some(listeners) = self.listeners.get_mut(&kind) else {
            return false;
        };
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    pub fn emit(&mut self, event: &WidgetEvent) {
        if let Some(listeners) = self.listeners.get_mut(&event.kind()) {
            for (_, listener) in listeners.iter_mut() {
                listener(event);
            }
        }
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("open", &self.listener_count(EventKind::Open))
            .field("close", &self.listener_count(EventKind::Close))
            .field("select", &self.listener_count(EventKind::Select))
            .finish()
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
