//! Clinician lookup autocomplete for terminal UIs
//!
//! A [`widget::Widget`] binds to a single-line [`input::InputField`], queries a
//! clinician discovery service as the user types, shows matches in a dropdown
//! menu and, once one is picked, fetches the full record and reports it
//! through a `select` event.

pub mod app;
pub mod config;
pub mod debouncer;
pub mod error;
pub mod events;
pub mod input;
pub mod lookup;
pub mod menu;
pub mod suggestion;
pub mod widget;
pub mod widgets;
