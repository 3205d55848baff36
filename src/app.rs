//! Terminal host application for the clinician lookup widget

mod app_events;
mod app_render;
mod app_state;
mod mouse_click;

pub use app_state::{App, Details, Focus};
