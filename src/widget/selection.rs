//! Two-phase selection
//!
//! Picking a suggestion updates the input and closes the menu right away from
//! the cached thin record, then fetches the full record and reports it through
//! a `select` event.

use serde_json::Value;

use super::Widget;
use crate::events::{SelectTrigger, WidgetEvent};
use crate::lookup::LookupRequest;

impl Widget {
    /// Select the rendered suggestion with identifier `npi`
    ///
    /// Selection is only triggered from rendered entries, which are always
    /// cached; an unknown identifier is logged and ignored.
    pub fn select_entry(&mut self, npi: &str, trigger: SelectTrigger) {
        let Some(display_name) = self.cache.get(npi).map(|s| s.display_name()) else {
            log::error!("Selection requested for uncached identifier {}", npi);
            return;
        };

        self.input.set_value(&display_name);
        self.close_menu();

        let npi = npi.to_string();
        let dispatched = self.dispatch(|request_id| LookupRequest::Record {
            request_id,
            npi: npi.clone(),
        });
        match dispatched {
            Ok(request_id) => {
                self.pending_selections.insert(request_id, trigger);
            }
            Err(e) => {
                log::debug!("Record request for {} not sent: {}", npi, e);
                self.emit_selection(trigger, npi, None);
            }
        }
    }

    /// Full-record response arrived for an earlier selection
    pub(super) fn resolve_selection(&mut self, request_id: u64, npi: String, record: Option<Value>) {
        let Some(trigger) = self.pending_selections.remove(&request_id) else {
            log::warn!("Ignoring record response {} with no pending selection", request_id);
            return;
        };
        self.emit_selection(trigger, npi, record);
    }

    /// Number of full-record lookups still in flight
    pub fn pending_selection_count(&self) -> usize {
        self.pending_selections.len()
    }

    fn emit_selection(&mut self, trigger: SelectTrigger, npi: String, record: Option<Value>) {
        self.emitter.emit(&WidgetEvent::Select {
            trigger,
            npi,
            record,
        });
    }
}
