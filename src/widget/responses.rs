//! Lookup response handling

use std::sync::mpsc::TryRecvError;

use super::Widget;
use crate::lookup::LookupResponse;

impl Widget {
    /// Apply every response the worker has delivered so far
    ///
    /// Returns the number of responses processed.
    pub fn poll_responses(&mut self) -> usize {
        let mut processed = 0;
        loop {
            match self.response_rx.try_recv() {
                Ok(response) => {
                    self.handle_response(response);
                    processed += 1;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::debug!("Lookup worker disconnected");
                    break;
                }
            }
        }
        processed
    }

    /// Apply a single response
    ///
    /// Prediction responses overwrite the menu in arrival order unless stale
    /// filtering is enabled, in which case only the latest request's answer is
    /// rendered. Nothing is rendered between a blur and the next focus.
    pub fn handle_response(&mut self, response: LookupResponse) {
        match response {
            LookupResponse::Predictions {
                request_id,
                suggestions,
            } => {
                if self.predictions_on_hold {
                    log::debug!("Ignoring prediction response {} after blur", request_id);
                    return;
                }
                if self.options.discard_stale_predictions
                    && self.latest_prediction_id != Some(request_id)
                {
                    log::debug!("Discarding stale prediction response {}", request_id);
                    return;
                }
                self.populate_menu(suggestions);
            }
            LookupResponse::Record {
                request_id,
                npi,
                record,
            } => self.resolve_selection(request_id, npi, record),
            LookupResponse::Location { zipcode, .. } => {
                if self.zipcode.is_none()
                    && let Some(zipcode) = zipcode
                {
                    log::debug!("Geolocation zip code {}", zipcode);
                    self.zipcode = Some(zipcode);
                }
            }
        }
    }
}
