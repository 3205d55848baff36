//! Lookup service collaborator
//!
//! Message types exchanged between the widget and the background lookup worker,
//! plus the HTTP client that talks to the clinician discovery API.

use std::sync::mpsc::Receiver;

use serde_json::Value;
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;

use crate::suggestion::Suggestion;

mod client;
mod payload;
mod worker;

pub use client::LookupClient;
pub use payload::{parse_location, parse_predictions, parse_record};
pub use worker::spawn_worker;

/// Errors that can occur while talking to the lookup service
///
/// None of these reach the host application; the widget treats every one of
/// them as "no data".
#[derive(Debug, Error)]
pub enum LookupError {
    /// Transport failure, including timeouts
    #[error("Network error: {0}")]
    Network(String),

    /// Service answered with a non-success status
    #[error("Lookup service returned status {0}")]
    Status(u16),

    /// Body was not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Body parsed but lacked the expected payload key
    #[error("Missing `{0}` in response payload")]
    MissingPayload(&'static str),

    /// Worker could not be reached or could not start
    #[error("Lookup worker unavailable: {0}")]
    WorkerUnavailable(String),
}

/// Parameters of a prediction query, captured when the debounce timer fires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionQuery {
    pub text: String,
    pub limit: usize,
    /// Radius in miles
    pub distance: u32,
    /// Present only when geolocation biasing is on and a zip code is known
    pub zipcode: Option<String>,
}

/// Request messages sent to the lookup worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    /// Typeahead predictions for the current input text
    Predictions {
        request_id: u64,
        query: PredictionQuery,
    },
    /// Full record for a selected suggestion
    Record { request_id: u64, npi: String },
    /// Zip code of the current user, for geolocation biasing
    Location { request_id: u64 },
}

impl LookupRequest {
    pub fn request_id(&self) -> u64 {
        match self {
            LookupRequest::Predictions { request_id, .. }
            | LookupRequest::Record { request_id, .. }
            | LookupRequest::Location { request_id } => *request_id,
        }
    }
}

/// Response messages received from the lookup worker
///
/// Failures are already folded into the "no data" shape of each variant.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupResponse {
    Predictions {
        request_id: u64,
        suggestions: Vec<Suggestion>,
    },
    Record {
        request_id: u64,
        npi: String,
        record: Option<Value>,
    },
    Location {
        request_id: u64,
        zipcode: Option<String>,
    },
}

impl LookupResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            LookupResponse::Predictions { request_id, .. }
            | LookupResponse::Record { request_id, .. }
            | LookupResponse::Location { request_id, .. } => *request_id,
        }
    }
}

/// Channel handles connecting a widget to its lookup worker
#[derive(Debug)]
pub struct LookupChannels {
    pub request_tx: UnboundedSender<LookupRequest>,
    pub response_rx: Receiver<LookupResponse>,
}

#[cfg(test)]
#[path = "lookup_tests.rs"]
mod lookup_tests;
