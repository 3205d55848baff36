//! HTTP client for the clinician discovery API

use std::time::Duration;

use serde_json::Value;

use super::payload::{parse_location, parse_predictions, parse_record};
use super::{LookupError, LookupRequest, LookupResponse, PredictionQuery};
use crate::suggestion::Suggestion;

const PREDICTIONS_PATH: &str = "clinician-identity/discovery";
const LOCATION_PATH: &str = "clinician-identity/location";
const RECORD_PATH: &str = "sources/usgov.hhs.npi";

/// Async client for the three lookup calls
#[derive(Debug, Clone)]
pub struct LookupClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl LookupClient {
    /// Create a client rooted at `base_url`
    ///
    /// A trailing slash is added to the base when missing so relative paths join
    /// the way callers expect.
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let mut base_url = base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            http,
            base_url,
            api_key: api_key.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Perform a request, folding every failure into the response's empty shape
    pub async fn execute(&self, request: LookupRequest) -> LookupResponse {
        match request {
            LookupRequest::Predictions { request_id, query } => {
                let suggestions = self.predictions(&query).await.unwrap_or_else(|e| {
                    log::debug!("Predictions request {} failed: {}", request_id, e);
                    Vec::new()
                });
                LookupResponse::Predictions {
                    request_id,
                    suggestions,
                }
            }
            LookupRequest::Record { request_id, npi } => {
                let record = match self.record(&npi).await {
                    Ok(record) => Some(record),
                    Err(e) => {
                        log::debug!("Record request {} for {} failed: {}", request_id, npi, e);
                        None
                    }
                };
                LookupResponse::Record {
                    request_id,
                    npi,
                    record,
                }
            }
            LookupRequest::Location { request_id } => {
                let zipcode = match self.location().await {
                    Ok(zipcode) => Some(zipcode),
                    Err(e) => {
                        log::debug!("Location request {} failed: {}", request_id, e);
                        None
                    }
                };
                LookupResponse::Location {
                    request_id,
                    zipcode,
                }
            }
        }
    }

    pub async fn predictions(&self, query: &PredictionQuery) -> Result<Vec<Suggestion>, LookupError> {
        let params = prediction_params(query, &self.api_key);
        let payload = self.get_json(&self.endpoint(PREDICTIONS_PATH), &params).await?;
        parse_predictions(&payload)
    }

    pub async fn record(&self, npi: &str) -> Result<Value, LookupError> {
        let url = self.endpoint(&format!("{}/{}", RECORD_PATH, npi));
        let params = [("secret", self.api_key.clone())];
        let payload = self.get_json(&url, &params).await?;
        parse_record(&payload)
    }

    pub async fn location(&self) -> Result<String, LookupError> {
        let params = [("secret", self.api_key.clone())];
        let payload = self.get_json(&self.endpoint(LOCATION_PATH), &params).await?;
        parse_location(&payload)
    }

    async fn get_json(&self, url: &str, params: &[(&str, String)]) -> Result<Value, LookupError> {
        log::debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))
    }
}

/// Query string for a prediction request
///
/// `zipcode` is only sent when the query carries one.
pub fn prediction_params(query: &PredictionQuery, api_key: &str) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("query", query.text.clone()),
        ("limit", query.limit.to_string()),
        ("secret", api_key.to_string()),
        ("distance", query.distance.to_string()),
    ];
    if let Some(zipcode) = &query.zipcode {
        params.push(("zipcode", zipcode.clone()));
    }
    params
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
