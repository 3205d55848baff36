//! Tests for lookup message types

use super::*;
use serde_json::json;

#[test]
fn test_request_id_for_each_request_variant() {
    let predictions = LookupRequest::Predictions {
        request_id: 4,
        query: PredictionQuery {
            text: "a".to_string(),
            limit: 5,
            distance: 25,
            zipcode: None,
        },
    };
    let record = LookupRequest::Record {
        request_id: 5,
        npi: "1".to_string(),
    };
    let location = LookupRequest::Location { request_id: 6 };

    assert_eq!(predictions.request_id(), 4);
    assert_eq!(record.request_id(), 5);
    assert_eq!(location.request_id(), 6);
}

#[test]
fn test_request_id_for_each_response_variant() {
    let predictions = LookupResponse::Predictions {
        request_id: 1,
        suggestions: Vec::new(),
    };
    let record = LookupResponse::Record {
        request_id: 2,
        npi: "9".to_string(),
        record: Some(json!({"npi": "9"})),
    };
    let location = LookupResponse::Location {
        request_id: 3,
        zipcode: None,
    };

    assert_eq!(predictions.request_id(), 1);
    assert_eq!(record.request_id(), 2);
    assert_eq!(location.request_id(), 3);
}

#[test]
fn test_lookup_error_display() {
    assert_eq!(
        LookupError::MissingPayload("results").to_string(),
        "Missing `results` in response payload"
    );
    assert!(LookupError::Status(503).to_string().contains("503"));
    assert!(
        LookupError::Network("connection refused".to_string())
            .to_string()
            .contains("connection refused")
    );
}
