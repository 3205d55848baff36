//! Tests for lookup payload parsing

use super::*;
use serde_json::json;

mod predictions_tests {
    use super::*;

    #[test]
    fn test_parse_predictions_valid() {
        let payload = json!({
            "results": [
                {"npi": "1", "first_name": "Jane", "last_name": "Doe"},
                {"npi": "2", "first_name": "John", "last_name": "Smith"}
            ]
        });

        let suggestions = parse_predictions(&payload).unwrap();

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].display_name(), "Jane Doe");
        assert_eq!(suggestions[1].npi, "2");
    }

    #[test]
    fn test_parse_predictions_empty_results_array() {
        let suggestions = parse_predictions(&json!({"results": []})).unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_parse_predictions_missing_results_key() {
        let err = parse_predictions(&json!({"meta": {}})).unwrap_err();
        assert!(matches!(err, LookupError::MissingPayload("results")));
    }

    #[test]
    fn test_parse_predictions_results_not_array() {
        let err = parse_predictions(&json!({"results": "nope"})).unwrap_err();
        assert!(matches!(err, LookupError::MissingPayload("results")));
    }

    #[test]
    fn test_parse_predictions_empty_object() {
        let err = parse_predictions(&json!({})).unwrap_err();
        assert!(matches!(err, LookupError::Parse(_)));
    }

    #[test]
    fn test_parse_predictions_not_an_object() {
        assert!(parse_predictions(&json!(null)).is_err());
        assert!(parse_predictions(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_parse_predictions_skips_records_without_identifier() {
        let payload = json!({
            "results": [
                {"first_name": "No", "last_name": "Id"},
                {"npi": 42, "first_name": "Has", "last_name": "Id"}
            ]
        });

        let suggestions = parse_predictions(&payload).unwrap();

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].npi, "42");
    }
}

mod record_tests {
    use super::*;

    #[test]
    fn test_parse_record_valid() {
        let payload = json!({"result": {"npi": "123", "first_name": "Jane"}});
        let record = parse_record(&payload).unwrap();
        assert_eq!(record["first_name"], "Jane");
    }

    #[test]
    fn test_parse_record_missing_result() {
        let err = parse_record(&json!({"results": []})).unwrap_err();
        assert!(matches!(err, LookupError::MissingPayload("result")));
    }

    #[test]
    fn test_parse_record_null_result() {
        assert!(parse_record(&json!({"result": null})).is_err());
    }

    #[test]
    fn test_parse_record_empty_payload() {
        assert!(parse_record(&json!({})).is_err());
    }
}

mod location_tests {
    use super::*;

    #[test]
    fn test_parse_location_nested_zipcode() {
        let zip = parse_location(&json!({"result": {"zipcode": "94107"}})).unwrap();
        assert_eq!(zip, "94107");
    }

    #[test]
    fn test_parse_location_top_level_zipcode() {
        let zip = parse_location(&json!({"zipcode": "10001"})).unwrap();
        assert_eq!(zip, "10001");
    }

    #[test]
    fn test_parse_location_numeric_zipcode() {
        let zip = parse_location(&json!({"result": {"zipcode": 60601}})).unwrap();
        assert_eq!(zip, "60601");
    }

    #[test]
    fn test_parse_location_missing_zipcode() {
        let err = parse_location(&json!({"result": {"city": "Chicago"}})).unwrap_err();
        assert!(matches!(err, LookupError::MissingPayload("zipcode")));
    }

    #[test]
    fn test_parse_location_blank_zipcode() {
        assert!(parse_location(&json!({"result": {"zipcode": "  "}})).is_err());
    }

    #[test]
    fn test_parse_location_null_zipcode() {
        assert!(parse_location(&json!({"result": {"zipcode": null}})).is_err());
    }
}
