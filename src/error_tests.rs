//! Tests for CacError type

use super::*;

#[test]
fn test_missing_input_error_display() {
    let error = CacError::MissingInput;
    assert!(error.to_string().contains("Missing input field"));
}

#[test]
fn test_missing_api_key_error_display() {
    let error = CacError::MissingApiKey;
    let msg = error.to_string();
    assert!(msg.contains("Missing API key"));
    assert!(msg.contains("bloomapi.com"));
}

#[test]
fn test_config_error_display() {
    let error = CacError::Config("expected `=`".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Invalid config file"));
    assert!(msg.contains("expected `=`"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let cac_err = CacError::from(io_err);
    assert!(matches!(cac_err, CacError::Io(_)));
    assert!(cac_err.to_string().contains("test error"));
}

#[test]
fn test_error_debug() {
    let debug_str = format!("{:?}", CacError::MissingApiKey);
    assert!(debug_str.contains("MissingApiKey"));
}
