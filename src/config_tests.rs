//! Tests for config loading

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_missing_file_returns_defaults_without_warning() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let result = load_config(Some(&path));

    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_none());
}

#[test]
fn test_load_valid_file() {
    let file = write_config(
        r#"
[api]
api_key = "abc123"
base_url = "http://localhost:8080/api/"

[menu]
result_limit = 3
highlight = false

[geolocation]
enabled = false
distance_radius = 10
"#,
    );

    let result = load_config(Some(file.path()));

    assert!(result.warning.is_none());
    assert_eq!(result.config.api.api_key.as_deref(), Some("abc123"));
    assert_eq!(result.config.api.base_url, "http://localhost:8080/api/");
    assert_eq!(result.config.menu.result_limit, 3);
    assert!(!result.config.menu.highlight);
    assert!(!result.config.geolocation.enabled);
    assert_eq!(result.config.geolocation.distance_radius, 10);
}

#[test]
fn test_load_invalid_file_falls_back_with_warning() {
    let file = write_config("[menu\nresult_limit = ");

    let result = load_config(Some(file.path()));

    assert_eq!(result.config, Config::default());
    let warning = result.warning.expect("invalid file should produce a warning");
    assert!(warning.contains("Invalid config file"));
}

#[test]
fn test_parse_config_reports_config_error() {
    let err = parse_config("[timing]\ndebounce_ms = -1").unwrap_err();
    assert!(matches!(err, CacError::Config(_)));
}

#[test]
fn test_render_config_masks_api_key() {
    let mut config = Config::default();
    config.api.api_key = Some("supersecretkey".to_string());

    let rendered = render_config(&config);

    assert!(rendered.contains("supe****"));
    assert!(!rendered.contains("supersecretkey"));
    assert!(rendered.contains("result_limit = 5"));
}

#[test]
fn test_render_config_short_key_fully_masked() {
    let mut config = Config::default();
    config.api.api_key = Some("abc".to_string());

    let rendered = render_config(&config);

    assert!(rendered.contains("\"****\""));
}

#[test]
fn test_render_config_without_key_omits_it() {
    let rendered = render_config(&Config::default());
    assert!(!rendered.contains("api_key"));
}

#[test]
fn test_default_config_path_ends_with_app_dir() {
    if let Some(path) = default_config_path() {
        assert!(path.ends_with("cac/config.toml"));
    }
}
