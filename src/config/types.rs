// Configuration type definitions

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://www.bloomapi.com/api/";
pub const DEFAULT_RESULT_LIMIT: usize = 5;
pub const DEFAULT_DISTANCE_RADIUS: u32 = 25;
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;
pub const DEFAULT_BLUR_GRACE_MS: u64 = 200;
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Lookup service section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            api_key: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Suggestion menu section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
    #[serde(default = "default_true")]
    pub highlight: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            result_limit: DEFAULT_RESULT_LIMIT,
            highlight: true,
        }
    }
}

/// Geolocation biasing section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeolocationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Radius in miles around the detected zip code
    #[serde(default = "default_distance_radius")]
    pub distance_radius: u32,
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        GeolocationConfig {
            enabled: true,
            distance_radius: DEFAULT_DISTANCE_RADIUS,
        }
    }
}

/// Timer section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_blur_grace_ms")]
    pub blur_grace_ms: u64,
    /// Drop prediction responses that answer an older request
    #[serde(default)]
    pub discard_stale_predictions: bool,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            blur_grace_ms: DEFAULT_BLUR_GRACE_MS,
            discard_stale_predictions: false,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub geolocation: GeolocationConfig,
    #[serde(default)]
    pub timing: TimingConfig,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_result_limit() -> usize {
    DEFAULT_RESULT_LIMIT
}

fn default_distance_radius() -> u32 {
    DEFAULT_DISTANCE_RADIUS
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_blur_grace_ms() -> u64 {
    DEFAULT_BLUR_GRACE_MS
}

fn default_true() -> bool {
    true
}
