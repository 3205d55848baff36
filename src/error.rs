use thiserror::Error;

/// Custom error types for the clinician autocomplete widget
#[derive(Debug, Error)]
pub enum CacError {
    #[error("Missing input field: the widget has no text input to bind to")]
    MissingInput,

    #[error("Missing API key.\n\nRequest one at: https://www.bloomapi.com/documentation")]
    MissingApiKey,

    #[error("Invalid config file: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
