//! Application startup errors.

use thiserror::Error;

/// Error starting an [`Application`](crate::Application).
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Configuration could not be loaded or is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] tessera_config::ConfigError),

    /// Logging could not be initialized.
    #[error("telemetry error: {0}")]
    Telemetry(#[from] tessera_telemetry::TelemetryError),

    /// The application root could not be published.
    #[error("web error: {0}")]
    Web(#[from] tessera_web::WebError),

    /// The HTTP client for URL resources could not be built.
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}
