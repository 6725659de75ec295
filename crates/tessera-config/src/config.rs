//! Main configuration types.
//!
//! This module provides the top-level [`TesseraConfig`] struct and its builder.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, LogFormat, LoggingConfig, ResourceConfig, WebAppConfig};

/// Complete Tessera application configuration.
///
/// Use [`ConfigLoader`](crate::ConfigLoader) to load it from files and
/// environment variables.
///
/// # Example
///
/// ```
/// use tessera_config::TesseraConfig;
///
/// let config = TesseraConfig::default();
/// assert_eq!(config.webapp.context_path, "");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct TesseraConfig {
    /// Web application layout and init parameters.
    #[serde(default)]
    pub webapp: WebAppConfig,

    /// Resource location settings.
    #[serde(default)]
    pub resources: ResourceConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TesseraConfig {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```
    /// use tessera_config::{TesseraConfig, WebAppConfig};
    ///
    /// let config = TesseraConfig::builder()
    ///     .webapp(WebAppConfig {
    ///         context_path: "/admin".to_string(),
    ///         ..Default::default()
    ///     })
    ///     .build();
    ///
    /// assert_eq!(config.webapp.context_path, "/admin");
    /// ```
    #[must_use]
    pub fn builder() -> TesseraConfigBuilder {
        TesseraConfigBuilder::new()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if:
    /// - the context path is neither empty nor a `/`-prefixed path without a
    ///   trailing slash
    /// - a filesystem root is relative
    /// - the HTTP timeout is zero
    /// - the log level is not a valid filter directive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let context_path = &self.webapp.context_path;
        if !context_path.is_empty() && (!context_path.starts_with('/') || context_path.ends_with('/')) {
            return Err(ConfigError::invalid_value(
                "webapp.context_path",
                format!("expected \"\" or a path like \"/app\", got \"{context_path}\""),
            ));
        }

        if let Some(root) = self
            .resources
            .filesystem_roots
            .iter()
            .find(|root| !root.is_absolute())
        {
            return Err(ConfigError::invalid_value(
                "resources.filesystem_roots",
                format!("root must be absolute: {}", root.display()),
            ));
        }

        if self.resources.http_timeout_secs == Some(0) {
            return Err(ConfigError::invalid_value(
                "resources.http_timeout_secs",
                "must be greater than zero",
            ));
        }

        if self.logging.enabled {
            tessera_telemetry::create_env_filter(&self.logging.level)
                .map_err(|e| ConfigError::invalid_value("logging.level", e.to_string()))?;
        }

        Ok(())
    }

    /// Create a development configuration preset.
    ///
    /// Pretty, colored debug logs with source locations.
    ///
    /// # Example
    ///
    /// ```
    /// use tessera_config::TesseraConfig;
    ///
    /// let config = TesseraConfig::development();
    /// assert_eq!(config.logging.level, "debug");
    /// ```
    #[must_use]
    pub fn development() -> Self {
        let mut config = Self::default();

        config.logging.level = "debug".to_string();
        config.logging.format = LogFormat::Pretty;
        config.logging.ansi_enabled = true;
        config.logging.include_location = true;

        config
    }

    /// Create a production configuration preset.
    ///
    /// JSON logs at info level, a 30 second ceiling on URL fetches.
    ///
    /// # Example
    ///
    /// ```
    /// use tessera_config::TesseraConfig;
    ///
    /// let config = TesseraConfig::production();
    /// assert_eq!(config.logging.format, tessera_config::LogFormat::Json);
    /// ```
    #[must_use]
    pub fn production() -> Self {
        let mut config = Self::default();

        config.logging.level = "info".to_string();
        config.logging.format = LogFormat::Json;
        config.logging.ansi_enabled = false;

        config.resources.http_timeout_secs = Some(30);

        config
    }
}

/// Builder for [`TesseraConfig`].
#[derive(Debug, Default)]
pub struct TesseraConfigBuilder {
    config: TesseraConfig,
}

impl TesseraConfigBuilder {
    /// Create a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the web application section.
    #[must_use]
    pub fn webapp(mut self, webapp: WebAppConfig) -> Self {
        self.config.webapp = webapp;
        self
    }

    /// Set the resource section.
    #[must_use]
    pub fn resources(mut self, resources: ResourceConfig) -> Self {
        self.config.resources = resources;
        self
    }

    /// Set the logging section.
    #[must_use]
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> TesseraConfig {
        self.config
    }
}
