//! Configuration schema types.
//!
//! This module defines the structure of all configuration sections.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Init parameter naming the process-wide property that receives the
/// application root directory.
pub const WEB_APP_ROOT_KEY_PARAM: &str = "webAppRootKey";

/// Web application section.
///
/// Describes where the application lives on disk, where it is mounted in
/// the URL space, and the application-level init parameters.
///
/// # Example
///
/// ```
/// use tessera_config::WebAppConfig;
///
/// let config = WebAppConfig {
///     context_path: "/shop".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(config.root_dir.to_str(), Some("."));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WebAppConfig {
    /// Application root directory. In-application resource paths resolve
    /// beneath it.
    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,

    /// Mount prefix of the application within request URIs ("" for root).
    #[serde(default)]
    pub context_path: String,

    /// Application-level init parameters (e.g. `webAppRootKey`).
    #[serde(default)]
    pub init_params: IndexMap<String, String>,
}

impl Default for WebAppConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            context_path: String::new(),
            init_params: IndexMap::new(),
        }
    }
}

fn default_root_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Resource location section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct ResourceConfig {
    /// Host directories whose absolute paths are opened straight from disk.
    /// Other rooted locations are looked up inside the application.
    #[serde(default)]
    pub filesystem_roots: Vec<PathBuf>,

    /// Total timeout for URL fetches in seconds. None leaves the client
    /// default (no timeout).
    #[serde(default)]
    pub http_timeout_secs: Option<u64>,
}

/// Log format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON formatted logs (production).
    #[default]
    Json,
    /// Human-readable pretty format (development).
    Pretty,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Enable logging.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log filter directive (trace, debug, info, warn, error, or per-target).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format.
    #[serde(default)]
    pub format: LogFormat,

    /// Include ANSI color codes in output.
    #[serde(default)]
    pub ansi_enabled: bool,

    /// Include source file and line in logs.
    #[serde(default)]
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            format: LogFormat::default(),
            ansi_enabled: false,
            include_location: false,
        }
    }
}

impl From<&LoggingConfig> for tessera_telemetry::LogConfig {
    fn from(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.enabled,
            level: config.level.clone(),
            json_format: config.format == LogFormat::Json,
            ansi: config.ansi_enabled,
            span_events: false,
            file_line_info: config.include_location,
            include_target: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
