//! Logging setup for Tessera web applications.
//!
//! Tessera crates log through the `tracing` macros. This crate installs the
//! subscriber that turns those events into output:
//!
//! - JSON lines for production
//! - pretty, optionally colored output for development
//! - `EnvFilter` directives for per-crate levels
//!
//! # Example
//!
//! ```rust,ignore
//! use tessera_telemetry::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::production())?;
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod logging;

pub use error::TelemetryError;
pub use logging::{create_env_filter, init_logging, LogConfig};

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
