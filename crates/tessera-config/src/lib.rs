//! Typed configuration for Tessera web applications.
//!
//! Configuration is layered (defaults → file → environment) and strict:
//! unknown fields in a file are rejected.
//!
//! - [`WebAppConfig`] - application root directory, context path, init parameters
//! - [`ResourceConfig`] - filesystem roots and URL fetch timeout
//! - [`LoggingConfig`] - log level and format
//!
//! # Example
//!
//! ```no_run
//! use tessera_config::ConfigLoader;
//!
//! # fn main() -> Result<(), tessera_config::ConfigError> {
//! let config = ConfigLoader::new()
//!     .with_optional_file("tessera.toml")?
//!     .with_env_prefix("TESSERA")
//!     .load()?;
//!
//! println!("Application root: {}", config.webapp.root_dir.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! ```toml
//! [webapp]
//! root_dir = "/srv/shop"
//! context_path = "/shop"
//!
//! [webapp.init_params]
//! webAppRootKey = "shop.root"
//!
//! [resources]
//! filesystem_roots = ["/etc/shop"]
//! http_timeout_secs = 10
//!
//! [logging]
//! level = "info"
//! format = "json"
//! ```
//!
//! # Environment Variable Overrides
//!
//! - `TESSERA__WEBAPP__ROOT_DIR=/srv/shop`
//! - `TESSERA__WEBAPP__ROOT_KEY=shop.root`
//! - `TESSERA__RESOURCES__FILESYSTEM_ROOTS=/etc/shop,/var/lib/shop`
//! - `TESSERA__LOGGING__LEVEL=debug`

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod loader;
mod schema;

pub use config::{TesseraConfig, TesseraConfigBuilder};
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{
    LogFormat, LoggingConfig, ResourceConfig, WebAppConfig, WEB_APP_ROOT_KEY_PARAM,
};
