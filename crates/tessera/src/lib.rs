//! # Tessera
//!
//! **Resource location and request path utilities for web applications**
//!
//! - **Resource location**: open URLs, in-application paths and host files
//!   through one call
//! - **Request paths**: derive application and handler sub-paths, group
//!   parameters, read cookies
//! - **Startup**: layered configuration, structured logging, application-root
//!   publication
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tessera::prelude::*;
//! use tokio::io::AsyncReadExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let app = Application::start(
//!         ConfigLoader::new()
//!             .with_optional_file("tessera.toml")?
//!             .with_env_prefix("TESSERA"),
//!     )?;
//!
//!     let mut stream = app.open_resource("WEB-INF/app.toml").await?;
//!     let mut content = String::new();
//!     stream.read_to_string(&mut content).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod error;

pub use app::Application;
pub use error::ApplicationError;

// Re-export configuration types
pub use tessera_config as config;
pub use tessera_config::{ConfigLoader, TesseraConfig, WebAppConfig};

// Re-export telemetry types
pub use tessera_telemetry as telemetry;

// Re-export web types
pub use tessera_web as web;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use tessera::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Application, ApplicationError};

    pub use tessera_config::{ConfigLoader, TesseraConfig};

    pub use tessera_web::{
        application_url, directory_of, find_cookie, group_parameters_by_prefix, open_resource,
        path_within_application, path_within_handler_mapping, ApplicationOrigin,
        ApplicationResourceProvider, Cookies, DirectoryContext, MemoryResourceProvider,
        ParameterSet, RequestPathContext, ResourceError, ResourceErrorKind, ResourceLocator,
        ResourceStream,
    };
}
