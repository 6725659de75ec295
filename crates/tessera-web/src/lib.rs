//! # Tessera Web
//!
//! Resource location and request path helpers for web applications.
//!
//! ## Resource location
//!
//! [`open_resource`] and [`ResourceLocator::open`] turn a location string
//! into an open byte stream:
//!
//! | Location | Example | Opened by |
//! |----------|---------|-----------|
//! | URL | `https://cdn.example.com/prices.csv` | HTTP client / `file:` |
//! | Application path | `WEB-INF/app.toml`, `/index.html` | [`ApplicationResourceProvider`] |
//! | Filesystem path | `/etc/shop/prices.csv` (under a configured root) | `tokio::fs` |
//!
//! ```rust
//! use tessera_web::{MemoryResourceProvider, ResourceErrorKind, ResourceLocator};
//!
//! # tokio_test::block_on(async {
//! let provider = MemoryResourceProvider::new().with_resource("/WEB-INF/app.toml", "port = 8080");
//! let locator = ResourceLocator::new();
//!
//! assert!(locator.open("WEB-INF/app.toml", &provider).await.is_ok());
//!
//! let err = locator.open("WEB-INF/missing.toml", &provider).await.err().unwrap();
//! assert_eq!(err.kind(), ResourceErrorKind::ResourceNotFound);
//! # });
//! ```
//!
//! ## Request paths
//!
//! | Function | Returns |
//! |----------|---------|
//! | [`path_within_application`] | request path without the context path |
//! | [`path_within_handler_mapping`] | request path after the handler path |
//! | [`directory_of`] | directory part of a path |
//! | [`group_parameters_by_prefix`] | parameters sharing a name prefix |
//!
//! ## Application root
//!
//! [`publish_web_app_root`] stores the application root directory under a
//! process-wide [`properties`] key at startup.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app_root;
mod cookie;
mod error;
mod origin;
mod params;
mod path;
pub mod properties;
mod provider;
mod resource;

pub use app_root::{
    publish_web_app_root, web_app_root_key, ApplicationContext, Publication,
    DEFAULT_WEB_APP_ROOT_KEY,
};
pub use cookie::{find_cookie, Cookie, Cookies};
pub use error::{ResourceError, ResourceErrorKind, WebError};
pub use origin::{application_url, ApplicationOrigin};
pub use params::{group_parameters_by_prefix, ParameterSet};
pub use path::{directory_of, path_within_application, path_within_handler_mapping, RequestPathContext};
pub use provider::{DirectoryContext, MemoryResourceProvider};
pub use resource::{open_resource, ApplicationResourceProvider, Location, ResourceLocator, ResourceStream};
pub use tessera_config::WEB_APP_ROOT_KEY_PARAM;

/// Request header carrying the client's cached modification time.
pub use http::header::IF_MODIFIED_SINCE as HEADER_IF_MODIFIED_SINCE;

/// Response header carrying a resource's modification time.
pub use http::header::LAST_MODIFIED as HEADER_LAST_MODIFIED;
