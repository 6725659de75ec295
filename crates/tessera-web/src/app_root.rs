//! Application-root publication.
//!
//! At startup an application may publish its root directory as a
//! process-wide property so that configuration files and log paths can
//! refer to it. The property key comes from the `webAppRootKey` init
//! parameter and defaults to `webapp.root`.
//!
//! Two applications sharing a process must use different keys: the
//! first publication wins and later ones only warn.

use std::path::PathBuf;

use tessera_config::WEB_APP_ROOT_KEY_PARAM;
use tracing::{info, warn};

use crate::error::WebError;
use crate::properties;

/// Property key used when no `webAppRootKey` init parameter is set.
pub const DEFAULT_WEB_APP_ROOT_KEY: &str = "webapp.root";

/// What an application exposes to startup code.
pub trait ApplicationContext: Send + Sync {
    /// Returns the application-level init parameter `name`.
    fn init_parameter(&self, name: &str) -> Option<&str>;

    /// Maps an in-application path to a real directory on disk.
    ///
    /// Returns `None` when the application is not backed by a directory.
    fn real_path(&self, path: &str) -> Option<PathBuf>;
}

/// Outcome of [`publish_web_app_root`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Publication {
    /// The root was stored under `key`.
    Published {
        /// Property key.
        key: String,
        /// Published root directory.
        root: String,
    },
    /// `key` already held a value; nothing changed.
    AlreadySet {
        /// Property key.
        key: String,
        /// Value found under the key.
        existing: String,
    },
}

/// Returns the property key the application root is published under.
pub fn web_app_root_key(ctx: &dyn ApplicationContext) -> &str {
    ctx.init_parameter(WEB_APP_ROOT_KEY_PARAM)
        .filter(|key| !key.is_empty())
        .unwrap_or(DEFAULT_WEB_APP_ROOT_KEY)
}

/// Publishes the application root directory as a process-wide property.
///
/// Does nothing (but warns) when the key is already set.
///
/// # Errors
///
/// - [`WebError::RootUnavailable`] if the context cannot map `/` to a directory
/// - [`WebError::NonUtf8Root`] if the directory is not valid UTF-8
///
/// # Example
///
/// ```rust
/// use tessera_web::{properties, publish_web_app_root, DirectoryContext, Publication};
///
/// let dir = std::env::temp_dir();
/// let ctx = DirectoryContext::new(&dir).with_init_param("webAppRootKey", "doc.example.root");
///
/// let publication = publish_web_app_root(&ctx).unwrap();
/// assert!(matches!(publication, Publication::Published { .. }));
/// assert!(properties::property("doc.example.root").is_some());
/// ```
pub fn publish_web_app_root(ctx: &dyn ApplicationContext) -> Result<Publication, WebError> {
    let key = web_app_root_key(ctx);

    if let Some(existing) = properties::property(key) {
        return Ok(already_set(key, existing));
    }

    let root = ctx.real_path("/").ok_or(WebError::RootUnavailable)?;
    let root = root
        .into_os_string()
        .into_string()
        .map_err(|raw| WebError::NonUtf8Root(PathBuf::from(raw)))?;

    match properties::set_property_if_absent(key, root.clone()) {
        Ok(()) => {
            info!(property.key = key, root = %root, "published application root");
            Ok(Publication::Published {
                key: key.to_string(),
                root,
            })
        }
        Err(existing) => Ok(already_set(key, existing)),
    }
}

fn already_set(key: &str, existing: String) -> Publication {
    warn!(
        property.key = key,
        existing = %existing,
        "application root property is already set"
    );
    warn!(
        property.key = key,
        "applications sharing a process need distinct webAppRootKey init parameters"
    );
    Publication::AlreadySet {
        key: key.to_string(),
        existing,
    }
}
