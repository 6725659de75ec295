//! Built-in application resource providers.
//!
//! - [`DirectoryContext`]: an application rooted at a directory on disk
//! - [`MemoryResourceProvider`]: an in-memory path → bytes map

use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use indexmap::IndexMap;
use tessera_config::WebAppConfig;
use tracing::{debug, warn};

use crate::app_root::ApplicationContext;
use crate::resource::{ApplicationResourceProvider, ResourceStream};

/// Application rooted at a directory.
///
/// In-application paths map beneath the root. Paths containing `..` or
/// resolving outside the canonical root (through symlinks) are refused.
///
/// # Example
///
/// ```rust
/// use tessera_web::{ApplicationContext, DirectoryContext};
///
/// let ctx = DirectoryContext::new("/srv/shop").with_init_param("webAppRootKey", "shop.root");
/// assert_eq!(ctx.init_parameter("webAppRootKey"), Some("shop.root"));
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryContext {
    root: PathBuf,
    init_params: IndexMap<String, String>,
}

impl DirectoryContext {
    /// Creates a context rooted at `root` with no init parameters.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            init_params: IndexMap::new(),
        }
    }

    /// Creates a context from the `[webapp]` configuration section.
    pub fn from_config(config: &WebAppConfig) -> Self {
        Self {
            root: config.root_dir.clone(),
            init_params: config.init_params.clone(),
        }
    }

    /// Adds an init parameter.
    #[must_use]
    pub fn with_init_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.init_params.insert(name.into(), value.into());
        self
    }

    /// Returns the application root as configured.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps an in-application path onto the root without touching the disk.
    ///
    /// Returns `None` for paths containing `..` or platform prefixes.
    pub fn map_path(&self, path: &str) -> Option<PathBuf> {
        map_beneath(&self.root, path)
    }
}

fn map_beneath(root: &Path, path: &str) -> Option<PathBuf> {
    let relative = Path::new(path.trim_start_matches('/'));

    let mut mapped = root.to_path_buf();
    for component in relative.components() {
        match component {
            Component::Normal(part) => mapped.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                warn!(http.path = path, "refusing path outside application root");
                return None;
            }
        }
    }
    Some(mapped)
}

#[async_trait]
impl ApplicationResourceProvider for DirectoryContext {
    async fn resolve(&self, path: &str) -> Option<ResourceStream> {
        let mapped = self.map_path(path)?;

        // Symlinks may still lead outside the root
        let root = tokio::fs::canonicalize(&self.root).await.ok()?;
        let canonical = match tokio::fs::canonicalize(&mapped).await {
            Ok(canonical) => canonical,
            Err(_) => {
                debug!(http.path = path, "application resource not found");
                return None;
            }
        };
        if !canonical.starts_with(&root) {
            warn!(http.path = path, "refusing path outside application root");
            return None;
        }

        let metadata = tokio::fs::metadata(&canonical).await.ok()?;
        if !metadata.is_file() {
            debug!(http.path = path, "application resource is not a file");
            return None;
        }

        let file = tokio::fs::File::open(&canonical).await.ok()?;
        Some(Box::pin(file))
    }
}

impl ApplicationContext for DirectoryContext {
    fn init_parameter(&self, name: &str) -> Option<&str> {
        self.init_params.get(name).map(String::as_str)
    }

    fn real_path(&self, path: &str) -> Option<PathBuf> {
        let root = std::fs::canonicalize(&self.root).ok()?;
        map_beneath(&root, path)
    }
}

/// In-memory application resources.
///
/// Keys are in-application paths starting with `/`.
///
/// # Example
///
/// ```rust
/// use tessera_web::MemoryResourceProvider;
///
/// let provider = MemoryResourceProvider::new()
///     .with_resource("/index.html", "<h1>shop</h1>")
///     .with_resource("/WEB-INF/app.toml", "port = 8080");
///
/// assert_eq!(provider.len(), 2);
/// assert!(provider.contains("/index.html"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryResourceProvider {
    resources: HashMap<String, Bytes>,
}

impl MemoryResourceProvider {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resource, replacing any existing one at `path`.
    #[must_use]
    pub fn with_resource(mut self, path: impl Into<String>, content: impl Into<Bytes>) -> Self {
        self.insert(path, content);
        self
    }

    /// Adds a resource, returning the one it replaced.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<Bytes>) -> Option<Bytes> {
        self.resources.insert(path.into(), content.into())
    }

    /// Whether a resource exists at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.resources.contains_key(path)
    }

    /// Number of resources.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the provider holds no resources.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[async_trait]
impl ApplicationResourceProvider for MemoryResourceProvider {
    async fn resolve(&self, path: &str) -> Option<ResourceStream> {
        let content = self.resources.get(path)?.clone();
        Some(Box::pin(Cursor::new(content)))
    }
}
