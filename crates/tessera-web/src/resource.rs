//! Resource location.
//!
//! A location string names one of three things:
//!
//! | Form | Example | Opened by |
//! |------|---------|-----------|
//! | URL | `https://cdn.example.com/prices.csv` | `reqwest` (http/https) or `tokio::fs` (`file:`) |
//! | Application path | `/WEB-INF/app.toml`, `data/prices.csv` | the [`ApplicationResourceProvider`] |
//! | Absolute filesystem path | `/etc/shop/prices.csv` under a configured root, `C:\shop\prices.csv` | `tokio::fs` |
//!
//! The first matching form wins and there is no fallback between forms.
//! The caller owns the returned stream; nothing is cached.

use std::io;
use std::path::{Component, Path, PathBuf};
use std::pin::Pin;
use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use tessera_config::ResourceConfig;
use tokio::fs::File;
use tokio::io::AsyncRead;
use tokio_util::io::StreamReader;
use tracing::debug;
use url::Url;

use crate::error::ResourceError;

/// Readable byte stream returned by resource lookups.
pub type ResourceStream = Pin<Box<dyn AsyncRead + Send>>;

/// Resolves in-application paths to byte streams.
///
/// Paths handed to [`resolve`](Self::resolve) always start with `/`.
/// Returning `None` means the application has no such resource.
#[async_trait]
pub trait ApplicationResourceProvider: Send + Sync {
    /// Opens the resource at `path`, or returns `None` if it does not exist.
    async fn resolve(&self, path: &str) -> Option<ResourceStream>;
}

/// Classified location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location<'a> {
    /// Well-formed absolute URL.
    Url(Url),
    /// In-application path, normalized to start with `/`.
    Application(String),
    /// Absolute path on the host filesystem.
    Filesystem(&'a Path),
}

impl<'a> Location<'a> {
    /// Classifies `location`.
    ///
    /// `filesystem_roots` lists host directories whose absolute paths are
    /// treated as filesystem paths. Any other rooted path belongs to the
    /// application, except platform-prefixed paths (`C:\...`, `\\server\...`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::path::PathBuf;
    /// use tessera_web::Location;
    ///
    /// let roots = [PathBuf::from("/etc/shop")];
    ///
    /// assert!(matches!(Location::classify("https://example.com/a.xml", &roots), Location::Url(_)));
    /// assert_eq!(
    ///     Location::classify("WEB-INF/app.toml", &roots),
    ///     Location::Application("/WEB-INF/app.toml".to_string())
    /// );
    /// assert!(matches!(Location::classify("/etc/shop/prices.csv", &roots), Location::Filesystem(_)));
    /// ```
    pub fn classify(location: &'a str, filesystem_roots: &[PathBuf]) -> Self {
        if let Some(url) = parse_url(location) {
            return Self::Url(url);
        }

        let path = Path::new(location);
        if is_filesystem_path(path, filesystem_roots) {
            return Self::Filesystem(path);
        }

        Self::Application(normalize_application_path(location))
    }

    /// Short branch name used in log fields.
    #[must_use]
    pub fn branch(&self) -> &'static str {
        match self {
            Self::Url(_) => "url",
            Self::Application(_) => "application",
            Self::Filesystem(_) => "filesystem",
        }
    }
}

// A one-letter scheme is a Windows drive letter, not a URL.
fn parse_url(location: &str) -> Option<Url> {
    let url = Url::parse(location).ok()?;
    (url.scheme().len() > 1).then_some(url)
}

fn is_filesystem_path(path: &Path, filesystem_roots: &[PathBuf]) -> bool {
    if !path.is_absolute() {
        return false;
    }
    if path.components().any(|c| c == Component::ParentDir) {
        return false;
    }
    matches!(path.components().next(), Some(Component::Prefix(_)))
        || filesystem_roots.iter().any(|root| path.starts_with(root))
}

fn normalize_application_path(location: &str) -> String {
    if location.starts_with('/') {
        location.to_string()
    } else {
        format!("/{location}")
    }
}

/// Opens resources by location.
///
/// Holds the HTTP client used for URL locations and the set of host
/// directories opened directly from disk. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ResourceLocator {
    client: reqwest::Client,
    filesystem_roots: Vec<PathBuf>,
}

impl Default for ResourceLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceLocator {
    /// Creates a locator with a default HTTP client and no filesystem roots.
    #[must_use]
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Creates a locator using the given HTTP client.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            filesystem_roots: Vec::new(),
        }
    }

    /// Creates a locator from the `[resources]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns the client builder error if the HTTP client cannot be built.
    pub fn from_config(config: &ResourceConfig) -> reqwest::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.http_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            filesystem_roots: config.filesystem_roots.clone(),
        })
    }

    /// Adds a host directory whose absolute paths are opened from disk.
    #[must_use]
    pub fn with_filesystem_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.filesystem_roots.push(root.into());
        self
    }

    /// Returns the configured filesystem roots.
    #[must_use]
    pub fn filesystem_roots(&self) -> &[PathBuf] {
        &self.filesystem_roots
    }

    /// Classifies `location` against this locator's filesystem roots.
    #[must_use]
    pub fn classify<'a>(&self, location: &'a str) -> Location<'a> {
        Location::classify(location, &self.filesystem_roots)
    }

    /// Opens the resource named by `location`.
    ///
    /// # Errors
    ///
    /// - URL locations: [`ResourceError::Http`], [`ResourceError::FileUrl`]
    ///   or [`ResourceError::UnsupportedUrl`]
    /// - application paths: [`ResourceError::NotFound`] when the provider
    ///   returns `None`
    /// - filesystem paths: [`ResourceError::Filesystem`]
    pub async fn open(
        &self,
        location: &str,
        provider: &dyn ApplicationResourceProvider,
    ) -> Result<ResourceStream, ResourceError> {
        let target = self.classify(location);
        debug!(location, branch = target.branch(), "opening resource");

        match target {
            Location::Url(url) => self.open_url(url).await,
            Location::Application(path) => match provider.resolve(&path).await {
                Some(stream) => Ok(stream),
                None => Err(ResourceError::not_found(location, path)),
            },
            Location::Filesystem(path) => {
                let file = File::open(path)
                    .await
                    .map_err(|source| ResourceError::Filesystem {
                        path: path.to_path_buf(),
                        source,
                    })?;
                Ok(Box::pin(file))
            }
        }
    }

    async fn open_url(&self, url: Url) -> Result<ResourceStream, ResourceError> {
        match url.scheme() {
            "http" | "https" => {
                let response = self
                    .client
                    .get(url.clone())
                    .send()
                    .await
                    .and_then(reqwest::Response::error_for_status)
                    .map_err(|source| ResourceError::Http {
                        url: url.to_string(),
                        source,
                    })?;

                let body = response.bytes_stream().map_err(io::Error::other);
                Ok(Box::pin(StreamReader::new(body)))
            }
            "file" => {
                let path = url.to_file_path().map_err(|()| {
                    ResourceError::unsupported_url(url.as_str(), "file URL does not name a local path")
                })?;
                let file = File::open(&path)
                    .await
                    .map_err(|source| ResourceError::FileUrl {
                        url: url.to_string(),
                        source,
                    })?;
                Ok(Box::pin(file))
            }
            scheme => Err(ResourceError::unsupported_url(
                url.as_str(),
                format!("scheme '{scheme}' is not supported"),
            )),
        }
    }
}

/// Opens `location` with the process-wide default locator.
///
/// The default locator has no filesystem roots, so rooted paths go to
/// `provider`. Build a [`ResourceLocator`] to open host files directly.
///
/// # Example
///
/// ```rust
/// use tessera_web::{open_resource, MemoryResourceProvider};
/// use tokio::io::AsyncReadExt;
///
/// # tokio_test::block_on(async {
/// let provider = MemoryResourceProvider::new().with_resource("/WEB-INF/app.toml", "port = 8080");
///
/// let mut stream = open_resource("WEB-INF/app.toml", &provider).await.unwrap();
/// let mut content = String::new();
/// stream.read_to_string(&mut content).await.unwrap();
/// assert_eq!(content, "port = 8080");
/// # });
/// ```
pub async fn open_resource(
    location: &str,
    provider: &dyn ApplicationResourceProvider,
) -> Result<ResourceStream, ResourceError> {
    default_locator().open(location, provider).await
}

fn default_locator() -> &'static ResourceLocator {
    static DEFAULT: OnceLock<ResourceLocator> = OnceLock::new();
    DEFAULT.get_or_init(ResourceLocator::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResourceErrorKind;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use tokio::io::AsyncReadExt;
    use tracing_subscriber::fmt::MakeWriter;

    /// Log sink shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Provider that records every lookup and serves a fixed body for known paths.
    #[derive(Default)]
    struct RecordingProvider {
        known: Vec<&'static str>,
        calls: Mutex<Vec<String>>,
    }

    impl RecordingProvider {
        fn knowing(known: &[&'static str]) -> Self {
            Self {
                known: known.to_vec(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl ApplicationResourceProvider for RecordingProvider {
        async fn resolve(&self, path: &str) -> Option<ResourceStream> {
            self.calls.lock().push(path.to_string());
            if self.known.iter().any(|known| *known == path) {
                Some(Box::pin(io::Cursor::new(path.as_bytes().to_vec())))
            } else {
                None
            }
        }
    }

    #[test]
    fn test_classify_urls() {
        for location in [
            "http://example.com/foo.xml",
            "https://example.com:8443/a/b?c=d",
            "file:///etc/hosts",
            "ftp://files.example.com/pub",
        ] {
            assert!(
                matches!(Location::classify(location, &[]), Location::Url(_)),
                "{location} should be a URL"
            );
        }
    }

    #[test]
    fn test_classify_drive_letter_is_not_url() {
        let location = Location::classify("C:\\shop\\prices.csv", &[]);
        assert!(!matches!(location, Location::Url(_)));
    }

    #[test]
    fn test_classify_relative_paths_are_application() {
        assert_eq!(
            Location::classify("foo", &[]),
            Location::Application("/foo".to_string())
        );
        assert_eq!(
            Location::classify("WEB-INF/data/file.dat", &[]),
            Location::Application("/WEB-INF/data/file.dat".to_string())
        );
    }

    #[test]
    fn test_classify_rooted_path_without_roots_is_application() {
        assert_eq!(
            Location::classify("/WEB-INF/app.toml", &[]),
            Location::Application("/WEB-INF/app.toml".to_string())
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_classify_path_under_root_is_filesystem() {
        let roots = [PathBuf::from("/etc/shop")];

        assert_eq!(
            Location::classify("/etc/shop/prices.csv", &roots),
            Location::Filesystem(Path::new("/etc/shop/prices.csv"))
        );
        // Component-wise prefix: /etc/shopping is not under /etc/shop
        assert_eq!(
            Location::classify("/etc/shopping/list.txt", &roots),
            Location::Application("/etc/shopping/list.txt".to_string())
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_classify_parent_dir_never_filesystem() {
        let roots = [PathBuf::from("/etc/shop")];
        assert_eq!(
            Location::classify("/etc/shop/../passwd", &roots),
            Location::Application("/etc/shop/../passwd".to_string())
        );
    }

    #[test]
    fn test_branch_names() {
        assert_eq!(Location::classify("https://a.example", &[]).branch(), "url");
        assert_eq!(Location::classify("a", &[]).branch(), "application");
    }

    #[tokio::test]
    async fn test_relative_and_rooted_locations_resolve_identically() {
        let provider = RecordingProvider::knowing(&["/foo"]);
        let locator = ResourceLocator::new();

        let mut first = locator.open("foo", &provider).await.unwrap();
        let mut second = locator.open("/foo", &provider).await.unwrap();

        let mut a = String::new();
        let mut b = String::new();
        first.read_to_string(&mut a).await.unwrap();
        second.read_to_string(&mut b).await.unwrap();

        assert_eq!(a, b);
        assert_eq!(provider.calls(), vec!["/foo".to_string(), "/foo".to_string()]);
    }

    #[tokio::test]
    async fn test_open_logs_location_and_branch() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let provider = RecordingProvider::knowing(&["/catalog.xml"]);
        ResourceLocator::new()
            .open("catalog.xml", &provider)
            .await
            .unwrap();

        let output = logs.contents();
        assert!(output.contains("opening resource"), "{output}");
        assert!(output.contains("location="), "{output}");
        assert!(output.contains("catalog.xml"), "{output}");
        assert!(output.contains("branch="), "{output}");
        assert!(output.contains("application"), "{output}");
    }

    #[tokio::test]
    async fn test_provider_absence_is_not_found() {
        let provider = RecordingProvider::default();

        for location in ["missing.txt", "/missing.txt", "WEB-INF/none"] {
            let err = ResourceLocator::new()
                .open(location, &provider)
                .await
                .err()
                .unwrap();
            assert_eq!(err.kind(), ResourceErrorKind::ResourceNotFound);
            match err {
                ResourceError::NotFound { location: reported, path } => {
                    assert_eq!(reported, location);
                    assert!(path.starts_with('/'));
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[tokio::test]
    async fn test_url_never_consults_provider() {
        let provider = RecordingProvider::knowing(&["/foo"]);

        let err = ResourceLocator::new()
            .open("ftp://files.example.com/foo", &provider)
            .await
            .err()
            .unwrap();

        assert_eq!(err.kind(), ResourceErrorKind::MalformedOrUnreachableUrl);
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_url() {
        let provider = RecordingProvider::default();
        let dir = tempfile::tempdir().unwrap();
        let url = Url::from_file_path(dir.path().join("absent.txt")).unwrap();

        let err = ResourceLocator::new()
            .open(url.as_str(), &provider)
            .await
            .err()
            .unwrap();

        assert!(matches!(err, ResourceError::FileUrl { .. }));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_free_function_uses_provider() {
        let provider = RecordingProvider::knowing(&["/index.html"]);
        let result = open_resource("index.html", &provider).await;

        assert!(result.is_ok());
        assert_eq!(provider.calls(), vec!["/index.html".to_string()]);
    }

    #[test]
    fn test_from_config_copies_roots() {
        let config = ResourceConfig {
            filesystem_roots: vec![PathBuf::from("/etc/shop")],
            http_timeout_secs: Some(5),
        };

        let locator = ResourceLocator::from_config(&config).unwrap();
        assert_eq!(locator.filesystem_roots(), &[PathBuf::from("/etc/shop")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_with_filesystem_root() {
        let locator = ResourceLocator::new().with_filesystem_root("/srv/data");
        assert!(matches!(
            locator.classify("/srv/data/a.bin"),
            Location::Filesystem(_)
        ));
    }
}
