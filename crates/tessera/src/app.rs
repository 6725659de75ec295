//! Application startup.

use http::Request;
use tessera_config::{ConfigLoader, TesseraConfig};
use tessera_telemetry::{init_logging, LogConfig};
use tessera_web::{
    application_url, publish_web_app_root, ApplicationOrigin, DirectoryContext, Publication,
    RequestPathContext, ResourceError, ResourceLocator, ResourceStream,
};
use tracing::info;

use crate::ApplicationError;

/// A configured web application.
///
/// Owns the application directory, the resource locator and the outcome
/// of publishing the application root.
///
/// # Example
///
/// ```rust
/// use tessera::{Application, TesseraConfig, WebAppConfig};
///
/// let dir = std::env::temp_dir();
/// let mut webapp = WebAppConfig {
///     root_dir: dir,
///     context_path: "/shop".to_string(),
///     ..Default::default()
/// };
/// webapp.init_params.insert("webAppRootKey".to_string(), "doc.facade.root".to_string());
///
/// let app = Application::from_config(TesseraConfig::builder().webapp(webapp).build()).unwrap();
/// assert_eq!(app.context_path(), "/shop");
/// ```
#[derive(Debug)]
pub struct Application {
    config: TesseraConfig,
    context: DirectoryContext,
    locator: ResourceLocator,
    publication: Publication,
}

impl Application {
    /// Loads configuration, initializes logging and builds the application.
    ///
    /// Call once per process: logging can only be initialized once.
    pub fn start(loader: ConfigLoader) -> Result<Self, ApplicationError> {
        let config = loader.load()?;
        init_logging(&LogConfig::from(&config.logging))?;
        Self::from_config(config)
    }

    /// Builds the application from validated configuration.
    ///
    /// Publishes the application root; does not touch logging.
    pub fn from_config(config: TesseraConfig) -> Result<Self, ApplicationError> {
        config.validate()?;

        let context = DirectoryContext::from_config(&config.webapp);
        let locator = ResourceLocator::from_config(&config.resources)?;
        let publication = publish_web_app_root(&context)?;

        info!(
            root_dir = %config.webapp.root_dir.display(),
            context_path = %config.webapp.context_path,
            filesystem_roots = locator.filesystem_roots().len(),
            "application ready"
        );

        Ok(Self {
            config,
            context,
            locator,
            publication,
        })
    }

    /// Configuration the application was built from.
    pub fn config(&self) -> &TesseraConfig {
        &self.config
    }

    /// The application directory.
    pub fn context(&self) -> &DirectoryContext {
        &self.context
    }

    /// The resource locator.
    pub fn locator(&self) -> &ResourceLocator {
        &self.locator
    }

    /// What happened when the application root was published.
    pub fn publication(&self) -> &Publication {
        &self.publication
    }

    /// Mount prefix of the application.
    pub fn context_path(&self) -> &str {
        &self.config.webapp.context_path
    }

    /// Opens a resource, resolving application paths in the application directory.
    pub async fn open_resource(&self, location: &str) -> Result<ResourceStream, ResourceError> {
        self.locator.open(location, &self.context).await
    }

    /// Path context for a request dispatched to the handler at `handler_path`.
    pub fn path_context<B>(
        &self,
        request: &Request<B>,
        handler_path: impl Into<String>,
    ) -> RequestPathContext {
        RequestPathContext::from_request(request, self.context_path(), handler_path)
    }

    /// Absolute URL of the application root as seen by `request`.
    ///
    /// Returns `None` if the request names no host.
    pub fn url_for<B>(&self, request: &Request<B>) -> Option<String> {
        let origin = ApplicationOrigin::from_request(request)?;
        Some(application_url(&origin, self.context_path()))
    }
}
