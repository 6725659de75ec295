//! Error types for resource location and application-root publication.
//!
//! [`ResourceError`] carries the underlying cause; [`ResourceErrorKind`]
//! collapses it into the three failure classes callers branch on.

use http::StatusCode;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Failure class of a [`ResourceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceErrorKind {
    /// The location was a URL but could not be opened.
    MalformedOrUnreachableUrl,
    /// The application provider has nothing at the location.
    ResourceNotFound,
    /// An absolute filesystem path could not be opened.
    FilesystemAccess,
}

impl fmt::Display for ResourceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedOrUnreachableUrl => write!(f, "url"),
            Self::ResourceNotFound => write!(f, "not-found"),
            Self::FilesystemAccess => write!(f, "filesystem"),
        }
    }
}

/// Error opening a resource.
///
/// # Example
///
/// ```rust
/// use tessera_web::{ResourceError, ResourceErrorKind};
/// use http::StatusCode;
///
/// let err = ResourceError::not_found("WEB-INF/app.toml", "/WEB-INF/app.toml");
/// assert_eq!(err.kind(), ResourceErrorKind::ResourceNotFound);
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// assert!(err.to_string().contains("/WEB-INF/app.toml"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// HTTP(S) fetch failed: connection error or non-success status.
    #[error("cannot open URL {url}: {source}")]
    Http {
        /// The URL being fetched.
        url: String,
        /// Transport or status error.
        #[source]
        source: reqwest::Error,
    },

    /// `file:` URL could not be opened.
    #[error("cannot open URL {url}: {source}")]
    FileUrl {
        /// The URL being opened.
        url: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// URL parsed but cannot be opened by this locator.
    #[error("unsupported URL {url}: {reason}")]
    UnsupportedUrl {
        /// The URL as given.
        url: String,
        /// Why it cannot be opened.
        reason: String,
    },

    /// The application provider returned nothing.
    #[error("Can't open {path}")]
    NotFound {
        /// Location as supplied by the caller.
        location: String,
        /// Normalized in-application path passed to the provider.
        path: String,
    },

    /// Absolute file could not be opened.
    #[error("cannot open file {}: {source}", .path.display())]
    Filesystem {
        /// Path being opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ResourceError {
    /// Creates a not-found error for an in-application lookup.
    #[must_use]
    pub fn not_found(location: impl Into<String>, path: impl Into<String>) -> Self {
        Self::NotFound {
            location: location.into(),
            path: path.into(),
        }
    }

    /// Creates an error for a URL scheme or form this locator cannot open.
    #[must_use]
    pub fn unsupported_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Returns the failure class.
    #[must_use]
    pub fn kind(&self) -> ResourceErrorKind {
        match self {
            Self::Http { .. } | Self::FileUrl { .. } | Self::UnsupportedUrl { .. } => {
                ResourceErrorKind::MalformedOrUnreachableUrl
            }
            Self::NotFound { .. } => ResourceErrorKind::ResourceNotFound,
            Self::Filesystem { .. } => ResourceErrorKind::FilesystemAccess,
        }
    }

    /// Returns the HTTP status a handler would typically answer with.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ResourceErrorKind::MalformedOrUnreachableUrl => StatusCode::BAD_GATEWAY,
            ResourceErrorKind::ResourceNotFound => StatusCode::NOT_FOUND,
            ResourceErrorKind::FilesystemAccess => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error code suitable for error envelopes.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self.kind() {
            ResourceErrorKind::MalformedOrUnreachableUrl => "RESOURCE_URL_UNREACHABLE",
            ResourceErrorKind::ResourceNotFound => "RESOURCE_NOT_FOUND",
            ResourceErrorKind::FilesystemAccess => "RESOURCE_FILESYSTEM_ERROR",
        }
    }
}

/// Error publishing the application root.
#[derive(Debug, Error)]
pub enum WebError {
    /// The application context cannot map "/" to a directory.
    #[error("application root directory is unavailable")]
    RootUnavailable,

    /// The root directory is not valid UTF-8 and cannot be stored as a property.
    #[error("application root {} is not valid UTF-8", .0.display())]
    NonUtf8Root(PathBuf),
}
