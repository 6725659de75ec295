//! Absolute application URLs.

use http::uri::Authority;
use http::{header, Request};

/// Scheme, host and port a request was addressed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationOrigin {
    /// URL scheme, e.g. `https`.
    pub scheme: String,
    /// Host name as sent by the client.
    pub server_name: String,
    /// Port, explicit or the scheme default.
    pub server_port: u16,
}

impl ApplicationOrigin {
    /// Creates an origin.
    pub fn new(scheme: impl Into<String>, server_name: impl Into<String>, server_port: u16) -> Self {
        Self {
            scheme: scheme.into(),
            server_name: server_name.into(),
            server_port,
        }
    }

    /// Derives the origin from a request.
    ///
    /// Uses the URI authority when the request line is absolute, otherwise
    /// the `Host` header. The scheme defaults to `http` and the port to the
    /// scheme default (80, or 443 for `https`). Returns `None` when neither
    /// source names a host.
    ///
    /// # Example
    ///
    /// ```rust
    /// use http::Request;
    /// use tessera_web::ApplicationOrigin;
    ///
    /// let request = Request::builder()
    ///     .uri("/shop/cart")
    ///     .header("host", "shop.example.com:8080")
    ///     .body(())
    ///     .unwrap();
    ///
    /// let origin = ApplicationOrigin::from_request(&request).unwrap();
    /// assert_eq!(origin, ApplicationOrigin::new("http", "shop.example.com", 8080));
    /// ```
    pub fn from_request<B>(request: &Request<B>) -> Option<Self> {
        let scheme = request.uri().scheme_str().unwrap_or("http");

        let authority = match request.uri().authority() {
            Some(authority) => authority.clone(),
            None => request
                .headers()
                .get(header::HOST)?
                .to_str()
                .ok()?
                .parse::<Authority>()
                .ok()?,
        };

        let server_port = authority
            .port_u16()
            .unwrap_or_else(|| default_port(scheme));

        Some(Self::new(scheme, authority.host(), server_port))
    }
}

fn default_port(scheme: &str) -> u16 {
    if scheme.eq_ignore_ascii_case("https") {
        443
    } else {
        80
    }
}

/// Builds the absolute URL of the application root.
///
/// The port is always written out, even when it is the scheme default.
///
/// ```rust
/// use tessera_web::{application_url, ApplicationOrigin};
///
/// let origin = ApplicationOrigin::new("https", "shop.example.com", 443);
/// assert_eq!(application_url(&origin, "/shop"), "https://shop.example.com:443/shop/");
/// ```
pub fn application_url(origin: &ApplicationOrigin, context_path: &str) -> String {
    format!(
        "{}://{}:{}{}/",
        origin.scheme, origin.server_name, origin.server_port, context_path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_url() {
        let origin = ApplicationOrigin::new("http", "localhost", 8080);

        assert_eq!(application_url(&origin, "/app"), "http://localhost:8080/app/");
        assert_eq!(application_url(&origin, ""), "http://localhost:8080/");
    }

    #[test]
    fn test_from_absolute_uri() {
        let request = Request::builder()
            .uri("https://shop.example.com/cart")
            .body(())
            .unwrap();

        let origin = ApplicationOrigin::from_request(&request).unwrap();
        assert_eq!(origin, ApplicationOrigin::new("https", "shop.example.com", 443));
    }

    #[test]
    fn test_from_host_header_default_port() {
        let request = Request::builder()
            .uri("/cart")
            .header(header::HOST, "shop.example.com")
            .body(())
            .unwrap();

        let origin = ApplicationOrigin::from_request(&request).unwrap();
        assert_eq!(origin, ApplicationOrigin::new("http", "shop.example.com", 80));
    }

    #[test]
    fn test_uri_authority_takes_precedence() {
        let request = Request::builder()
            .uri("http://a.example:9000/x")
            .header(header::HOST, "b.example")
            .body(())
            .unwrap();

        let origin = ApplicationOrigin::from_request(&request).unwrap();
        assert_eq!(origin.server_name, "a.example");
        assert_eq!(origin.server_port, 9000);
    }

    #[test]
    fn test_no_host() {
        let request = Request::builder().uri("/cart").body(()).unwrap();
        assert_eq!(ApplicationOrigin::from_request(&request), None);
    }
}
