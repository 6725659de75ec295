//! Request cookies.
//!
//! Browsers may send the same cookie name more than once (different paths
//! or domains). [`Cookies`] keeps every pair in header order and lookups
//! return the first match.

use http::{header, HeaderMap};
use tracing::debug;

/// A single cookie from a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    name: String,
    value: String,
}

impl Cookie {
    /// Create a new cookie.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Get the cookie name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the cookie value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Cookies sent with a request, in header order.
///
/// # Example
///
/// ```rust
/// use http::{header, HeaderMap, HeaderValue};
/// use tessera_web::Cookies;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(header::COOKIE, HeaderValue::from_static("session=abc123; theme=dark; session=old"));
///
/// let cookies = Cookies::from_headers(&headers);
/// assert_eq!(cookies.len(), 3);
/// assert_eq!(cookies.get("session"), Some("abc123"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cookies {
    cookies: Vec<Cookie>,
}

impl Cookies {
    /// Create an empty Cookies instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse cookies from a single `Cookie` header value.
    #[must_use]
    pub fn parse(header_value: &str) -> Self {
        let mut cookies = Self::new();
        cookies.extend_from_header(header_value);
        cookies
    }

    /// Collect cookies from every `Cookie` header in `headers`.
    ///
    /// Header values that are not valid UTF-8 are skipped.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut cookies = Self::new();
        for value in headers.get_all(header::COOKIE) {
            match value.to_str() {
                Ok(value) => cookies.extend_from_header(value),
                Err(_) => debug!("skipping Cookie header with invalid UTF-8"),
            }
        }
        cookies
    }

    fn extend_from_header(&mut self, header_value: &str) {
        for pair in header_value.split(';') {
            if let Some((name, value)) = pair.trim().split_once('=') {
                let name = name.trim();
                if name.is_empty() {
                    continue;
                }
                // Remove surrounding quotes if present
                let value = value.trim().trim_matches('"');
                self.cookies.push(Cookie::new(name, value));
            }
        }
    }

    /// Get the first cookie named `name`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Cookie> {
        find_cookie(&self.cookies, name)
    }

    /// Get the value of the first cookie named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.find(name).map(Cookie::value)
    }

    /// Check if a cookie exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Get an iterator over all cookies.
    pub fn iter(&self) -> impl Iterator<Item = &Cookie> {
        self.cookies.iter()
    }

    /// Get the number of cookies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    /// Check if there are no cookies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

impl AsRef<[Cookie]> for Cookies {
    fn as_ref(&self) -> &[Cookie] {
        &self.cookies
    }
}

impl FromIterator<Cookie> for Cookies {
    fn from_iter<I: IntoIterator<Item = Cookie>>(iter: I) -> Self {
        Self {
            cookies: iter.into_iter().collect(),
        }
    }
}

/// Returns the first cookie named `name`, if any.
///
/// # Example
///
/// ```rust
/// use tessera_web::{find_cookie, Cookie};
///
/// let cookies = [Cookie::new("a", "1"), Cookie::new("b", "2"), Cookie::new("a", "3")];
/// assert_eq!(find_cookie(&cookies, "a").map(Cookie::value), Some("1"));
/// assert!(find_cookie(&cookies, "c").is_none());
/// ```
pub fn find_cookie<'a>(cookies: &'a [Cookie], name: &str) -> Option<&'a Cookie> {
    cookies.iter().find(|cookie| cookie.name == name)
}
