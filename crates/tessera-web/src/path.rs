//! Request path derivation.
//!
//! A request URI is `context_path` + path within the application. The
//! handler that dispatched the request matched some `handler_path` inside
//! it; whatever follows is the path within the handler mapping.
//!
//! ```text
//! /shop/catalog/items/42
//! └─┬─┘└───┬───┘└──┬──┘
//! context  handler  within mapping
//! ```

use http::Request;
use tracing::warn;

/// Paths describing one request.
///
/// # Example
///
/// ```rust
/// use tessera_web::{path_within_application, path_within_handler_mapping, RequestPathContext};
///
/// let ctx = RequestPathContext::new("/shop/catalog/items/42", "/shop", "/catalog");
///
/// assert_eq!(path_within_application(&ctx), "/catalog/items/42");
/// assert_eq!(path_within_handler_mapping(&ctx), "/items/42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestPathContext {
    request_uri: String,
    context_path: String,
    handler_path: String,
}

impl RequestPathContext {
    /// Creates a context from its three paths.
    pub fn new(
        request_uri: impl Into<String>,
        context_path: impl Into<String>,
        handler_path: impl Into<String>,
    ) -> Self {
        Self {
            request_uri: request_uri.into(),
            context_path: context_path.into(),
            handler_path: handler_path.into(),
        }
    }

    /// Creates a context for an incoming request.
    ///
    /// The request URI is the path component of `request.uri()`; query
    /// strings are not part of it.
    pub fn from_request<B>(
        request: &Request<B>,
        context_path: impl Into<String>,
        handler_path: impl Into<String>,
    ) -> Self {
        Self::new(request.uri().path(), context_path, handler_path)
    }

    /// The full request path.
    pub fn request_uri(&self) -> &str {
        &self.request_uri
    }

    /// Application mount prefix, "" for the root application.
    pub fn context_path(&self) -> &str {
        &self.context_path
    }

    /// Part of the request path matched by the handler.
    pub fn handler_path(&self) -> &str {
        &self.handler_path
    }
}

/// Returns the request path with the context path stripped.
///
/// If the context path is not a prefix of the request URI, the URI is
/// returned unchanged and a warning is logged.
pub fn path_within_application(ctx: &RequestPathContext) -> &str {
    match ctx.request_uri.strip_prefix(ctx.context_path.as_str()) {
        Some(rest) => rest,
        None => {
            warn!(
                http.path = %ctx.request_uri,
                context_path = %ctx.context_path,
                "context path is not a prefix of the request URI"
            );
            &ctx.request_uri
        }
    }
}

/// Returns the part of the request URI after the handler path.
///
/// Uses the first occurrence of the handler path. Empty when the handler
/// matched the whole URI. If the handler path does not occur at all, returns
/// "" and logs a warning.
pub fn path_within_handler_mapping(ctx: &RequestPathContext) -> &str {
    match ctx.request_uri.find(ctx.handler_path.as_str()) {
        Some(start) => &ctx.request_uri[start + ctx.handler_path.len()..],
        None => {
            warn!(
                http.path = %ctx.request_uri,
                handler_path = %ctx.handler_path,
                "handler path does not occur in the request URI"
            );
            ""
        }
    }
}

/// Returns everything up to and including the last `/` of `path`.
///
/// Returns `"/"` when `path` is absent, empty, or has no slash.
///
/// ```rust
/// use tessera_web::directory_of;
///
/// assert_eq!(directory_of(Some("/cat/dog/test.html")), "/cat/dog/");
/// assert_eq!(directory_of(None), "/");
/// ```
pub fn directory_of(path: Option<&str>) -> &str {
    match path.and_then(|p| p.rfind('/').map(|idx| &p[..=idx])) {
        Some(directory) => directory,
        None => "/",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_path_within_application() {
        let ctx = RequestPathContext::new("/app/a/b", "/app", "/a");
        assert_eq!(path_within_application(&ctx), "/a/b");
    }

    #[test]
    fn test_path_within_root_application() {
        let ctx = RequestPathContext::new("/a/b", "", "/a");
        assert_eq!(path_within_application(&ctx), "/a/b");
    }

    #[test]
    fn test_path_within_application_not_a_prefix() {
        let ctx = RequestPathContext::new("/other/a", "/app", "/a");
        assert_eq!(path_within_application(&ctx), "/other/a");
    }

    #[test]
    fn test_handler_mapping_prefix_style() {
        let ctx = RequestPathContext::new("/test/a", "", "/test");
        assert_eq!(path_within_handler_mapping(&ctx), "/a");
    }

    #[test]
    fn test_handler_mapping_exact_style() {
        let ctx = RequestPathContext::new("/test", "", "/test");
        assert_eq!(path_within_handler_mapping(&ctx), "");
    }

    #[test]
    fn test_handler_mapping_extension_style() {
        let ctx = RequestPathContext::new("/a.test", "", "/a.test");
        assert_eq!(path_within_handler_mapping(&ctx), "");
    }

    #[test]
    fn test_handler_mapping_with_context_path() {
        let ctx = RequestPathContext::new("/shop/catalog/items", "/shop", "/catalog");
        assert_eq!(path_within_handler_mapping(&ctx), "/items");
    }

    #[test]
    fn test_handler_mapping_first_occurrence() {
        let ctx = RequestPathContext::new("/x/x/y", "", "/x");
        assert_eq!(path_within_handler_mapping(&ctx), "/x/y");
    }

    #[test]
    fn test_handler_mapping_absent() {
        let ctx = RequestPathContext::new("/a/b", "", "/zzz");
        assert_eq!(path_within_handler_mapping(&ctx), "");
    }

    #[test]
    fn test_directory_of() {
        assert_eq!(directory_of(Some("/cat/dog/test.html")), "/cat/dog/");
        assert_eq!(directory_of(Some("/cat/dog/")), "/cat/dog/");
        assert_eq!(directory_of(Some("test.html")), "/");
        assert_eq!(directory_of(Some("")), "/");
        assert_eq!(directory_of(None), "/");
    }

    #[test]
    fn test_from_request_ignores_query() {
        let request = Request::builder()
            .uri("http://shop.example.com/shop/items?page=2")
            .body(())
            .unwrap();

        let ctx = RequestPathContext::from_request(&request, "/shop", "/items");
        assert_eq!(ctx.request_uri(), "/shop/items");
        assert_eq!(ctx.context_path(), "/shop");
        assert_eq!(ctx.handler_path(), "/items");
        assert_eq!(path_within_handler_mapping(&ctx), "");
    }

    fn segment() -> impl Strategy<Value = String> {
        "[a-z0-9._-]{1,8}".prop_map(|s| format!("/{s}"))
    }

    proptest! {
        #[test]
        fn prop_context_then_application_path_roundtrips(
            context in proptest::collection::vec(segment(), 0..3),
            rest in proptest::collection::vec(segment(), 0..4),
        ) {
            let context = context.concat();
            let rest = rest.concat();
            let ctx = RequestPathContext::new(format!("{context}{rest}"), context, "");

            prop_assert_eq!(path_within_application(&ctx), rest.as_str());
        }

        #[test]
        fn prop_handler_mapping_is_suffix(
            handler in segment(),
            rest in proptest::collection::vec(segment(), 0..4),
        ) {
            let rest = rest.concat();
            let uri = format!("{handler}{rest}");
            let ctx = RequestPathContext::new(uri.clone(), "", handler);

            let within = path_within_handler_mapping(&ctx);
            prop_assert!(uri.ends_with(within));
            prop_assert_eq!(within, rest.as_str());
        }

        #[test]
        fn prop_directory_of_is_slash_terminated_prefix(path in "[a-z/]{0,20}") {
            let directory = directory_of(Some(&path));

            prop_assert!(directory.ends_with('/'));
            if path.contains('/') {
                prop_assert!(path.starts_with(directory));
            } else {
                prop_assert_eq!(directory, "/");
            }
        }
    }
}
