use crate::ids::RequestId;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::Method;
use serde_json::{Map, Value};
use tracing::debug;

/// An incoming request as seen by the dispatcher and by resolvers.
#[derive(Debug, Clone)]
pub struct HandlerRequest {
    /// Unique request ID for log correlation
    pub request_id: RequestId,
    pub method: Method,
    /// Request path without the query string
    pub path: String,
    /// Decoded query string; every value is a JSON string
    pub query: Map<String, Value>,
    pub headers: HeaderMap,
    /// Request body parsed as JSON (if present and valid)
    pub body: Option<Value>,
}

/// Parse a raw query string (without the leading `?`).
///
/// Names and values are form-urlencoded decoded. A repeated name keeps its
/// last value.
pub fn parse_query_params(query: &str) -> Map<String, Value> {
    url::form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), Value::String(v.into_owned())))
        .collect()
}

impl HandlerRequest {
    /// Build a request from a method and a path that may carry a query string.
    pub fn new(method: Method, uri: &str) -> Self {
        let (path, query) = match uri.split_once('?') {
            Some((path, query)) => (path, parse_query_params(query)),
            None => (uri, Map::new()),
        };
        Self {
            request_id: RequestId::new(),
            method,
            path: if path.is_empty() { "/".to_string() } else { path.to_string() },
            query,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Convert a request from the hosting server.
    ///
    /// A body that is empty or not valid JSON leaves [`HandlerRequest::body`]
    /// as `None`. An `x-request-id` header holding a ULID is reused as the
    /// request ID.
    pub fn from_http(req: http::Request<Vec<u8>>) -> Self {
        let (parts, raw_body) = req.into_parts();

        let request_id = RequestId::from_header_or_new(
            parts
                .headers
                .get("x-request-id")
                .and_then(|v| v.to_str().ok()),
        );
        let query = parts.uri.query().map(parse_query_params).unwrap_or_default();

        let body = if raw_body.is_empty() {
            None
        } else {
            match serde_json::from_slice::<Value>(&raw_body) {
                Ok(json) => Some(json),
                Err(e) => {
                    debug!(
                        request_id = %request_id,
                        body_size_bytes = raw_body.len(),
                        error = %e,
                        "JSON body parse failed"
                    );
                    None
                }
            }
        };

        debug!(
            request_id = %request_id,
            method = %parts.method,
            path = %parts.uri.path(),
            param_count = query.len(),
            has_body = body.is_some(),
            "HTTP request parsed"
        );

        Self {
            request_id,
            method: parts.method,
            path: parts.uri.path().to_string(),
            query,
            headers: parts.headers,
            body,
        }
    }

    #[must_use]
    pub fn get_query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).and_then(Value::as_str)
    }

    /// Get a header by name (case-insensitive)
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The object arguments are read from.
    ///
    /// GET and HEAD use the query string. Other methods use the JSON body when
    /// it is an object and fall back to the query string otherwise.
    #[must_use]
    pub fn argument_source(&self) -> &Map<String, Value> {
        if self.method != Method::GET && self.method != Method::HEAD {
            if let Some(Value::Object(body)) = &self.body {
                return body;
            }
        }
        &self.query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_query_params() {
        let q = parse_query_params("x=1&y=2&x=3");
        assert_eq!(q.get("x"), Some(&json!("3")));
        assert_eq!(q.get("y"), Some(&json!("2")));
    }

    #[test]
    fn test_query_is_decoded() {
        let req = HandlerRequest::new(Method::GET, "/users?where=%7B%22name%22%3A%22Pranay%22%7D");
        assert_eq!(req.path, "/users");
        assert_eq!(req.get_query_param("where"), Some(r#"{"name":"Pranay"}"#));
    }

    #[test]
    fn test_argument_source_by_method() {
        let get = HandlerRequest::new(Method::GET, "/u?a=1").with_body(json!({"a": 2}));
        assert_eq!(get.argument_source().get("a"), Some(&json!("1")));

        let post = HandlerRequest::new(Method::POST, "/u?a=1").with_body(json!({"a": 2}));
        assert_eq!(post.argument_source().get("a"), Some(&json!(2)));

        let delete = HandlerRequest::new(Method::DELETE, "/u?a=1");
        assert_eq!(delete.argument_source().get("a"), Some(&json!("1")));
    }

    #[test]
    fn test_head_reads_query() {
        let head = HandlerRequest::new(Method::HEAD, "/u?a=1").with_body(json!({"a": 2}));
        assert_eq!(head.argument_source().get("a"), Some(&json!("1")));
    }

    #[test]
    fn test_non_object_body_falls_back_to_query() {
        let post = HandlerRequest::new(Method::POST, "/u?a=1").with_body(json!([{"a": 2}]));
        assert_eq!(post.argument_source().get("a"), Some(&json!("1")));

        let put = HandlerRequest::new(Method::PUT, "/u").with_body(json!("a=2"));
        assert!(put.argument_source().is_empty());
    }

    #[test]
    fn test_from_http() {
        let req = http::Request::builder()
            .method(Method::POST)
            .uri("/api/users?dry=true")
            .header("content-type", "application/json")
            .body(br#"{"user":{"name":"Pranay"}}"#.to_vec())
            .unwrap();
        let parsed = HandlerRequest::from_http(req);
        assert_eq!(parsed.path, "/api/users");
        assert_eq!(parsed.get_query_param("dry"), Some("true"));
        assert_eq!(parsed.body, Some(json!({"user": {"name": "Pranay"}})));
        assert_eq!(parsed.get_header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_from_http_invalid_body() {
        let req = http::Request::builder()
            .method(Method::POST)
            .uri("/users")
            .body(b"{not json".to_vec())
            .unwrap();
        assert_eq!(HandlerRequest::from_http(req).body, None);
    }
}
