use http::header::{HeaderValue, CONTENT_TYPE};
use http::StatusCode;
use serde_json::Value;

pub const NOT_FOUND_BODY: &str = "Invalid Endpoint";
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// JSON on success, plain text for every error the dispatcher produces.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

/// Response produced by the dispatcher
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl HandlerResponse {
    #[must_use]
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: ResponseBody::Json(body),
        }
    }

    #[must_use]
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: ResponseBody::Text(body.into()),
        }
    }

    /// 404 for a request no route matched
    #[must_use]
    pub fn not_found() -> Self {
        Self::text(404, NOT_FOUND_BODY)
    }

    /// 500 for a failed resolver; the failure itself is never exposed
    #[must_use]
    pub fn internal_error() -> Self {
        Self::text(500, INTERNAL_ERROR_BODY)
    }

    #[must_use]
    pub fn bad_request(message: &str) -> Self {
        Self::text(400, format!("Bad Request: {message}"))
    }

    #[must_use]
    pub fn content_type(&self) -> &'static str {
        match self.body {
            ResponseBody::Json(_) => "application/json",
            ResponseBody::Text(_) => "text/plain; charset=utf-8",
        }
    }

    /// The JSON value, if this is a JSON response
    #[must_use]
    pub fn json_body(&self) -> Option<&Value> {
        match &self.body {
            ResponseBody::Json(v) => Some(v),
            ResponseBody::Text(_) => None,
        }
    }

    /// The text, if this is a plain-text response
    #[must_use]
    pub fn text_body(&self) -> Option<&str> {
        match &self.body {
            ResponseBody::Json(_) => None,
            ResponseBody::Text(s) => Some(s),
        }
    }

    #[must_use]
    pub fn body_bytes(&self) -> Vec<u8> {
        match &self.body {
            ResponseBody::Json(v) => v.to_string().into_bytes(),
            ResponseBody::Text(s) => s.clone().into_bytes(),
        }
    }

    /// Convert to an `http::Response` for the hosting server.
    #[must_use]
    pub fn into_http(self) -> http::Response<Vec<u8>> {
        let content_type = self.content_type();
        let mut res = http::Response::new(self.body_bytes());
        *res.status_mut() =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        res.headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        res
    }
}
