//! Request and response types exchanged with the hosting HTTP server.
//!
//! The crate does not run a server. [`HandlerRequest::from_http`] and
//! [`HandlerResponse::into_http`] convert to and from the `http` crate types
//! so any server that speaks `http::Request`/`http::Response` can host the
//! dispatcher.

pub mod request;
pub mod response;

pub use request::{parse_query_params, HandlerRequest};
pub use response::{HandlerResponse, ResponseBody};
