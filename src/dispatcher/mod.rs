//! # Dispatcher Module
//!
//! Runs the resolver bound to the first route matching an incoming request.
//!
//! ## Request Flow
//!
//! 1. [`Router::route`](crate::router::Router::route) scans the table in
//!    declaration order and returns the first entry matching method and path
//! 2. Arguments are merged from path captures, the query string or JSON body,
//!    and schema defaults (see [`crate::arguments`])
//! 3. The resolver returns a [`Resolution`]; immediate values are answered
//!    at once, deferred ones are awaited
//! 4. Exactly one [`HandlerResponse`](crate::server::HandlerResponse) is
//!    produced
//!
//! ## Registering Resolvers
//!
//! ```rust
//! use mason_router::dispatcher::{Resolution, ResolverMap};
//! use mason_router::server::HandlerRequest;
//! use serde_json::{json, Value};
//!
//! let resolvers = ResolverMap::new()
//!     .with("users", |args, _req: &HandlerRequest| {
//!         Resolution::immediate(json!({ "sort": args.get("sort") }))
//!     })
//!     .with("createUser", |args, _req: &HandlerRequest| {
//!         Resolution::deferred(async move { Ok(Value::Object(args)) })
//!     });
//! assert_eq!(resolvers.len(), 2);
//! ```
//!
//! ## Error Handling
//!
//! - No matching route: 404 `Invalid Endpoint`, no resolver runs
//! - Deferred result fails: 500 `Internal Server Error`; the error is logged
//!   with its full chain and not sent to the client
//!
//! ## Concurrency
//!
//! [`Dispatcher`] is `Clone + Send + Sync`. The route table and resolver map
//! are frozen at construction and shared without locks. There are no
//! timeouts or retries; the awaited resolver future is the only suspension
//! point.

mod core;

pub use self::core::{Dispatcher, Resolution, Resolver, ResolverMap};
