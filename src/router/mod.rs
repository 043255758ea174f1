//! # Router Module
//!
//! Path template compilation and first-match route lookup.
//!
//! ## Overview
//!
//! [`RoutePattern`] compiles a template such as `/tasks/:sort/:skip/:limit?`
//! into a case-insensitive regex plus its ordered parameter names.
//! [`Router`] holds the compiled entries in schema declaration order and
//! answers [`Router::route`] with the first entry whose method and pattern
//! match.
//!
//! ## Example
//!
//! ```rust,ignore
//! use http::Method;
//!
//! if let Some(m) = router.route(Method::GET, "/tasks/ASC/0/20") {
//!     println!("Resolver: {}", m.handler_name);
//!     println!("limit: {:?}", m.get_path_param("limit"));
//! }
//! ```
//!
//! ## Precedence
//!
//! The table is never sorted. When `/tasks/:id` is declared before
//! `/tasks/:sort`, a GET to `/tasks/ASC` reaches the `/tasks/:id` resolver.
//! Use [`crate::linter`] to find entries that can never match.

mod core;
mod pattern;

pub use self::core::{ParamVec, RouteMatch, Router, MAX_INLINE_PARAMS};
pub use pattern::RoutePattern;
