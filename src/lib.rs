//! # mason-router
//!
//! **mason-router** exposes the Query and Mutation fields of a GraphQL schema
//! as REST endpoints. A field opts into a custom route with the `@mason`
//! directive:
//!
//! ```graphql
//! directive @mason(path: String, method: String) on FIELD_DEFINITION
//!
//! type Query {
//!   tasks(sort: Sort = ASC, skip: Int, limit: Int): [Task] @mason(path: "/tasks/:sort/:skip/:limit?")
//!   task(id: ID): Task
//! }
//!
//! type Mutation {
//!   createTask(name: String): Task @mason(path: "/tasks", method: "post")
//! }
//! ```
//!
//! Fields without a directive path are served at `/<field name>`; queries
//! default to `GET` and mutations to `POST`.
//!
//! ## Architecture
//!
//! - **[`spec`]** - Schema adapters and compilation of fields into [`RouteMeta`]
//! - **[`router`]** - Ordered, first-match path matching with named captures
//! - **[`arguments`]** - Merging of captured, supplied and default argument values
//! - **[`dispatcher`]** - Resolver binding and request dispatch
//! - **[`server`]** - Request/response types and `http` crate adapters
//! - **[`linter`]** - Static checks for unreachable or malformed routes
//! - **[`runtime_config`]** - Environment-driven router configuration
//! - **[`logging`]** - `tracing` subscriber setup
//!
//! ### Request Handling Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Host as Hosting server
//!     participant Dispatcher
//!     participant Router
//!     participant Args as arguments
//!     participant Resolver
//!
//!     Host->>Dispatcher: handle_http(request)
//!     Dispatcher->>Router: route(method, path)
//!     alt No Route Match
//!         Dispatcher-->>Host: 404 Invalid Endpoint
//!     end
//!     Router-->>Dispatcher: RouteMatch (handler, captures)
//!     Dispatcher->>Args: resolve_arguments(defs, query/body, captures)
//!     Dispatcher->>Resolver: resolve(args, request)
//!     alt Deferred failed
//!         Dispatcher-->>Host: 500 Internal Server Error
//!     end
//!     Dispatcher-->>Host: 200 JSON
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use mason_router::{build_dispatcher, GraphQlSchema, HandlerRequest, Resolution, ResolverMap, RouterConfig};
//! use http::Method;
//! use serde_json::json;
//!
//! let schema = GraphQlSchema::parse(
//!     r#"
//!     directive @mason(path: String, method: String) on FIELD_DEFINITION
//!     type Query { hello(name: String = "world"): String @mason(path: "/hello/:name?") }
//!     type Mutation { noop: Boolean }
//!     "#,
//!     "hello.graphql",
//! )
//! .unwrap();
//!
//! let resolvers = ResolverMap::new()
//!     .with("hello", |args, _req| json!(format!("hello {}", args["name"].as_str().unwrap_or(""))).into())
//!     .with("noop", |_args, _req| Resolution::immediate(json!(true)));
//!
//! let dispatcher = build_dispatcher(&schema, resolvers, &RouterConfig::default()).unwrap();
//! let request = HandlerRequest::new(Method::GET, "/hello/mason");
//! let response = futures::executor::block_on(dispatcher.dispatch(&request));
//! assert_eq!(response.status, 200);
//! assert_eq!(response.json_body(), Some(&json!("hello mason")));
//! ```
//!
//! ## Runtime Considerations
//!
//! The crate does not own a socket. Host it from any server that can hand
//! over an `http::Request<Vec<u8>>`; see [`Dispatcher::handle_http`].
//! Dispatch is runtime-agnostic: the only future awaited is the one a
//! resolver returns in [`Resolution::Deferred`].

pub mod arguments;
pub mod cli;
pub mod dispatcher;
pub mod error;
pub mod ids;
pub mod linter;
pub mod logging;
pub mod router;
pub mod runtime_config;
pub mod server;
pub mod spec;

pub use arguments::{resolve_arguments, resolve_arguments_with_policy, ArgumentMap};
pub use dispatcher::{Dispatcher, Resolution, Resolver, ResolverMap};
pub use error::{ArgumentError, ConfigError};
pub use linter::{lint_routes, RouteIssue, RouteIssueKind};
pub use router::{RouteMatch, Router};
pub use runtime_config::{ArgumentPolicy, RouterConfig};
pub use server::{HandlerRequest, HandlerResponse};
pub use spec::{
    build_routes, introspect, load_fields, load_schema, ArgumentDefinition, ArgumentKind,
    FieldDefinition, GraphQlSchema, OperationKind, RouteMeta, SchemaDocument, SchemaSource,
};

/// Compile `schema` into a ready [`Dispatcher`].
///
/// Introspects the Query and Mutation root fields, builds the route table,
/// compiles every path template and binds `resolvers`. Any failure here is
/// fatal and is reported before a request can be served.
pub fn build_dispatcher<S: SchemaSource + ?Sized>(
    schema: &S,
    resolvers: ResolverMap,
    config: &RouterConfig,
) -> Result<Dispatcher, ConfigError> {
    let fields = introspect(schema)?;
    let routes = build_routes(&fields, config)?;
    let router = Router::new(routes)?;
    Dispatcher::new(router, resolvers, config.argument_policy)
}
