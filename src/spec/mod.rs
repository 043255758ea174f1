//! # Spec Module
//!
//! Reads the root fields of a schema and compiles them into route metadata.
//!
//! ## Overview
//!
//! A schema is consumed through the [`SchemaSource`] adapter trait, which
//! yields one [`FieldDefinition`] per Query and Mutation field together with
//! its typed `@mason` directive. Two adapters ship with the crate:
//!
//! - [`GraphQlSchema`] - GraphQL SDL parsed with `apollo-compiler`
//! - [`SchemaDocument`] - a plain JSON/YAML description of the same fields
//!
//! [`build_routes`] then turns the field list into ordered [`RouteMeta`]
//! entries, resolving each field's path template and HTTP method.
//!
//! ## Example
//!
//! ```rust
//! use mason_router::spec::{build_routes, introspect, GraphQlSchema};
//! use mason_router::runtime_config::RouterConfig;
//!
//! let sdl = r#"
//!     directive @mason(path: String, method: String) on FIELD_DEFINITION
//!     type Query { task(id: ID): String @mason(path: "tasks/:id") }
//!     type Mutation { createTask(name: String): String }
//! "#;
//! let schema = GraphQlSchema::parse(sdl, "todo.graphql").unwrap();
//! let fields = introspect(&schema).unwrap();
//! let routes = build_routes(&fields, &RouterConfig::default()).unwrap();
//! assert_eq!(routes[0].path_pattern, "/tasks/:id");
//! assert_eq!(routes[1].path_pattern, "/createTask");
//! ```

mod build;
mod document;
mod graphql;
mod load;
mod types;

pub use build::*;
pub use document::{DocumentField, SchemaDocument};
pub use graphql::{GraphQlSchema, MASON_DIRECTIVE};
pub use load::*;
pub use types::*;

use crate::error::ConfigError;

/// Adapter over a schema representation.
///
/// Implementations return root fields in declaration order and fail with
/// [`ConfigError::MissingRootType`] when the corresponding root type is absent.
pub trait SchemaSource {
    fn query_fields(&self) -> Result<Vec<FieldDefinition>, ConfigError>;
    fn mutation_fields(&self) -> Result<Vec<FieldDefinition>, ConfigError>;
}

/// Collect every root field: Query fields first, then Mutation fields.
pub fn introspect<S: SchemaSource + ?Sized>(source: &S) -> Result<Vec<FieldDefinition>, ConfigError> {
    let mut fields = source.query_fields()?;
    fields.extend(source.mutation_fields()?);
    tracing::debug!(field_count = fields.len(), "Schema introspected");
    Ok(fields)
}
