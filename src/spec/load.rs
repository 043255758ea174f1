use super::document::SchemaDocument;
use super::graphql::GraphQlSchema;
use super::types::FieldDefinition;
use super::{introspect, SchemaSource};
use crate::error::ConfigError;
use std::path::Path;
use tracing::info;

/// Load a schema file, picking the adapter from the file extension.
///
/// - `.graphql` / `.gql` - GraphQL SDL
/// - `.json` - [`SchemaDocument`] as JSON
/// - `.yaml` / `.yml` - [`SchemaDocument`] as YAML
pub fn load_schema(file_path: impl AsRef<Path>) -> Result<Box<dyn SchemaSource>, ConfigError> {
    let file_path = file_path.as_ref();
    let shown = file_path.display().to_string();
    let extension = file_path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let content = std::fs::read_to_string(file_path)?;
    let parse_error = |message: String| ConfigError::SchemaParse {
        path: shown.clone(),
        message,
    };

    let source: Box<dyn SchemaSource> = match extension.as_str() {
        "graphql" | "gql" => Box::new(GraphQlSchema::parse(&content, &shown)?),
        "json" => Box::new(
            serde_json::from_str::<SchemaDocument>(&content)
                .map_err(|e| parse_error(e.to_string()))?,
        ),
        "yaml" | "yml" => Box::new(
            serde_yaml::from_str::<SchemaDocument>(&content)
                .map_err(|e| parse_error(e.to_string()))?,
        ),
        _ => return Err(ConfigError::UnsupportedFormat(shown.clone())),
    };

    info!(path = %shown, format = %extension, "Schema loaded");
    Ok(source)
}

/// Load a schema file and return its root fields in declaration order.
pub fn load_fields(file_path: impl AsRef<Path>) -> Result<Vec<FieldDefinition>, ConfigError> {
    let source = load_schema(file_path)?;
    introspect(source.as_ref())
}
