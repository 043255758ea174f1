use super::types::{ArgumentDefinition, ArgumentKind, FieldDefinition, MasonDirective, OperationKind};
use super::SchemaSource;
use crate::error::ConfigError;
use apollo_compiler::ast::{OperationType, Value as AstValue};
use apollo_compiler::schema::FieldDefinition as SchemaField;
use apollo_compiler::Schema;
use serde_json::Value;

/// Name of the field directive carrying route overrides.
pub const MASON_DIRECTIVE: &str = "mason";

/// GraphQL SDL schema parsed with `apollo-compiler`.
///
/// The SDL is parsed but not validated, so `@mason` does not need a
/// `directive` declaration.
#[derive(Debug)]
pub struct GraphQlSchema {
    schema: Schema,
}

impl GraphQlSchema {
    pub fn parse(source: &str, path: &str) -> Result<Self, ConfigError> {
        let schema = Schema::parse(source, path).map_err(|with_errors| ConfigError::SchemaParse {
            path: path.to_string(),
            message: with_errors.errors.to_string(),
        })?;
        Ok(Self { schema })
    }

    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    fn root_fields(&self, kind: OperationKind) -> Result<Vec<FieldDefinition>, ConfigError> {
        let (operation, label) = match kind {
            OperationKind::Query => (OperationType::Query, "Query"),
            OperationKind::Mutation => (OperationType::Mutation, "Mutation"),
        };
        let object = self
            .schema
            .root_operation(operation)
            .and_then(|name| self.schema.get_object(name))
            .ok_or(ConfigError::MissingRootType(label))?;

        Ok(object
            .fields
            .values()
            .map(|field| convert_field(field, kind))
            .collect())
    }
}

impl SchemaSource for GraphQlSchema {
    fn query_fields(&self) -> Result<Vec<FieldDefinition>, ConfigError> {
        self.root_fields(OperationKind::Query)
    }

    fn mutation_fields(&self) -> Result<Vec<FieldDefinition>, ConfigError> {
        self.root_fields(OperationKind::Mutation)
    }
}

fn convert_field(field: &SchemaField, kind: OperationKind) -> FieldDefinition {
    let arguments = field
        .arguments
        .iter()
        .map(|arg| ArgumentDefinition {
            name: arg.name.to_string(),
            kind: ArgumentKind::from_type_name(&arg.ty.to_string()),
            default_value: arg.default_value.as_ref().map(|v| value_to_json(v)),
        })
        .collect();

    FieldDefinition {
        name: field.name.to_string(),
        kind,
        arguments,
        directive: extract_directive(field),
    }
}

/// Read the first `@mason` directive on a field. Non-string arguments are ignored.
fn extract_directive(field: &SchemaField) -> MasonDirective {
    let Some(directive) = field.directives.get(MASON_DIRECTIVE) else {
        return MasonDirective::default();
    };
    let string_arg = |name: &str| {
        directive
            .specified_argument_by_name(name)
            .and_then(|v| v.as_str())
            .map(str::to_string)
    };
    MasonDirective {
        path: string_arg("path"),
        method: string_arg("method"),
    }
}

/// Convert a GraphQL literal (used for argument defaults) to JSON.
/// Enum values become strings.
fn value_to_json(value: &AstValue) -> Value {
    match value {
        AstValue::Null | AstValue::Variable(_) => Value::Null,
        AstValue::Enum(name) => Value::String(name.to_string()),
        AstValue::String(s) => Value::String(s.to_string()),
        AstValue::Boolean(b) => Value::Bool(*b),
        AstValue::Int(i) => {
            let raw = i.as_str();
            raw.parse::<i64>()
                .map(Value::from)
                .or_else(|_| raw.parse::<f64>().map(Value::from))
                .unwrap_or(Value::Null)
        }
        AstValue::Float(f) => f.as_str().parse::<f64>().map(Value::from).unwrap_or(Value::Null),
        AstValue::List(items) => Value::Array(items.iter().map(|v| value_to_json(v)).collect()),
        AstValue::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(name, v)| (name.to_string(), value_to_json(v)))
                .collect(),
        ),
    }
}
