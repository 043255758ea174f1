use http::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which root type a field was declared on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    /// Method used when the field carries no `@mason(method: ...)` override
    #[must_use]
    pub fn default_method(self) -> Method {
        match self {
            OperationKind::Query => Method::GET,
            OperationKind::Mutation => Method::POST,
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationKind::Query => write!(f, "Query"),
            OperationKind::Mutation => write!(f, "Mutation"),
        }
    }
}

/// Declared kind of a field argument, as far as coercion cares.
///
/// Non-null wrappers are ignored: `Int!` is [`ArgumentKind::Int`]. Lists,
/// input objects, enums and custom scalars are [`ArgumentKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    String,
    Int,
    Float,
    Boolean,
    Id,
    Other(String),
}

impl ArgumentKind {
    /// Classify a GraphQL type reference such as `Int`, `ID!` or `[Task]`.
    #[must_use]
    pub fn from_type_name(ty: &str) -> Self {
        let ty = ty.trim();
        let named = ty.strip_suffix('!').unwrap_or(ty);
        match named {
            "String" => ArgumentKind::String,
            "Int" => ArgumentKind::Int,
            "Float" => ArgumentKind::Float,
            "Boolean" => ArgumentKind::Boolean,
            "ID" => ArgumentKind::Id,
            other => ArgumentKind::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, ArgumentKind::String)
    }
}

impl std::fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgumentKind::String => write!(f, "String"),
            ArgumentKind::Int => write!(f, "Int"),
            ArgumentKind::Float => write!(f, "Float"),
            ArgumentKind::Boolean => write!(f, "Boolean"),
            ArgumentKind::Id => write!(f, "ID"),
            ArgumentKind::Other(name) => write!(f, "{name}"),
        }
    }
}

impl Serialize for ArgumentKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ArgumentKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ArgumentKind::from_type_name(&s))
    }
}

/// Typed contents of a `@mason(path: "...", method: "...")` directive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasonDirective {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ArgumentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
}

impl ArgumentDefinition {
    pub fn new(name: impl Into<String>, kind: ArgumentKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default_value: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }
}

/// One root field of the schema: a query or mutation operation.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    pub name: String,
    pub kind: OperationKind,
    pub arguments: Vec<ArgumentDefinition>,
    pub directive: MasonDirective,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, kind: OperationKind) -> Self {
        Self {
            name: name.into(),
            kind,
            arguments: Vec::new(),
            directive: MasonDirective::default(),
        }
    }

    #[must_use]
    pub fn with_argument(mut self, argument: ArgumentDefinition) -> Self {
        self.arguments.push(argument);
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.directive.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.directive.method = Some(method.into());
        self
    }

    /// First argument declared as `ID`, used by the `/:id` shortcut routes
    #[must_use]
    pub fn id_argument(&self) -> Option<&ArgumentDefinition> {
        self.arguments.iter().find(|a| a.kind == ArgumentKind::Id)
    }
}

/// Compiled route metadata for one entry of the route table.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMeta {
    pub method: Method,
    /// Full path template, base path included (e.g. `/api/tasks/:id`)
    pub path_pattern: String,
    /// Name of the schema field, and of the resolver bound to it
    pub handler_name: String,
    pub kind: OperationKind,
    pub arguments: Vec<ArgumentDefinition>,
    /// Set on `/:id` shortcut entries: captured `id` is assigned to this argument
    pub id_alias: Option<String>,
}
