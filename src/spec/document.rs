use super::types::{ArgumentDefinition, FieldDefinition, MasonDirective, OperationKind};
use super::SchemaSource;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Schema description for callers that do not have GraphQL SDL at hand.
///
/// ```yaml
/// query:
///   - name: users
///     arguments:
///       - { name: sort, type: Sort, default_value: ASC }
/// mutation:
///   - name: deleteUser
///     arguments: [{ name: id, type: ID }]
///     mason: { path: "users/:id", method: DELETE }
/// ```
///
/// A missing `query` or `mutation` key is a [`ConfigError::MissingRootType`];
/// an empty list is fine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
    #[serde(default)]
    pub query: Option<Vec<DocumentField>>,
    #[serde(default)]
    pub mutation: Option<Vec<DocumentField>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentField {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<ArgumentDefinition>,
    #[serde(default)]
    pub mason: MasonDirective,
}

impl SchemaDocument {
    fn fields(
        fields: Option<&Vec<DocumentField>>,
        kind: OperationKind,
        label: &'static str,
    ) -> Result<Vec<FieldDefinition>, ConfigError> {
        let fields = fields.ok_or(ConfigError::MissingRootType(label))?;
        Ok(fields
            .iter()
            .map(|f| FieldDefinition {
                name: f.name.clone(),
                kind,
                arguments: f.arguments.clone(),
                directive: f.mason.clone(),
            })
            .collect())
    }
}

impl SchemaSource for SchemaDocument {
    fn query_fields(&self) -> Result<Vec<FieldDefinition>, ConfigError> {
        Self::fields(self.query.as_ref(), OperationKind::Query, "Query")
    }

    fn mutation_fields(&self) -> Result<Vec<FieldDefinition>, ConfigError> {
        Self::fields(self.mutation.as_ref(), OperationKind::Mutation, "Mutation")
    }
}
