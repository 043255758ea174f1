use super::types::{FieldDefinition, OperationKind, RouteMeta};
use crate::error::ConfigError;
use crate::runtime_config::RouterConfig;
use http::Method;

/// Path template for a field: the directive `path` (with a leading `/`
/// added when missing), otherwise `/<field name>`.
#[must_use]
pub fn resolve_path(field: &FieldDefinition) -> String {
    match field.directive.path.as_deref().map(str::trim) {
        Some(path) if path.starts_with('/') => path.to_string(),
        Some(path) => format!("/{path}"),
        None => format!("/{}", field.name),
    }
}

/// HTTP method for a field: the directive `method` (case-insensitive),
/// otherwise GET for queries and POST for mutations.
pub fn resolve_method(field: &FieldDefinition) -> Result<Method, ConfigError> {
    let Some(raw) = field.directive.method.as_deref() else {
        return Ok(field.kind.default_method());
    };
    let upper = raw.trim().to_ascii_uppercase();
    if upper.is_empty() {
        return Err(ConfigError::InvalidMethod {
            field: field.name.clone(),
            method: raw.to_string(),
        });
    }
    Method::from_bytes(upper.as_bytes()).map_err(|_| ConfigError::InvalidMethod {
        field: field.name.clone(),
        method: raw.to_string(),
    })
}

fn has_id_param(path: &str) -> bool {
    path.split('/').any(|segment| segment == ":id" || segment == ":id?")
}

/// Compile schema fields into ordered route metadata.
///
/// Exactly one entry is produced per field, in field order. With
/// [`RouterConfig::id_routes`] enabled, a Query field that declares an `ID`
/// argument is followed directly by a `GET <path>/:id` entry whose captured
/// `id` is assigned to that argument.
pub fn build_routes(
    fields: &[FieldDefinition],
    config: &RouterConfig,
) -> Result<Vec<RouteMeta>, ConfigError> {
    let mut routes = Vec::with_capacity(fields.len());

    for field in fields {
        let path = format!("{}{}", config.base_path, resolve_path(field));
        let method = resolve_method(field)?;

        let id_route = if config.id_routes && field.kind == OperationKind::Query {
            field
                .id_argument()
                .filter(|_| !has_id_param(&path))
                .map(|id_arg| RouteMeta {
                    method: Method::GET,
                    path_pattern: format!("{}/:id", path.trim_end_matches('/')),
                    handler_name: field.name.clone(),
                    kind: field.kind,
                    arguments: field.arguments.clone(),
                    id_alias: Some(id_arg.name.clone()),
                })
        } else {
            None
        };

        routes.push(RouteMeta {
            method,
            path_pattern: path,
            handler_name: field.name.clone(),
            kind: field.kind,
            arguments: field.arguments.clone(),
            id_alias: None,
        });
        routes.extend(id_route);
    }

    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{ArgumentDefinition, ArgumentKind};

    fn query(name: &str) -> FieldDefinition {
        FieldDefinition::new(name, OperationKind::Query)
    }

    #[test]
    fn test_default_path_and_method() {
        let routes = build_routes(
            &[
                query("users"),
                FieldDefinition::new("createUser", OperationKind::Mutation),
            ],
            &RouterConfig::default(),
        )
        .unwrap();
        assert_eq!(routes[0].path_pattern, "/users");
        assert_eq!(routes[0].method, Method::GET);
        assert_eq!(routes[1].path_pattern, "/createUser");
        assert_eq!(routes[1].method, Method::POST);
    }

    #[test]
    fn test_directive_overrides() {
        let field = FieldDefinition::new("deleteTask", OperationKind::Mutation)
            .with_path("task/:id")
            .with_method("delete");
        assert_eq!(resolve_path(&field), "/task/:id");
        assert_eq!(resolve_method(&field).unwrap(), Method::DELETE);

        let absolute = query("t").with_path("/tasks/:sort");
        assert_eq!(resolve_path(&absolute), "/tasks/:sort");
    }

    #[test]
    fn test_invalid_method() {
        let field = query("x").with_method("GE T");
        assert!(matches!(
            resolve_method(&field),
            Err(ConfigError::InvalidMethod { .. })
        ));
        assert!(resolve_method(&query("y").with_method("  ")).is_err());
    }

    #[test]
    fn test_base_path_prefix() {
        let config = RouterConfig::default().with_base_path("/api");
        let routes = build_routes(&[query("users")], &config).unwrap();
        assert_eq!(routes[0].path_pattern, "/api/users");
    }

    #[test]
    fn test_id_routes_follow_base_entry() {
        let fields = vec![
            query("users").with_argument(ArgumentDefinition::new("userId", ArgumentKind::Id)),
            query("task")
                .with_path("tasks/:id")
                .with_argument(ArgumentDefinition::new("id", ArgumentKind::Id)),
            query("stats"),
        ];

        let without = build_routes(&fields, &RouterConfig::default()).unwrap();
        assert_eq!(without.len(), 3);

        let with = build_routes(&fields, &RouterConfig::default().with_id_routes(true)).unwrap();
        let summary: Vec<_> = with
            .iter()
            .map(|r| (r.path_pattern.as_str(), r.id_alias.as_deref()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("/users", None),
                ("/users/:id", Some("userId")),
                ("/tasks/:id", None),
                ("/stats", None),
            ]
        );
    }
}
