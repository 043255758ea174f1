//! Static checks over a compiled route table.
//!
//! Routes match first-declared-wins, so a later entry with the same method
//! and an equivalent template can never be reached. The linter reports those
//! entries, and optional segments placed before required ones.

use crate::spec::RouteMeta;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RouteIssueKind {
    /// An earlier entry matches every path this entry matches
    Shadowed,
    /// An optional segment is followed by a required one
    NonTrailingOptional,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteIssue {
    pub kind: RouteIssueKind,
    pub handler_name: String,
    pub message: String,
}

impl fmt::Display for RouteIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}: {}", self.kind, self.handler_name, self.message)
    }
}

/// Template with parameter names erased: `/Tasks/:id` -> `/tasks/:`
fn template_shape(template: &str) -> String {
    let segments: Vec<String> = template
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|segment| match segment.strip_prefix(':') {
            Some(param) if param.ends_with('?') => ":?".to_string(),
            Some(_) => ":".to_string(),
            None => segment.to_lowercase(),
        })
        .collect();
    format!("/{}", segments.join("/"))
}

pub fn lint_routes(routes: &[RouteMeta]) -> Vec<RouteIssue> {
    let mut issues = Vec::new();

    for (i, route) in routes.iter().enumerate() {
        let shape = template_shape(&route.path_pattern);

        if let Some(earlier) = routes[..i]
            .iter()
            .find(|r| r.method == route.method && template_shape(&r.path_pattern) == shape)
        {
            issues.push(RouteIssue {
                kind: RouteIssueKind::Shadowed,
                handler_name: route.handler_name.clone(),
                message: format!(
                    "{} {} is unreachable: {} {} (`{}`) is declared earlier",
                    route.method,
                    route.path_pattern,
                    earlier.method,
                    earlier.path_pattern,
                    earlier.handler_name
                ),
            });
        }

        let mut seen_optional = false;
        for segment in shape.split('/').filter(|s| !s.is_empty()) {
            if segment == ":?" {
                seen_optional = true;
            } else if seen_optional {
                issues.push(RouteIssue {
                    kind: RouteIssueKind::NonTrailingOptional,
                    handler_name: route.handler_name.clone(),
                    message: format!(
                        "{} has an optional segment before a required one",
                        route.path_pattern
                    ),
                });
                break;
            }
        }
    }

    issues
}
