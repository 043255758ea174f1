use super::pattern::RoutePattern;
use crate::error::ConfigError;
use crate::spec::RouteMeta;
use http::Method;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Maximum number of captured path parameters before heap allocation.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Captured path parameters, in template order.
///
/// Names are `Arc<str>` shared with the compiled pattern; values are per
/// request.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Result of matching a request against the route table
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// The matched route metadata
    pub route: Arc<RouteMeta>,
    /// Values captured from the path (e.g. `/tasks/:id` → `{"id": "42"}`)
    pub path_params: ParamVec,
    /// Name of the resolver that should process this request
    pub handler_name: String,
    /// Position of the matched entry in the route table
    pub index: usize,
}

impl RouteMatch {
    /// Get a path parameter by name
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Note: This allocates - use get_path_param() in hot paths
    #[must_use]
    pub fn path_params_map(&self) -> HashMap<String, String> {
        self.path_params
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}

/// Ordered, immutable route table.
///
/// Entries are scanned in the order they were compiled, which is schema
/// declaration order. The first entry whose method and pattern both match
/// wins, so an earlier declaration shadows a later overlapping one.
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<(Arc<RouteMeta>, RoutePattern)>,
}

impl Router {
    /// Compile every route's path template.
    ///
    /// Fails on the first template that does not compile.
    pub fn new(routes: Vec<RouteMeta>) -> Result<Self, ConfigError> {
        let routes = routes
            .into_iter()
            .map(|meta| {
                let pattern = RoutePattern::compile(&meta.path_pattern)?;
                Ok((Arc::new(meta), pattern))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        let routes_summary: Vec<String> = routes
            .iter()
            .take(10)
            .map(|(meta, _)| format!("{} {}", meta.method, meta.path_pattern))
            .collect();

        info!(
            routes_count = routes.len(),
            routes_summary = ?routes_summary,
            "Routing table loaded"
        );

        Ok(Self { routes })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Route metadata in match-precedence order
    pub fn routes(&self) -> impl Iterator<Item = &RouteMeta> {
        self.routes.iter().map(|(meta, _)| meta.as_ref())
    }

    /// Compiled patterns in match-precedence order
    pub fn patterns(&self) -> impl Iterator<Item = &RoutePattern> {
        self.routes.iter().map(|(_, pattern)| pattern)
    }

    /// Find the first entry matching `method` and `path`.
    ///
    /// `path` must not include the query string. Entries with a different
    /// method are skipped without evaluating their pattern.
    #[must_use]
    pub fn route(&self, method: Method, path: &str) -> Option<RouteMatch> {
        for (index, (meta, pattern)) in self.routes.iter().enumerate() {
            if meta.method != method {
                continue;
            }
            let Some(path_params) = pattern.captures(path) else {
                continue;
            };

            debug!(
                method = %method,
                path = %path,
                handler_name = %meta.handler_name,
                route_pattern = %meta.path_pattern,
                path_params = ?path_params,
                index,
                "Route matched"
            );

            return Some(RouteMatch {
                route: Arc::clone(meta),
                path_params,
                handler_name: meta.handler_name.clone(),
                index,
            });
        }

        None
    }
}
