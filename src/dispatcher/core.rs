use crate::arguments::{resolve_arguments_with_policy, ArgumentMap};
use crate::error::ConfigError;
use crate::router::Router;
use crate::runtime_config::ArgumentPolicy;
use crate::server::{HandlerRequest, HandlerResponse};
use futures::future::BoxFuture;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// What a resolver hands back.
///
/// `Immediate` values are serialized as soon as the resolver returns.
/// `Deferred` work is awaited by the dispatcher; an `Err` becomes a 500.
pub enum Resolution {
    Immediate(Value),
    Deferred(BoxFuture<'static, anyhow::Result<Value>>),
}

impl Resolution {
    pub fn immediate(value: Value) -> Self {
        Resolution::Immediate(value)
    }

    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = anyhow::Result<Value>> + Send + 'static,
    {
        Resolution::Deferred(Box::pin(future))
    }

    /// A deferred result that has already failed
    pub fn failed(err: anyhow::Error) -> Self {
        Resolution::Deferred(Box::pin(futures::future::ready(Err(err))))
    }
}

impl From<Value> for Resolution {
    fn from(value: Value) -> Self {
        Resolution::Immediate(value)
    }
}

impl std::fmt::Debug for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Immediate(v) => f.debug_tuple("Immediate").field(v).finish(),
            Resolution::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// Domain logic bound to one schema field.
pub trait Resolver: Send + Sync {
    fn resolve(&self, args: ArgumentMap, request: &HandlerRequest) -> Resolution;
}

impl<F> Resolver for F
where
    F: Fn(ArgumentMap, &HandlerRequest) -> Resolution + Send + Sync,
{
    fn resolve(&self, args: ArgumentMap, request: &HandlerRequest) -> Resolution {
        self(args, request)
    }
}

/// Resolvers keyed by schema field name.
#[derive(Clone, Default)]
pub struct ResolverMap {
    resolvers: HashMap<String, Arc<dyn Resolver>>,
}

impl ResolverMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a closure for `name`, replacing any previous resolver.
    pub fn register<F>(&mut self, name: &str, resolver: F) -> &mut Self
    where
        F: Fn(ArgumentMap, &HandlerRequest) -> Resolution + Send + Sync + 'static,
    {
        self.insert(name, Arc::new(resolver))
    }

    /// Builder form of [`ResolverMap::register`]
    #[must_use]
    pub fn with<F>(mut self, name: &str, resolver: F) -> Self
    where
        F: Fn(ArgumentMap, &HandlerRequest) -> Resolution + Send + Sync + 'static,
    {
        self.register(name, resolver);
        self
    }

    pub fn insert(&mut self, name: &str, resolver: Arc<dyn Resolver>) -> &mut Self {
        if self.resolvers.insert(name.to_string(), resolver).is_some() {
            warn!(handler_name = %name, "Replaced existing resolver");
        }
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Resolver>> {
        self.resolvers.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.resolvers.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

/// Runtime entry point: matches a request, resolves its arguments and runs
/// the bound resolver.
///
/// Cloning is cheap; the route table and resolvers are shared and never
/// change after construction.
#[derive(Clone)]
pub struct Dispatcher {
    router: Arc<Router>,
    resolvers: Arc<ResolverMap>,
    policy: ArgumentPolicy,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("routes", &self.router.len())
            .field("resolvers", &self.resolvers.len())
            .field("policy", &self.policy)
            .finish()
    }
}

impl Dispatcher {
    /// Bind `resolvers` to the route table.
    ///
    /// Fails with [`ConfigError::MissingResolver`] for the first route, in
    /// table order, whose field has no resolver.
    pub fn new(
        router: Router,
        resolvers: ResolverMap,
        policy: ArgumentPolicy,
    ) -> Result<Self, ConfigError> {
        if let Some(missing) = router.routes().find(|r| !resolvers.contains(&r.handler_name)) {
            return Err(ConfigError::MissingResolver {
                field: missing.handler_name.clone(),
            });
        }

        info!(
            routes_count = router.len(),
            resolver_count = resolvers.len(),
            argument_policy = ?policy,
            "Dispatcher ready"
        );

        Ok(Self {
            router: Arc::new(router),
            resolvers: Arc::new(resolvers),
            policy,
        })
    }

    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Dispatch one request.
    ///
    /// Always produces exactly one response: 200 with the resolver's JSON,
    /// 404 `Invalid Endpoint` when nothing matched, 500 `Internal Server
    /// Error` when a deferred result failed, or 400 under the strict
    /// argument policy.
    pub async fn dispatch(&self, request: &HandlerRequest) -> HandlerResponse {
        let start = Instant::now();

        let Some(route_match) = self.router.route(request.method.clone(), &request.path) else {
            warn!(
                request_id = %request.request_id,
                method = %request.method,
                path = %request.path,
                "No route matched"
            );
            return HandlerResponse::not_found();
        };
        let route = &route_match.route;

        // Dispatcher::new guarantees a resolver for every route
        let Some(resolver) = self.resolvers.get(&route_match.handler_name) else {
            error!(
                request_id = %request.request_id,
                handler_name = %route_match.handler_name,
                "Resolver missing for matched route"
            );
            return HandlerResponse::internal_error();
        };

        let mut args = match resolve_arguments_with_policy(
            &route.arguments,
            request.argument_source(),
            &route_match.path_params,
            self.policy,
        ) {
            Ok(args) => args,
            Err(e) => {
                warn!(
                    request_id = %request.request_id,
                    handler_name = %route_match.handler_name,
                    argument = %e.argument,
                    error = %e.message,
                    "Rejected malformed argument"
                );
                return HandlerResponse::bad_request(&e.to_string());
            }
        };

        if let Some(alias) = &route.id_alias {
            if let Some(id) = route_match.get_path_param("id") {
                args.insert(alias.clone(), Value::String(id.to_string()));
            }
        }

        debug!(
            request_id = %request.request_id,
            handler_name = %route_match.handler_name,
            arguments = ?args,
            "Invoking resolver"
        );

        let response = match resolver.resolve(args, request) {
            Resolution::Immediate(value) => HandlerResponse::json(200, value),
            Resolution::Deferred(pending) => match pending.await {
                Ok(value) => HandlerResponse::json(200, value),
                Err(err) => {
                    error!(
                        request_id = %request.request_id,
                        handler_name = %route_match.handler_name,
                        error = %format!("{err:#}"),
                        "Resolver failed"
                    );
                    HandlerResponse::internal_error()
                }
            },
        };

        info!(
            request_id = %request.request_id,
            method = %request.method,
            path = %request.path,
            handler_name = %route_match.handler_name,
            status = response.status,
            duration_us = start.elapsed().as_micros(),
            "Request dispatched"
        );

        response
    }

    /// Dispatch an `http::Request` from the hosting server.
    pub async fn handle_http(&self, req: http::Request<Vec<u8>>) -> http::Response<Vec<u8>> {
        let request = HandlerRequest::from_http(req);
        self.dispatch(&request).await.into_http()
    }
}
