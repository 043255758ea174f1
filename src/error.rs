use thiserror::Error;

/// Fatal errors raised while turning a schema into a router.
///
/// All of these surface from the configuration step, before the first
/// request is served.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The schema has no Query or no Mutation root type
    #[error("schema has no {0} root type")]
    MissingRootType(&'static str),

    /// A schema field has no entry in the resolver map
    #[error("no resolver registered for field `{field}`")]
    MissingResolver { field: String },

    /// A path template could not be compiled
    #[error("invalid path template `{template}`: {reason}")]
    InvalidPattern { template: String, reason: String },

    /// A `@mason(method: ...)` value is not an HTTP method token
    #[error("invalid HTTP method `{method}` on field `{field}`")]
    InvalidMethod { field: String, method: String },

    /// The schema source could not be parsed
    #[error("failed to parse schema `{path}`: {message}")]
    SchemaParse { path: String, message: String },

    /// The schema file extension does not map to a known adapter
    #[error("unsupported schema format `{0}` (expected .graphql, .gql, .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A malformed argument value rejected under [`ArgumentPolicy::Strict`].
///
/// [`ArgumentPolicy::Strict`]: crate::runtime_config::ArgumentPolicy::Strict
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{argument}: {message}")]
pub struct ArgumentError {
    pub argument: String,
    pub message: String,
}
