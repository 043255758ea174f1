//! # Runtime Configuration Module
//!
//! Environment-driven settings for route compilation and argument handling.
//!
//! ## Environment Variables
//!
//! ### `MASON_BASE_PATH`
//!
//! Prefix prepended to every compiled path, typically the mount point of the
//! router inside a larger server (e.g. `/api`). Default: empty.
//!
//! ### `MASON_ID_ROUTES`
//!
//! When `true`, every Query field with an `ID` argument also gets a
//! `GET <path>/:id` entry placed directly after its base entry.
//! Default: `false`.
//!
//! ### `MASON_ARGUMENT_POLICY`
//!
//! - `lenient` (default) - a query or body value that is not valid JSON for a
//!   non-String argument is ignored, and the URL-captured or default value is
//!   used instead
//! - `strict` - the same situation answers `400 Bad Request` naming the
//!   argument, and the resolver is not called
//!
//! ## Usage
//!
//! ```rust
//! use mason_router::runtime_config::RouterConfig;
//!
//! let config = RouterConfig::from_env();
//! println!("base path: {:?}", config.base_path);
//! ```

use std::env;

/// How malformed JSON in a query or body value is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArgumentPolicy {
    #[default]
    Lenient,
    Strict,
}

impl ArgumentPolicy {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "strict" => ArgumentPolicy::Strict,
            _ => ArgumentPolicy::Lenient,
        }
    }
}

/// Route compilation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouterConfig {
    /// Prefix for every compiled path (no trailing slash)
    pub base_path: String,
    /// Add `/:id` shortcut routes for Query fields with an `ID` argument
    pub id_routes: bool,
    pub argument_policy: ArgumentPolicy,
}

impl RouterConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_path: normalize_base_path(&env::var("MASON_BASE_PATH").unwrap_or_default()),
            id_routes: env::var("MASON_ID_ROUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(false),
            argument_policy: ArgumentPolicy::parse(
                &env::var("MASON_ARGUMENT_POLICY").unwrap_or_else(|_| "lenient".to_string()),
            ),
        }
    }

    #[must_use]
    pub fn with_base_path(mut self, base_path: &str) -> Self {
        self.base_path = normalize_base_path(base_path);
        self
    }

    #[must_use]
    pub fn with_id_routes(mut self, enabled: bool) -> Self {
        self.id_routes = enabled;
        self
    }

    #[must_use]
    pub fn with_argument_policy(mut self, policy: ArgumentPolicy) -> Self {
        self.argument_policy = policy;
        self
    }
}

/// `"api/"` -> `"/api"`, `"/"` -> `""`
fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_path() {
        assert_eq!(normalize_base_path(""), "");
        assert_eq!(normalize_base_path("/"), "");
        assert_eq!(normalize_base_path("api/"), "/api");
        assert_eq!(normalize_base_path("/api/v1"), "/api/v1");
    }

    #[test]
    fn test_argument_policy_parse() {
        assert_eq!(ArgumentPolicy::parse("STRICT"), ArgumentPolicy::Strict);
        assert_eq!(ArgumentPolicy::parse("lenient"), ArgumentPolicy::Lenient);
        assert_eq!(ArgumentPolicy::parse("whatever"), ArgumentPolicy::Lenient);
    }
}
