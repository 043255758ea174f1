//! # Argument Resolution
//!
//! Builds the argument map handed to a resolver from three inputs: values
//! captured from the URL path, the raw query-string or body object, and the
//! defaults declared in the schema.
//!
//! ## Precedence
//!
//! For every declared argument, in declaration order:
//!
//! 1. A URL-captured value is the base value. `Int` arguments are parsed as
//!    integers; a value that does not parse stays a string.
//! 2. A value supplied by the query/body object overrides it. For non-String
//!    arguments a string value is parsed as JSON (`?where={"name":"x"}`,
//!    `?limit=20`). A string that is not valid JSON is ignored under
//!    [`ArgumentPolicy::Lenient`] and rejected under
//!    [`ArgumentPolicy::Strict`]. String arguments and values that are
//!    already structured are taken as they are.
//! 3. With no value from 1 or 2, the schema default is used. An argument with
//!    neither is left out of the map.
//!
//! Query or body keys that are not declared arguments are dropped.

use crate::error::ArgumentError;
use crate::router::ParamVec;
use crate::runtime_config::ArgumentPolicy;
use crate::spec::{ArgumentDefinition, ArgumentKind};
use serde_json::{Map, Value};
use tracing::debug;

/// Arguments passed to a resolver, keyed by argument name
pub type ArgumentMap = Map<String, Value>;

/// Resolve arguments with the lenient policy. Never fails.
#[must_use]
pub fn resolve_arguments(
    definitions: &[ArgumentDefinition],
    raw: &Map<String, Value>,
    captured: &ParamVec,
) -> ArgumentMap {
    let mut args = ArgumentMap::new();
    for definition in definitions {
        if let Ok(Some(value)) = resolve_one(definition, raw, captured, ArgumentPolicy::Lenient) {
            args.insert(definition.name.clone(), value);
        }
    }
    args
}

/// Resolve arguments under `policy`.
///
/// Only [`ArgumentPolicy::Strict`] can fail, on the first argument whose
/// supplied string is not valid JSON.
pub fn resolve_arguments_with_policy(
    definitions: &[ArgumentDefinition],
    raw: &Map<String, Value>,
    captured: &ParamVec,
    policy: ArgumentPolicy,
) -> Result<ArgumentMap, ArgumentError> {
    let mut args = ArgumentMap::new();
    for definition in definitions {
        if let Some(value) = resolve_one(definition, raw, captured, policy)? {
            args.insert(definition.name.clone(), value);
        }
    }
    Ok(args)
}

fn resolve_one(
    definition: &ArgumentDefinition,
    raw: &Map<String, Value>,
    captured: &ParamVec,
    policy: ArgumentPolicy,
) -> Result<Option<Value>, ArgumentError> {
    let name = definition.name.as_str();

    let mut value = captured
        .iter()
        .rfind(|(k, _)| k.as_ref() == name)
        .map(|(_, v)| coerce_captured(v, &definition.kind));

    match raw.get(name) {
        Some(Value::String(s)) if !definition.kind.is_string() => {
            match serde_json::from_str::<Value>(s) {
                Ok(parsed) => value = Some(parsed),
                Err(e) if policy == ArgumentPolicy::Strict => {
                    return Err(ArgumentError {
                        argument: name.to_string(),
                        message: format!("expected JSON for {} argument ({e})", definition.kind),
                    });
                }
                Err(e) => {
                    debug!(
                        argument = %name,
                        kind = %definition.kind,
                        error = %e,
                        "Argument is not valid JSON, keeping previous value"
                    );
                }
            }
        }
        Some(supplied) => value = Some(supplied.clone()),
        None => {}
    }

    Ok(value.or_else(|| definition.default_value.clone()))
}

fn coerce_captured(raw: &str, kind: &ArgumentKind) -> Value {
    match kind {
        ArgumentKind::Int => raw
            .parse::<i64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::String(raw.to_string())),
        _ => Value::String(raw.to_string()),
    }
}
