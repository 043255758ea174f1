#![allow(dead_code)]

use mason_router::{ArgumentMap, GraphQlSchema, HandlerRequest, Resolution, ResolverMap};
use serde_json::{json, Value};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

pub const TODO_FIELDS: [&str; 8] = [
    "users",
    "user",
    "tasks",
    "task",
    "createUser",
    "deleteUser",
    "createTask",
    "deleteTask",
];

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn todo_sdl() -> String {
    std::fs::read_to_string(fixture_path("todo.graphql")).expect("read todo fixture")
}

pub fn todo_schema() -> GraphQlSchema {
    GraphQlSchema::parse(&todo_sdl(), "todo.graphql").expect("parse todo fixture")
}

/// Wrap bare root types with the `@mason` directive declaration.
pub fn sdl(body: &str) -> String {
    format!("directive @mason(path: String, method: String) on FIELD_DEFINITION\n{body}")
}

pub mod temp_files {
    use super::*;

    /// Write `content` to a temporary file ending in `.{ext}`.
    ///
    /// The file is removed when the returned handle drops.
    pub fn create_temp_schema(content: &str, ext: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("mason_test_")
            .suffix(&format!(".{ext}"))
            .tempfile()
            .expect("create temp schema");
        file.write_all(content.as_bytes()).expect("write temp schema");
        file.flush().expect("flush temp schema");
        file
    }
}

/// Records every resolver invocation as `(field, args)`.
#[derive(Clone, Default)]
pub struct Spy {
    calls: Arc<Mutex<Vec<(String, ArgumentMap)>>>,
}

impl Spy {
    pub fn record(&self, field: &str, args: &ArgumentMap) {
        self.calls
            .lock()
            .unwrap()
            .push((field.to_string(), args.clone()));
    }

    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<(String, ArgumentMap)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_args(&self) -> Option<Value> {
        self.calls
            .lock()
            .unwrap()
            .last()
            .map(|(_, args)| Value::Object(args.clone()))
    }
}

/// Resolvers that echo `{"field": name, "args": args}` and record each call.
pub fn echo_resolvers(fields: &[&str], spy: &Spy) -> ResolverMap {
    let mut resolvers = ResolverMap::new();
    for field in fields {
        let spy = spy.clone();
        let name = field.to_string();
        resolvers.register(field, move |args: ArgumentMap, _req: &HandlerRequest| {
            spy.record(&name, &args);
            Resolution::immediate(json!({ "field": name, "args": args }))
        });
    }
    resolvers
}
