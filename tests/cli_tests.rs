mod common;

use common::fixture_path;
use common::temp_files::create_temp_schema;
use std::process::{Command, Output};

fn mason(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mason"))
        .args(args)
        .env_remove("MASON_BASE_PATH")
        .env_remove("MASON_ID_ROUTES")
        .output()
        .expect("run mason")
}

#[test]
fn test_cli_routes_json() {
    let schema = fixture_path("todo.graphql");
    let output = mason(&["routes", "--schema", schema.to_str().unwrap(), "--json"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let routes: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    let table: Vec<(String, String)> = routes
        .iter()
        .map(|r| {
            (
                r["method"].as_str().unwrap().to_string(),
                r["path"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(table.len(), 8);
    assert_eq!(table[2], ("GET".to_string(), "/tasks/:sort/:skip/:limit?".to_string()));
    assert_eq!(table[7], ("DELETE".to_string(), "/task/:id".to_string()));
}

#[test]
fn test_cli_base_path_from_env() {
    let schema = fixture_path("todo.yaml");
    let output = Command::new(env!("CARGO_BIN_EXE_mason"))
        .args(["routes", "--schema", schema.to_str().unwrap()])
        .env("MASON_BASE_PATH", "/v1")
        .output()
        .expect("run mason");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.lines().all(|l| l.contains(" /v1/")));
}

#[test]
fn test_cli_lint_fails_on_shadowed_route() {
    let file = create_temp_schema(
        r#"
directive @mason(path: String, method: String) on FIELD_DEFINITION
type Query {
  user(id: ID): String @mason(path: "/users/:id")
  userByName(name: String): String @mason(path: "/Users/:name")
}
type Mutation { noop: Boolean }
"#,
        "graphql",
    );
    let path = file.path().to_str().unwrap();

    let output = mason(&["lint", "--schema", path]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("userByName"));

    let output = mason(&["lint", "--schema", path, "--fail-on-issues"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("1 route issue(s) found"));
}

#[test]
fn test_cli_reports_missing_root() {
    let file = create_temp_schema("type Query { a: Int }", "graphql");
    let output = mason(&["fields", "--schema", file.path().to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Mutation"));
}
