mod common;

use common::{sdl, todo_schema};
use http::Method;
use mason_router::spec::{build_routes, introspect};
use mason_router::{GraphQlSchema, RouteMatch, Router, RouterConfig};

fn todo_router(config: &RouterConfig) -> Router {
    let fields = introspect(&todo_schema()).expect("introspect todo schema");
    Router::new(build_routes(&fields, config).expect("build routes")).expect("compile routes")
}

fn params(m: &RouteMatch) -> Vec<(String, String)> {
    m.path_params
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn assert_route_match(router: &Router, method: Method, path: &str, expected_handler: &str) {
    match router.route(method.clone(), path) {
        Some(m) => {
            println!("✅ {} {} → {}", method, path, m.handler_name);
            assert_eq!(
                m.handler_name, expected_handler,
                "Handler mismatch for {} {}: expected '{}', got '{}'",
                method, path, expected_handler, m.handler_name
            );
        }
        None => {
            println!("❌ {} {} → no match", method, path);
            assert_eq!(
                expected_handler, "<none>",
                "Expected route to match for {} {}",
                method, path
            );
        }
    }
}

#[test]
fn test_todo_routes() {
    let router = todo_router(&RouterConfig::default());
    let cases = [
        (Method::GET, "/users", "users"),
        (Method::GET, "/users/", "users"),
        (Method::GET, "/users/59ed398e", "user"),
        (Method::GET, "/tasks/ASC/0/20", "tasks"),
        (Method::GET, "/tasks/ASC/0", "tasks"),
        (Method::GET, "/tasks/42", "task"),
        (Method::POST, "/users", "createUser"),
        (Method::DELETE, "/users/59ed398e", "deleteUser"),
        (Method::POST, "/tasks", "createTask"),
        (Method::DELETE, "/task/1", "deleteTask"),
        (Method::PUT, "/users", "<none>"),
        (Method::GET, "/tasks", "<none>"),
        (Method::DELETE, "/tasks/1", "<none>"),
        (Method::GET, "/nope", "<none>"),
    ];
    for (method, path, expected) in cases {
        assert_route_match(&router, method, path, expected);
    }
}

#[test]
fn test_captured_values() {
    let router = todo_router(&RouterConfig::default());
    let m = router.route(Method::GET, "/tasks/DESC/10/5").unwrap();
    assert_eq!(
        params(&m),
        vec![
            ("sort".to_string(), "DESC".to_string()),
            ("skip".to_string(), "10".to_string()),
            ("limit".to_string(), "5".to_string()),
        ]
    );
    assert_eq!(m.get_path_param("limit"), Some("5"));
    assert_eq!(m.route.path_pattern, "/tasks/:sort/:skip/:limit?");
}

#[test]
fn test_earlier_declaration_wins_overlap() {
    // `byName` and `byId` compile to equivalent patterns; only the first is reachable
    let schema = GraphQlSchema::parse(
        &sdl(
            r#"
            type Query {
              byName(name: String): String @mason(path: "/things/:name")
              byId(id: ID): String @mason(path: "/things/:id")
            }
            type Mutation { noop: Boolean }
            "#,
        ),
        "overlap.graphql",
    )
    .unwrap();
    let routes = build_routes(&introspect(&schema).unwrap(), &RouterConfig::default()).unwrap();
    let router = Router::new(routes).unwrap();

    for _ in 0..3 {
        let m = router.route(Method::GET, "/things/abc").unwrap();
        assert_eq!(m.handler_name, "byName");
        assert_eq!(m.index, 0);
    }
}

#[test]
fn test_base_path_and_id_routes() {
    let router = todo_router(
        &RouterConfig::default()
            .with_base_path("api")
            .with_id_routes(true),
    );
    assert_route_match(&router, Method::GET, "/api/users", "users");
    assert_route_match(&router, Method::GET, "/users", "<none>");

    // The shortcut is declared before `user`, so it takes the request
    let m = router.route(Method::GET, "/api/users/7").unwrap();
    assert_eq!(m.handler_name, "users");
    assert_eq!(m.route.id_alias.as_deref(), Some("id"));
    assert_eq!(m.get_path_param("id"), Some("7"));
}

#[test]
fn test_router_is_shared_across_threads() {
    let router = std::sync::Arc::new(todo_router(&RouterConfig::default()));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let router = std::sync::Arc::clone(&router);
            std::thread::spawn(move || {
                let path = format!("/users/{i}");
                router.route(Method::GET, &path).map(|m| m.handler_name)
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("user"));
    }
}
