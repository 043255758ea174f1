use crate::linter::lint_routes;
use crate::router::Router;
use crate::runtime_config::RouterConfig;
use crate::spec::{build_routes, load_fields, FieldDefinition, RouteMeta};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Command-line interface for mason-router
#[derive(Parser)]
#[command(name = "mason")]
#[command(about = "Inspect the REST routes compiled from a GraphQL schema", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the compiled route table in match order
    Routes {
        /// Schema file (.graphql, .gql, .json, .yaml or .yml)
        #[arg(short, long)]
        schema: PathBuf,

        /// Prefix prepended to every route
        #[arg(long, env = "MASON_BASE_PATH", default_value = "")]
        base_path: String,

        /// Add `/:id` shortcut routes for queries with an ID argument
        #[arg(long, env = "MASON_ID_ROUTES", default_value_t = false)]
        id_routes: bool,

        /// Print JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the Query and Mutation fields read from a schema
    Fields {
        #[arg(short, long)]
        schema: PathBuf,
    },
    /// Check the route table for unreachable or malformed entries
    Lint {
        #[arg(short, long)]
        schema: PathBuf,

        /// Exit with an error when any issue is found
        #[arg(long, default_value_t = false)]
        fail_on_issues: bool,
    },
}

/// One row of `mason routes --json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub method: String,
    pub path: String,
    pub handler: String,
    pub kind: String,
    pub arguments: Vec<String>,
}

impl From<&RouteMeta> for RouteSummary {
    fn from(route: &RouteMeta) -> Self {
        Self {
            method: route.method.to_string(),
            path: route.path_pattern.clone(),
            handler: route.handler_name.clone(),
            kind: route.kind.to_string(),
            arguments: route.arguments.iter().map(|a| a.name.clone()).collect(),
        }
    }
}

/// Run a parsed command, writing its report to stdout.
pub fn run_cli(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli.command, &mut out)
}

pub(crate) fn execute<W: Write>(command: &Commands, out: &mut W) -> Result<()> {
    match command {
        Commands::Routes {
            schema,
            base_path,
            id_routes,
            json,
        } => {
            let config = RouterConfig::default()
                .with_base_path(base_path)
                .with_id_routes(*id_routes);
            let routes = compile(schema, &config)?;

            if *json {
                let summaries: Vec<RouteSummary> = routes.iter().map(RouteSummary::from).collect();
                serde_json::to_writer_pretty(&mut *out, &summaries)?;
                writeln!(out)?;
            } else {
                for route in &routes {
                    writeln!(
                        out,
                        "{:<7} {:<40} {} ({})",
                        route.method.as_str(),
                        route.path_pattern,
                        route.handler_name,
                        route.kind
                    )?;
                }
            }
            Ok(())
        }
        Commands::Fields { schema } => {
            let fields = load_fields(schema)
                .with_context(|| format!("Failed to load schema {}", schema.display()))?;
            for field in &fields {
                writeln!(out, "{}", describe_field(field))?;
            }
            Ok(())
        }
        Commands::Lint {
            schema,
            fail_on_issues,
        } => {
            let routes = compile(schema, &RouterConfig::default())?;
            let issues = lint_routes(&routes);

            if issues.is_empty() {
                writeln!(out, "✅ {} routes, no issues", routes.len())?;
                return Ok(());
            }
            for issue in &issues {
                writeln!(out, "⚠️  {issue}")?;
            }
            if *fail_on_issues {
                bail!("{} route issue(s) found", issues.len());
            }
            Ok(())
        }
    }
}

/// Load and compile a schema, checking that every template is valid.
fn compile(schema: &Path, config: &RouterConfig) -> Result<Vec<RouteMeta>> {
    let fields = load_fields(schema)
        .with_context(|| format!("Failed to load schema {}", schema.display()))?;
    let routes = build_routes(&fields, config)?;
    Router::new(routes.clone())?;
    Ok(routes)
}

/// `Query tasks(sort: Sort = "ASC", skip: Int) @mason(path: "/tasks/:sort/:skip")`
fn describe_field(field: &FieldDefinition) -> String {
    let arguments: Vec<String> = field
        .arguments
        .iter()
        .map(|a| match &a.default_value {
            Some(default) => format!("{}: {} = {}", a.name, a.kind, default),
            None => format!("{}: {}", a.name, a.kind),
        })
        .collect();

    let mut line = format!("{} {}", field.kind, field.name);
    if !arguments.is_empty() {
        line.push_str(&format!("({})", arguments.join(", ")));
    }

    let mut directive = Vec::new();
    if let Some(path) = &field.directive.path {
        directive.push(format!("path: {path:?}"));
    }
    if let Some(method) = &field.directive.method {
        directive.push(format!("method: {method:?}"));
    }
    if !directive.is_empty() {
        line.push_str(&format!(" @mason({})", directive.join(", ")));
    }
    line
}
