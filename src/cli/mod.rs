//! # CLI Module
//!
//! Command-line tooling for inspecting how a schema compiles into routes.
//!
//! ## Commands
//!
//! ### `routes`
//!
//! Print the compiled route table in match order:
//!
//! ```bash
//! mason routes --schema todo.graphql --base-path /api --id-routes
//! mason routes --schema todo.graphql --json
//! ```
//!
//! ### `fields`
//!
//! Print the introspected Query and Mutation fields with their arguments and
//! `@mason` directives:
//!
//! ```bash
//! mason fields --schema todo.graphql
//! ```
//!
//! ### `lint`
//!
//! Report unreachable routes and misplaced optional segments:
//!
//! ```bash
//! mason lint --schema todo.graphql --fail-on-issues
//! ```
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use mason_router::cli::{Cli, run_cli};
//! use clap::Parser;
//!
//! run_cli(Cli::parse())?;
//! ```

mod commands;


pub use commands::{run_cli, Cli, Commands, RouteSummary};
