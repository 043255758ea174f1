use clap::Parser;
use mason_router::cli::{run_cli, Cli};
use mason_router::logging::{init_logging, LogConfig};

fn main() -> anyhow::Result<()> {
    // Default to warnings so route listings are not interleaved with load events
    let mut config = LogConfig::from_env();
    if std::env::var("MASON_LOG_LEVEL").is_err() {
        config.log_level = "warn".to_string();
    }
    init_logging(&config)?;

    run_cli(Cli::parse())
}
