//! Bear Code CLI entry point

mod cli;

use anyhow::Result;
use bearcode_core::config::load_dotenv;
use clap::Parser;
use cli::{Cli, CommandContext};
use tracing_subscriber::EnvFilter;

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    if args.no_color {
        anstream::ColorChoice::Never.write_global();
        console::set_colors_enabled(false);
    }
    let ctx = CommandContext::new(!args.no_color);

    // Before logging so RUST_LOG from .env takes effect
    let dotenv = load_dotenv();
    if let Err(err) = init_tracing(&args.log_level) {
        ctx.error(&format!("Error: invalid log level '{}': {err}", args.log_level));
        std::process::exit(1);
    }
    dotenv.log();

    if let Err(err) = cli::run(&ctx, args.command).await {
        tracing::debug!(error = ?err, "command failed");
        ctx.error(&format!("Error: {err:#}"));
        std::process::exit(1);
    }
}
