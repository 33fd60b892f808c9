//! Command-line interface: argument definitions and one handler per subcommand.

pub mod analyze;
pub mod args;
pub mod chat;
pub mod context;
pub mod generate;
pub mod modify;

#[cfg(test)]
mod test_support;

pub use args::{Cli, Commands};
pub use context::CommandContext;

use anyhow::Result;

/// Dispatch a parsed subcommand to its handler
pub async fn run(ctx: &CommandContext, command: Commands) -> Result<()> {
    match command {
        Commands::Analyze(args) => analyze::handle_analyze_command(ctx, args).await,
        Commands::Generate(args) => generate::handle_generate_command(ctx, args).await,
        Commands::Modify(args) => modify::handle_modify_command(ctx, args).await,
        Commands::Chat(args) => chat::handle_chat_command(ctx, args).await,
    }
}
