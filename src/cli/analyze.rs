use super::args::AnalyzeArgs;
use super::context::CommandContext;
use anyhow::{Result, bail};
use bearcode_core::{BearAgent, format_chat_error};
use std::path::Path;

/// Handle the analyze command
pub async fn handle_analyze_command(ctx: &CommandContext, args: AnalyzeArgs) -> Result<()> {
    if !args.filepath.exists() {
        bail!("Path '{}' does not exist.", args.filepath.display());
    }

    ctx.header(&format!(
        "🐻 Bear Code - Analyzing {}",
        args.filepath.display()
    ));

    let mut agent = ctx.create_agent(args.model)?;
    analyze_with(ctx, &mut agent, &args.filepath, &args.task).await
}

/// Read and analyze `path`. Read failures are fatal; a failed remote call is reported inline.
pub async fn analyze_with(
    ctx: &CommandContext,
    agent: &mut BearAgent,
    path: &Path,
    task: &str,
) -> Result<()> {
    let code = agent.read_file(path)?;

    let spinner = ctx.spinner("Analyzing...");
    let result = agent.try_analyze_code(&code, task).await;
    spinner.finish_and_clear();

    match result {
        Ok(analysis) => ctx.markdown_panel("Analysis Result", &analysis),
        Err(err) => ctx.error(&format_chat_error(&err)),
    }

    Ok(())
}
