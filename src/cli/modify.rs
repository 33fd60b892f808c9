use super::args::ModifyArgs;
use super::context::CommandContext;
use anyhow::{Result, bail};
use bearcode_core::{BearAgent, format_chat_error};
use std::path::Path;

/// Handle the modify command. Without `--output` the input file is overwritten.
pub async fn handle_modify_command(ctx: &CommandContext, args: ModifyArgs) -> Result<()> {
    if !args.filepath.exists() {
        bail!("Path '{}' does not exist.", args.filepath.display());
    }

    ctx.header(&format!(
        "🐻 Bear Code - Modifying {}",
        args.filepath.display()
    ));

    let mut agent = ctx.create_agent(args.model)?;
    modify_with(
        ctx,
        &mut agent,
        &args.filepath,
        &args.instruction,
        args.output.as_deref(),
    )
    .await
}

/// Rewrite `path` per `instruction` into `output`, defaulting to `path` itself
pub async fn modify_with(
    ctx: &CommandContext,
    agent: &mut BearAgent,
    path: &Path,
    instruction: &str,
    output: Option<&Path>,
) -> Result<()> {
    let original_code = agent.read_file(path)?;

    let spinner = ctx.spinner("Modifying...");
    let result = agent.try_modify_code(&original_code, instruction).await;
    spinner.finish_and_clear();

    // The input is never touched when the remote call fails.
    let modified_code = result.map_err(|err| anyhow::anyhow!(format_chat_error(&err)))?;

    let output_path = output.unwrap_or(path);
    agent.write_file(output_path, &modified_code)?;
    ctx.success(&format!(
        "✓ Modified code written to {}",
        output_path.display()
    ));

    Ok(())
}
