use super::args::GenerateArgs;
use super::context::CommandContext;
use anyhow::Result;
use bearcode_core::{BearAgent, format_chat_error};
use std::path::Path;

/// Handle the generate command
pub async fn handle_generate_command(ctx: &CommandContext, args: GenerateArgs) -> Result<()> {
    ctx.header(&format!("🐻 Bear Code - Generating {} code", args.language));

    let mut agent = ctx.create_agent(args.model)?;
    generate_with(
        ctx,
        &mut agent,
        &args.description,
        &args.language,
        args.output.as_deref(),
    )
    .await
}

/// Generate code and write it to `output`, or print it when no output is given
pub async fn generate_with(
    ctx: &CommandContext,
    agent: &mut BearAgent,
    description: &str,
    language: &str,
    output: Option<&Path>,
) -> Result<()> {
    let spinner = ctx.spinner("Generating...");
    let result = agent.try_generate_code(description, language).await;
    spinner.finish_and_clear();

    let code = result.map_err(|err| anyhow::anyhow!(format_chat_error(&err)))?;

    match output {
        Some(output) => {
            agent.write_file(output, &code)?;
            ctx.success(&format!("✓ Code written to {}", output.display()));
        }
        None => ctx.plain_panel("Generated Code", &code),
    }

    Ok(())
}
