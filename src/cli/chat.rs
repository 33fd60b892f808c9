use super::args::ChatArgs;
use super::context::CommandContext;
use anstream::print as styled_print;
use anyhow::Result;
use bearcode_core::ui::{Styles, paint};
use bearcode_core::{BearAgent, format_chat_error};
use std::io::{self, BufRead, Write};
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

const GOODBYE: &str = "Goodbye! 🐻";

/// What the loop should do with one line of input
#[derive(Debug, PartialEq, Eq)]
enum ChatInput<'a> {
    Exit,
    Skip,
    Clear,
    History,
    Message(&'a str),
}

fn classify_input(line: &str) -> ChatInput<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ChatInput::Skip;
    }
    if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
        return ChatInput::Exit;
    }
    match trimmed {
        "/clear" => ChatInput::Clear,
        "/history" => ChatInput::History,
        _ => ChatInput::Message(line.trim_end_matches(['\r', '\n'])),
    }
}

/// Why the chat loop stopped
#[derive(Debug, PartialEq, Eq)]
pub enum ChatEnd {
    Exit,
    EndOfInput,
    Interrupted,
}

/// Handle the chat command - one request at a time until exit, EOF, or Ctrl-C
pub async fn handle_chat_command(ctx: &CommandContext, args: ChatArgs) -> Result<()> {
    ctx.header("🐻 Bear Code - Interactive Chat");
    ctx.line("Type 'exit' or 'quit' to end the session\n");

    let mut agent = ctx.create_agent(args.model)?;
    let mut input = spawn_stdin_reader();
    let mut interrupts = forward_interrupts();

    let end = run_chat_loop(ctx, &mut agent, &mut input, &mut interrupts).await?;
    tracing::debug!(?end, turns = agent.session().turn_count(), "chat ended");

    ctx.warning(GOODBYE);
    Ok(())
}

/// Read stdin lines on a plain thread so a pending read never holds up shutdown
fn spawn_stdin_reader() -> UnboundedReceiver<io::Result<String>> {
    let (tx, rx) = unbounded_channel();
    std::thread::spawn(move || {
        let mut stdin = io::stdin().lock();
        loop {
            let mut line = String::new();
            match stdin.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {
                    if tx.send(Ok(line)).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    let _ = tx.send(Err(err));
                    break;
                }
            }
        }
    });
    rx
}

fn forward_interrupts() -> UnboundedReceiver<()> {
    let (tx, rx) = unbounded_channel();
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            if tx.send(()).is_err() {
                break;
            }
        }
    });
    rx
}

/// Drive the conversation from `input` until exit, end of input, or an interrupt
pub async fn run_chat_loop(
    ctx: &CommandContext,
    agent: &mut BearAgent,
    input: &mut UnboundedReceiver<io::Result<String>>,
    interrupts: &mut UnboundedReceiver<()>,
) -> Result<ChatEnd> {
    loop {
        styled_print!("{} ", paint(&Styles::prompt(), "You:"));
        io::stdout().flush()?;

        let line = tokio::select! {
            line = input.recv() => line,
            Some(()) = interrupts.recv() => {
                println!();
                return Ok(ChatEnd::Interrupted);
            }
        };

        let Some(line) = line else {
            println!();
            return Ok(ChatEnd::EndOfInput);
        };
        let line = line?;

        match classify_input(&line) {
            ChatInput::Exit => return Ok(ChatEnd::Exit),
            ChatInput::Skip => continue,
            ChatInput::Clear => {
                agent.clear_history();
                ctx.success("History cleared");
            }
            ChatInput::History => {
                ctx.line(&format!(
                    "{} turn(s) in this session",
                    agent.session().turn_count()
                ));
            }
            ChatInput::Message(message) => {
                if !respond(ctx, agent, message, interrupts).await {
                    println!();
                    return Ok(ChatEnd::Interrupted);
                }
            }
        }
    }
}

/// Send one message and print the reply. Returns false when interrupted.
async fn respond(
    ctx: &CommandContext,
    agent: &mut BearAgent,
    message: &str,
    interrupts: &mut UnboundedReceiver<()>,
) -> bool {
    let spinner = ctx.spinner("Thinking...");
    let reply = tokio::select! {
        reply = agent.try_chat(message, None) => reply,
        Some(()) = interrupts.recv() => {
            spinner.finish_and_clear();
            return false;
        }
    };
    spinner.finish_and_clear();

    match reply {
        Ok(reply) => {
            styled_print!("\n{}\n", paint(&Styles::reply_label(), "Bear:"));
            ctx.markdown(&reply);
            println!();
        }
        Err(err) => ctx.error(&format_chat_error(&err)),
    }
    true
}
