//! CLI argument parsing

use bearcode_core::config::constants::defaults;
use clap::{Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

/// 🐻 Bear Code - AI Coding Agent
///
/// An intelligent coding assistant that can analyze, generate, and modify code.
#[derive(Parser, Debug)]
#[command(name = "bearcode", version)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Disable color output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a code file
    Analyze(AnalyzeArgs),

    /// Generate code from a description
    Generate(GenerateArgs),

    /// Modify code in a file based on instructions
    Modify(ModifyArgs),

    /// Start an interactive chat session with the AI agent
    Chat(ChatArgs),
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze
    #[arg(value_hint = ValueHint::FilePath)]
    pub filepath: PathBuf,

    /// Specific analysis task
    #[arg(short, long, default_value = defaults::DEFAULT_ANALYZE_TASK)]
    pub task: String,

    /// AI model to use (defaults to BEAR_MODEL, then gpt-4)
    #[arg(short, long)]
    pub model: Option<String>,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// What the generated code should do
    pub description: String,

    /// Programming language
    #[arg(short, long, default_value = defaults::DEFAULT_LANGUAGE)]
    pub language: String,

    /// Output file path
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// AI model to use (defaults to BEAR_MODEL, then gpt-4)
    #[arg(short, long)]
    pub model: Option<String>,
}

#[derive(Args, Debug)]
pub struct ModifyArgs {
    /// File to modify
    #[arg(value_hint = ValueHint::FilePath)]
    pub filepath: PathBuf,

    /// What modification to make
    pub instruction: String,

    /// Output file path (default: overwrites input)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// AI model to use (defaults to BEAR_MODEL, then gpt-4)
    #[arg(short, long)]
    pub model: Option<String>,
}

#[derive(Args, Debug)]
pub struct ChatArgs {
    /// AI model to use (defaults to BEAR_MODEL, then gpt-4)
    #[arg(short, long)]
    pub model: Option<String>,
}
