//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Persona - Generate user personas from public Reddit activity.
#[derive(Debug, Parser)]
#[command(name = "persona")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable text (default)
    Text,
    /// JSON format
    Json,
    /// Quiet format (paths and usernames only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a persona for a Reddit profile
    Generate(GenerateArgs),

    /// Extract the username from a profile URL
    Username(UsernameArgs),

    /// List the public content fetched for a profile
    Fetch(FetchArgs),

    /// Show which API credentials are configured
    Status,

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the generate command.
#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Reddit profile URL (e.g., https://www.reddit.com/user/spez/)
    pub url: String,

    /// Directory for the persona file
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Chat completion model
    #[arg(short, long)]
    pub model: Option<String>,

    /// Display the persona without writing a file
    #[arg(long)]
    pub no_save: bool,
}

/// Arguments for the username command.
#[derive(Debug, Parser)]
pub struct UsernameArgs {
    /// Reddit profile URL
    pub url: String,
}

/// Arguments for the fetch command.
#[derive(Debug, Parser)]
pub struct FetchArgs {
    /// Reddit profile URL
    pub url: String,

    /// Maximum number of items to list
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
