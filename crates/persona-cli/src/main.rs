//! Persona CLI - Generate user personas from public Reddit activity.

use clap::Parser;
use persona_cli::commands;
use persona_cli::repl;
use persona_cli::{Cli, Command, Config, Environment, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    // A missing .env file is fine; real environment variables still apply
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        if let Some(hint) = e.hint() {
            eprintln!("\n{}", hint);
        }
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> persona_cli::Result<()> {
    // Load or create config
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => load_default_config()?,
    };
    config.validate()?;

    let env = Environment::from_env();

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        None | Some(Command::Repl) => repl::run_repl(&env, &config, &formatter),
        Some(Command::Generate(args)) => commands::execute_generate(args, &env, &config, &formatter),
        Some(Command::Username(args)) => commands::execute_username(args, &formatter),
        Some(Command::Fetch(args)) => commands::execute_fetch(args, &env, &config, &formatter),
        Some(Command::Status) => commands::execute_status(&env, &config, &formatter),
    }
}

fn load_default_config() -> persona_cli::Result<Config> {
    let path = Config::path()?;
    if path.exists() {
        return Config::load_from(&path);
    }

    let config = Config::default();
    if let Err(e) = config.save_to(&path) {
        tracing::debug!("Could not write default config to {}: {}", path.display(), e);
    }
    Ok(config)
}
