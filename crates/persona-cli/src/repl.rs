//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::cli::{Command, FetchArgs, GenerateArgs, UsernameArgs};
use crate::commands;
use crate::config::{config_dir, Config, Environment};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::config::Config as EditorConfig;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

const PROMPT: &str = "persona> ";

/// Run the interactive REPL.
///
/// A failing command prints its error and the loop continues.
pub fn run_repl(env: &Environment, config: &Config, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("Persona REPL - Paste a profile URL or type 'help', 'exit' to quit")
    );
    println!();

    let editor_config = EditorConfig::builder()
        .max_history_size(config.settings.history_size)
        .map_err(|e| CliError::Config(format!("Invalid history size: {}", e)))?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(|e| {
        CliError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to initialize editor: {}", e),
        ))
    })?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(ReplCommand::Command(cmd)) => {
                        if let Err(e) = execute_repl_command(cmd, env, config, formatter) {
                            report_error(&e, formatter);
                        }
                    }
                    Err(e) => {
                        report_error(&e, formatter);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug)]
enum ReplCommand {
    Exit,
    Help,
    Command(Command),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    match parts[0] {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "status" => Ok(ReplCommand::Command(Command::Status)),
        "generate" => parse_generate_command(&parts[1..]),
        "username" => parse_username_command(&parts[1..]),
        "fetch" => parse_fetch_command(&parts[1..]),
        url if url.starts_with("http://") || url.starts_with("https://") => {
            parse_generate_command(&parts)
        }
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            parts[0]
        ))),
    }
}

/// Execute a REPL command.
fn execute_repl_command(cmd: Command, env: &Environment, config: &Config, formatter: &Formatter) -> Result<()> {
    match cmd {
        Command::Generate(args) => commands::execute_generate(args, env, config, formatter),
        Command::Username(args) => commands::execute_username(args, formatter),
        Command::Fetch(args) => commands::execute_fetch(args, env, config, formatter),
        Command::Status => commands::execute_status(env, config, formatter),
        Command::Repl => Err(CliError::InvalidInput("Already in REPL mode".to_string())),
    }
}

fn report_error(error: &CliError, formatter: &Formatter) {
    eprintln!("{}", formatter.error(&error.to_string()));
    if let Some(hint) = error.hint() {
        eprintln!("{}", hint);
    }
}

// Simple command parsers for REPL (minimal argument parsing)

fn parse_generate_command(args: &[&str]) -> Result<ReplCommand> {
    let no_save = args.contains(&"--no-save");
    let url = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .ok_or_else(|| CliError::InvalidInput("Usage: generate <url> [--no-save]".to_string()))?;

    Ok(ReplCommand::Command(Command::Generate(GenerateArgs {
        url: url.to_string(),
        output_dir: None,
        model: None,
        no_save,
    })))
}

fn parse_username_command(args: &[&str]) -> Result<ReplCommand> {
    let url = args
        .first()
        .ok_or_else(|| CliError::InvalidInput("Usage: username <url>".to_string()))?;

    Ok(ReplCommand::Command(Command::Username(UsernameArgs {
        url: url.to_string(),
    })))
}

fn parse_fetch_command(args: &[&str]) -> Result<ReplCommand> {
    let url = args
        .first()
        .ok_or_else(|| CliError::InvalidInput("Usage: fetch <url> [limit]".to_string()))?;
    let limit = match args.get(1) {
        Some(raw) => raw
            .parse()
            .map_err(|_| CliError::InvalidInput(format!("Invalid limit: {}", raw)))?,
        None => 20,
    };

    Ok(ReplCommand::Command(Command::Fetch(FetchArgs {
        url: url.to_string(),
        limit,
    })))
}

fn get_history_path() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <url>                          - Generate a persona (same as generate)");
    println!("  generate <url> [--no-save]     - Generate a persona and save it");
    println!("  username <url>                 - Show the username in a profile URL");
    println!("  fetch <url> [limit]            - List fetched content (default limit: 20)");
    println!("  status                         - Show API credential status");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_and_help() {
        assert!(matches!(parse_repl_command("quit"), Ok(ReplCommand::Exit)));
        assert!(matches!(parse_repl_command("?"), Ok(ReplCommand::Help)));
    }

    #[test]
    fn test_bare_url_generates() {
        match parse_repl_command("https://www.reddit.com/user/kojied/") {
            Ok(ReplCommand::Command(Command::Generate(args))) => {
                assert_eq!(args.url, "https://www.reddit.com/user/kojied/");
                assert!(!args.no_save);
            }
            other => panic!("Expected Generate command, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_no_save() {
        match parse_repl_command("generate --no-save https://reddit.com/u/spez") {
            Ok(ReplCommand::Command(Command::Generate(args))) => {
                assert_eq!(args.url, "https://reddit.com/u/spez");
                assert!(args.no_save);
            }
            other => panic!("Expected Generate command, got {:?}", other),
        }
    }

    #[test]
    fn test_fetch_limit() {
        match parse_repl_command("fetch https://reddit.com/u/spez 5") {
            Ok(ReplCommand::Command(Command::Fetch(args))) => assert_eq!(args.limit, 5),
            other => panic!("Expected Fetch command, got {:?}", other),
        }
        assert!(matches!(
            parse_repl_command("fetch https://reddit.com/u/spez many"),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_missing_arguments() {
        assert!(matches!(parse_repl_command("generate"), Err(CliError::InvalidInput(_))));
        assert!(matches!(parse_repl_command("username"), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_unknown_command() {
        match parse_repl_command("frobnicate") {
            Err(CliError::InvalidInput(msg)) => assert!(msg.contains("frobnicate")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }
}
