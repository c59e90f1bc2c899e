//! Persona CLI library.
//!
//! Command-line and interactive front end for the persona generator:
//! configuration and credential loading, command execution and output
//! formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::{Config, Environment};
pub use error::{CliError, Result};
pub use output::Formatter;
