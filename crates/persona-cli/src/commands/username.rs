//! Username command implementation.

use crate::cli::UsernameArgs;
use crate::commands::resolve_username;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the username command.
pub fn execute_username(args: UsernameArgs, formatter: &Formatter) -> Result<()> {
    let username = resolve_username(&args.url)?;
    println!("{}", formatter.format_username(&username)?);
    Ok(())
}
