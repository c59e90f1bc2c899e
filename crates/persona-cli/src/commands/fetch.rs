//! Fetch command implementation.

use crate::cli::FetchArgs;
use crate::commands::{connect_reddit, resolve_username};
use crate::config::{Config, Environment};
use crate::error::Result;
use crate::output::Formatter;
use persona_generator::ContentFetcher;

/// Execute the fetch command.
pub fn execute_fetch(
    args: FetchArgs,
    env: &Environment,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let username = resolve_username(&args.url)?;
    let client = connect_reddit(env)?;

    let fetcher = ContentFetcher::new(client, config.generator.clone());
    let mut items = fetcher.fetch_content(&username);
    let total = items.len();
    items.truncate(args.limit);

    println!("{}", formatter.format_content(&items)?);
    if formatter.format() == crate::config::OutputFormat::Text {
        println!(
            "{}",
            formatter.info(&format!("Showing {} of {} items for u/{}", items.len(), total, username))
        );
    }

    Ok(())
}
