//! Status command implementation.

use crate::config::{Config, Environment};
use crate::error::Result;
use crate::output::Formatter;

/// Credential rows shown by the status command.
pub fn status_rows(env: &Environment) -> [(&'static str, bool); 2] {
    [
        ("Reddit API", env.has_reddit_credentials()),
        ("OpenAI API", env.openai_api_key().is_some()),
    ]
}

/// Execute the status command.
pub fn execute_status(env: &Environment, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_status(&status_rows(env))?);

    if formatter.format() == crate::config::OutputFormat::Text {
        println!(
            "{}",
            formatter.info(&format!(
                "Model: {} | Output directory: {}",
                config.generator.model,
                config.generator.output_dir.display()
            ))
        );
    }

    Ok(())
}
