//! Generate command implementation.

use crate::cli::GenerateArgs;
use crate::commands::{connect_reddit, resolve_username};
use crate::config::{Config, Environment, OPENAI_API_KEY_VAR};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use persona_generator::{ContentFetcher, GeneratorConfig, PersonaRequester, PersonaWriter, Pipeline, PipelineOutcome};
use persona_llm::OpenAiProvider;
use tracing::info;

/// Generator settings with the command-line overrides applied.
pub fn effective_config(args: &GenerateArgs, config: &Config) -> Result<GeneratorConfig> {
    let mut generator = config.generator.clone();

    if let Some(dir) = &args.output_dir {
        generator.output_dir = dir.clone();
    }
    if let Some(model) = &args.model {
        generator.model = model.clone();
    }

    generator.validate()?;
    Ok(generator)
}

/// Execute the generate command.
pub fn execute_generate(
    args: GenerateArgs,
    env: &Environment,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    // Reject bad input before any network activity
    let username = resolve_username(&args.url)?;
    let generator = effective_config(&args, config)?;

    if env.openai_api_key().is_none() {
        eprintln!(
            "{}",
            formatter.warning(&format!("{} not set; persona generation will fail", OPENAI_API_KEY_VAR))
        );
    }

    let client = connect_reddit(env)?;
    let llm = OpenAiProvider::new(env.openai_api_key().map(str::to_string))?;

    if formatter.format() == crate::config::OutputFormat::Text {
        eprintln!("{}", formatter.info(&format!("Analyzing profile for u/{}...", username)));
    }

    let pipeline = Pipeline::new(
        ContentFetcher::new(client, generator.clone()),
        PersonaRequester::new(llm, generator.clone()),
        PersonaWriter::new(&generator.output_dir),
    );

    let outcome = pipeline.run_with(&username, !args.no_save)?;
    info!("{}", outcome.summary());

    match outcome {
        PipelineOutcome::NoContent { .. } => {
            println!("{}", formatter.warning(&outcome.summary()));
            Ok(())
        }
        PipelineOutcome::Failed { detail, .. } => Err(CliError::Generation(detail)),
        PipelineOutcome::Generated { .. } | PipelineOutcome::Saved { .. } => {
            println!("{}", formatter.format_outcome(&outcome)?);
            Ok(())
        }
    }
}
