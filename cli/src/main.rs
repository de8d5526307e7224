//! CLI entrypoint for gigmatch
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod args;

use anyhow::{Context, Result, bail};
use args::Cli;
use clap::Parser;
use colored::Colorize;
use gigmatch_application::ports::artist_store::ArtistStorePort;
use gigmatch_application::ports::match_logger::MatchLogger;
use gigmatch_application::{MatchArtistsInput, MatchArtistsUseCase, NoMatchLogger};
use gigmatch_domain::{EventCriteria, MatchResult};
use gigmatch_infrastructure::{
    ConfigLoader, HttpArtistStore, InMemoryArtistStore, JsonlMatchLogger, OpenAiCompletionGateway,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    // === Dependency Injection ===
    let store: Arc<dyn ArtistStorePort> = match &cli.seed {
        Some(path) => {
            let seeded = InMemoryArtistStore::from_json_file(path)
                .with_context(|| format!("failed to load seed file {}", path.display()))?;
            info!("Using in-memory store with {} records", seeded.len());
            Arc::new(seeded)
        }
        None => Arc::new(HttpArtistStore::new(config.store.base_url.clone())),
    };

    if config.completion.api_key.is_empty() {
        bail!(
            "No completion API key configured. Set GIGMATCH_COMPLETION__API_KEY \
             or completion.api_key in gigmatch.toml."
        );
    }

    let gateway = Arc::new(OpenAiCompletionGateway::new(
        config.completion.base_url.clone(),
        config.completion.api_key.clone(),
        config.completion.model.clone(),
    ));

    let match_logger: Arc<dyn MatchLogger> = match &config.log.match_log {
        Some(path) => match JsonlMatchLogger::new(path) {
            Some(logger) => Arc::new(logger),
            None => Arc::new(NoMatchLogger),
        },
        None => Arc::new(NoMatchLogger),
    };

    let use_case = MatchArtistsUseCase::new(store, gateway).with_match_logger(match_logger);

    let mut criteria = EventCriteria::new(cli.event_type.clone());
    if let Some(genre) = cli.genre {
        criteria = criteria.with_genre(genre);
    }
    if let Some(date) = cli.date {
        criteria = criteria.with_date(date);
    }
    if let (Some(start), Some(end)) = (cli.start, cli.end) {
        criteria = criteria.with_times(start, end);
    }
    if let Some(budget) = cli.budget {
        criteria = criteria.with_budget(budget);
    }
    if let Some(guests) = cli.guests {
        criteria = criteria.with_guest_count(guests);
    }
    if let Some(details) = cli.details {
        criteria = criteria.with_details(details);
    }

    let result = use_case
        .execute(MatchArtistsInput::new(criteria))
        .await
        .context("ranking could not complete")?;

    print_result(&result);
    Ok(())
}

fn print_result(result: &MatchResult) {
    if result.is_empty() {
        println!("{}", "No matching artists found.".yellow().bold());
        println!("{}", result.reasoning);
        return;
    }

    println!("{}", "Suggested artists:".green().bold());
    for (i, name) in result.suggestions.iter().enumerate() {
        println!("  {}. {}", i + 1, name.bold());
    }
    println!();
    println!("{}", "Why:".cyan().bold());
    println!("{}", result.reasoning);
}
