mod client;

use anyhow::Context;
use clap::{Parser, Subcommand};

use omnirepute_core::{DataSource, ReputationReport};

use crate::client::{ApiClient, DEFAULT_API_URL};

#[derive(Debug, Parser)]
#[command(name = "omnirepute-cli")]
#[command(about = "OmniRepute command line client")]
struct Cli {
    /// Base URL of the analysis backend.
    #[arg(long, env = "OMNIREPUTE_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Request a reputation analysis for a brand.
    Analyze {
        /// Brand name to analyze.
        #[arg(long)]
        brand: String,
        /// Mention source filter: all, reddit, gdelt, twitter, youtube.
        #[arg(long, default_value = "all")]
        source: String,
    },
    /// Check whether the backend is up.
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    tracing::debug!(api_url = %cli.api_url, "using analysis backend");
    let client = ApiClient::new(&cli.api_url)?;

    match cli.command {
        Commands::Analyze { brand, source } => {
            let source = DataSource::parse(&source).with_context(|| {
                format!(
                    "unknown source '{source}'; expected one of: {}",
                    DataSource::ALLOWED.join(", ")
                )
            })?;
            let report = client.request_analysis(&brand, source).await?;
            print_report(&brand, source, &report);
        }
        Commands::Health => {
            let health = client.health().await?;
            println!(
                "{} is {} (as of {})",
                health.service, health.status, health.timestamp
            );
        }
    }

    Ok(())
}

fn print_report(brand: &str, source: DataSource, report: &ReputationReport) {
    println!("Reputation report for {brand} (source: {source})");
    println!(
        "\nScore: {}/100\n{}",
        report.reputation_score, report.score_rationale
    );

    println!("\nKey insights:");
    for insight in &report.key_insights {
        println!("  - {insight}");
    }

    println!("\nImprovement strategies:");
    for strategy in &report.improvement_strategies {
        println!("  - {}: {}", strategy.title, strategy.description);
    }

    println!("\nWhat users love:");
    for theme in &report.what_users_love {
        println!("  - {theme}");
    }

    println!("\nWhat users hate:");
    for theme in &report.what_users_hate {
        println!("  - {theme}");
    }

    println!("\nSuggested complaint responses:");
    for item in &report.complaint_responses {
        println!("  - \"{}\" -> {}", item.complaint, item.suggested_response);
    }
}
