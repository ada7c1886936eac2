//! Momentum CLI binary.
//!
//! Command-line access to the feed generator: run one generation for a
//! topic and write the post bundle and slide images to disk.

use clap::Parser;

mod cli;
mod config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = cli::Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match cli.command {
        cli::Commands::Run {
            topic,
            slides,
            style,
            aspect,
            out,
        } => {
            let config = config::MomentumConfig::load()?;
            cli::run_generation(topic, slides, style, aspect, out, config).await?;
        }
    }

    Ok(())
}
