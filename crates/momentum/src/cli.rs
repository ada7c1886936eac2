//! Command-line interface for the Momentum feed generator.

use crate::config::MomentumConfig;
use clap::{Parser, Subcommand};
use momentum_core::{AspectRatio, GenerationRequest, VisualStyle, export};
use momentum_engine::FeedEngine;
use momentum_gemini::{GeminiClient, GeminiImageMaker, GeminiScriptWriter};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use strum::VariantArray;
use tracing::{info, warn};

/// Generate social-media slide feeds with Gemini.
#[derive(Debug, Parser)]
#[command(name = "momentum", version, about)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a feed and write the post bundle and slide images to disk
    Run {
        /// Topic of the narrative
        topic: String,

        /// Number of slides (1-10)
        #[arg(short = 'n', long, default_value_t = 1)]
        slides: u8,

        /// Visual style (news, cinematic, minimalist)
        #[arg(short, long, default_value = "cinematic", value_parser = parse_style)]
        style: VisualStyle,

        /// Aspect ratio (1:1 or 9:16)
        #[arg(short, long, default_value = "9:16", value_parser = parse_aspect)]
        aspect: AspectRatio,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
}

fn parse_style(value: &str) -> Result<VisualStyle, String> {
    VisualStyle::from_str(value).map_err(|_| {
        format!(
            "unknown style '{}', expected one of: {}",
            value,
            variant_list(VisualStyle::VARIANTS)
        )
    })
}

fn parse_aspect(value: &str) -> Result<AspectRatio, String> {
    AspectRatio::from_str(value).map_err(|_| {
        format!(
            "unknown aspect ratio '{}', expected one of: {}",
            value,
            variant_list(AspectRatio::VARIANTS)
        )
    })
}

fn variant_list<T: std::fmt::Display>(variants: &[T]) -> String {
    variants
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Run one generation and write its outputs under `out`.
pub async fn run_generation(
    topic: String,
    slides: u8,
    style: VisualStyle,
    aspect: AspectRatio,
    out: PathBuf,
    config: MomentumConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = GenerationRequest::builder()
        .topic(topic)
        .slide_count(slides)
        .style(style)
        .aspect_ratio(aspect)
        .build()?;

    let client = GeminiClient::new()?;
    let script = GeminiScriptWriter::new(client.clone())
        .with_model(&config.script_model)
        .with_retry(
            !config.retry.enabled,
            config.retry.max_retries,
            config.retry.backoff_ms,
        );
    let images = GeminiImageMaker::new(client).with_model(&config.image_model);
    let engine = Arc::new(FeedEngine::with_config(script, images, config.engine_config()));

    // Print status transitions while the run proceeds.
    let mut status_rx = engine.subscribe_status();
    let watcher = tokio::spawn(async move {
        while status_rx.changed().await.is_ok() {
            let status = status_rx.borrow().clone();
            if status.is_busy() {
                info!(progress = %format!("{:.0}%", status.progress()), "{}", status.message());
            }
        }
    });

    let outcome = engine.run(&request).await;
    watcher.abort();
    let outcome = outcome?;

    let Some(feed) = outcome.feed() else {
        warn!("No feed was generated");
        return Ok(());
    };

    std::fs::create_dir_all(&out)?;

    let bundle_path = out.join(format!("momentum-ai-{}.txt", export::topic_slug(feed.topic())));
    std::fs::write(&bundle_path, export::post_bundle(feed))?;
    info!(path = %bundle_path.display(), "Saved post bundle");

    for (index, slide) in feed.slides().iter().enumerate() {
        match slide.image() {
            Some(image) => {
                let path = out.join(export::image_filename(
                    feed.topic(),
                    index,
                    image.extension(),
                ));
                std::fs::write(&path, image.data())?;
                info!(path = %path.display(), "Saved slide image");
            }
            None => warn!(slide = index + 1, "No image was generated for this slide"),
        }
    }

    println!(
        "{} slides, {} words, {} hashtags",
        feed.slide_count(),
        feed.total_words(),
        feed.hashtags().len()
    );
    println!("{}", export::hashtag_line(feed.hashtags()));

    Ok(())
}
