use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use marquee_config::ConfigLoader;
use marquee_player::app::{self, AppConfig};
use marquee_player::infra::logging::init_logger;

#[derive(Debug, Parser)]
#[command(name = "marquee", about = "Trending movies carousel for the terminal")]
struct Args {
    /// TOML configuration file. Falls back to $MARQUEE_CONFIG, then
    /// marquee.toml or config/marquee.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// .env file to read before the process environment
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Exit after this many slides have been shown
    #[arg(long, env = "MARQUEE_SLIDES")]
    slides: Option<usize>,

    /// TMDB language tag, e.g. en-US
    #[arg(long)]
    language: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();
    let args = Args::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &args.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = &args.env_file {
        loader = loader.with_env_file(path);
    }

    let load = loader.load().context("Failed to load configuration")?;
    load.warnings.log();
    if let Some(path) = &load.config.metadata.config_path {
        log::info!("Using configuration from {}", path.display());
    }

    let config = AppConfig::new(load.config)
        .with_max_slides(args.slides)
        .with_language(args.language);

    let mut stdout = std::io::stdout();
    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for ctrl-c: {err}");
            std::future::pending::<()>().await;
        }
    };

    let summary = app::run(config, &mut stdout, shutdown).await?;
    log::info!(
        "Carousel finished: {:?}, {} titles, {} slides shown",
        summary.load_state,
        summary.items,
        summary.slides_shown
    );
    Ok(())
}
