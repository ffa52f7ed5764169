mod render;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use triptactix_core::{AppConfig, ImageResult, MAX_TRIP_DAYS, MIN_TRIP_DAYS, TripPreferences};
use triptactix_runtime::Credentials;
use triptactix_runtime::config_store::ConfigStore;
use triptactix_runtime::runtime_engine::build_planner_from_config;

#[derive(Debug, Parser)]
#[command(
    name = "triptactix",
    version,
    about = "AI trip planner: itinerary, activity photos and a trip illustration"
)]
struct Cli {
    /// e.g. Paris
    #[arg(long)]
    destination: String,

    /// Number of travel days
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range((MIN_TRIP_DAYS as i64)..=(MAX_TRIP_DAYS as i64)))]
    days: u32,

    /// Season or travel dates, e.g. "Summer, June 10-15"
    #[arg(long, default_value = "")]
    season: String,

    /// Who's going (number, ages, relationships)
    #[arg(long, default_value = "")]
    people: String,

    /// e.g. "art, food, hiking, museums"
    #[arg(long, default_value = "")]
    interests: String,

    /// JSON config file; built-in defaults when absent
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    no_image: bool,

    #[arg(long)]
    no_photos: bool,

    /// Write generated image bytes here
    #[arg(long)]
    image_out: Option<PathBuf>,

    /// Print the whole plan as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut cfg = match &cli.config {
        Some(path) => ConfigStore::at_path(path).load_or_default()?,
        None => AppConfig::default(),
    };
    if cli.no_image {
        cfg.images.enabled = false;
    }
    if cli.no_photos {
        cfg.photos.enabled = false;
    }
    Ok(cfg)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Library crates log through `log`; the subscriber picks those records up as well.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = load_config(&cli)?;

    // Without the itinerary key there is nothing useful to do.
    let creds = Credentials::resolve()?;

    let prefs = TripPreferences::new(cli.destination.clone(), cli.days)?
        .with_season_or_dates(cli.season.clone())
        .with_people(cli.people.clone())
        .with_interests(cli.interests.clone());

    let planner = build_planner_from_config(&cfg, &creds);
    let plan = planner
        .plan_with_hook(&prefs, |stage| async move {
            log::info!("stage: {stage}");
        })
        .await;

    let mut saved_image = None;
    if let (Some(path), Some(report)) = (&cli.image_out, &plan.image) {
        if let ImageResult::Bytes { bytes, .. } = &report.result {
            std::fs::write(path, bytes)
                .with_context(|| format!("write image: {}", path.display()))?;
            saved_image = Some(path.as_path());
        }
    }

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&plan).context("encode plan JSON")?
        );
    } else {
        print!("{}", render::render_plan(&plan, saved_image));
    }

    Ok(())
}
