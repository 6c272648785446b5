//! Biodiversity Explorer CLI
//!
//! Renders one dashboard view to the terminal and draws its charts as HTML files
//! (or opens them in the browser).

use anyhow::{Context, Result};
use biodiversity_explorer::{
    ensure_output_dir_exists, get_output_dir, ChartTarget, Dashboard, ExplorerConfig, Units,
    View, DEFAULT_FIRST_SPECIES, DEFAULT_GBIF_BASE_URL, DEFAULT_HISTORICAL_CSV,
    DEFAULT_OCCURRENCE_LIMIT, DEFAULT_SECOND_SPECIES, DEFAULT_WEATHER_BASE_URL,
};
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ViewArg {
    /// Species information, occurrence tables, occurrences over time and maps
    Occurrence,
    /// Current temperature at each species' first recorded location
    Climate,
    /// Average temperature per year from the historical CSV
    Historical,
}

impl From<ViewArg> for View {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Occurrence => View::Occurrence,
            ViewArg::Climate => View::Climate,
            ViewArg::Historical => View::Historical,
        }
    }
}

#[derive(Parser)]
#[command(name = "biodiversity-explorer")]
#[command(about = "Compare two species' occurrence records and climate conditions")]
#[command(version)]
struct Args {
    /// Which part of the dashboard to display
    #[arg(long, value_enum, default_value = "occurrence")]
    view: ViewArg,

    /// First species name
    #[arg(long = "species-1", default_value = DEFAULT_FIRST_SPECIES)]
    species_1: String,

    /// Second species name
    #[arg(long = "species-2", default_value = DEFAULT_SECOND_SPECIES)]
    species_2: String,

    /// CSV of historical yearly mean temperatures
    #[arg(long, default_value = DEFAULT_HISTORICAL_CSV)]
    csv: PathBuf,

    /// Directory for chart HTML files [default: <cache dir>/biodiversity_explorer]
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Open charts in the browser instead of writing them to files
    #[arg(long)]
    open: bool,

    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Units for temperatures: metric, imperial or standard
    #[arg(long, default_value = "metric")]
    units: Units,

    /// Number of occurrence records fetched per species
    #[arg(long, default_value_t = DEFAULT_OCCURRENCE_LIMIT)]
    limit: u32,

    #[arg(long, default_value = DEFAULT_GBIF_BASE_URL, hide = true)]
    gbif_url: String,

    #[arg(long, default_value = DEFAULT_WEATHER_BASE_URL, hide = true)]
    weather_url: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("biodiversity_explorer=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let target = if args.open {
        ChartTarget::Browser
    } else {
        let dir = match args.output_dir {
            Some(dir) => dir,
            None => get_output_dir()?,
        };
        ensure_output_dir_exists(&dir).await?;
        ChartTarget::Directory(dir)
    };

    let config = ExplorerConfig::builder()
        .gbif_base_url(args.gbif_url)
        .weather_base_url(args.weather_url)
        .maybe_weather_api_key(args.api_key)
        .units(args.units)
        .occurrence_limit(args.limit)
        .historical_csv(args.csv)
        .build();

    let dashboard = Dashboard::new(config);
    let page = dashboard
        .render(args.view.into(), &args.species_1, &args.species_2)
        .await;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    page.write_to(&mut out, &target)
        .context("Failed to write page output")?;
    out.flush().context("Failed to flush page output")?;

    Ok(())
}
