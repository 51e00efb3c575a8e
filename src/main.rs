//! CLI entry point for the jet fuel opportunity map generator.
//!
//! Provides subcommands for rendering all three maps in one shot,
//! rendering a single view, and printing dataset summaries.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jetfuel_maps::{
    fetch::fetch_bytes,
    maps::{self, heatmap, markers, states},
    output::write_page,
    parser::parse_records,
    records::AirportRecord,
    stats::DatasetSummary,
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEFAULT_INPUT: &str = "results/jet_fuel_opportunities.csv";

#[derive(Parser)]
#[command(name = "jetfuel_maps")]
#[command(about = "Render interactive maps from scored airport data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render all three opportunity maps
    Generate {
        /// Path or URL of the scored airport CSV
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: String,

        /// Directory to write the HTML maps into
        #[arg(short, long, default_value = ".")]
        output_dir: String,
    },
    /// Render only the opportunity heat map
    Heatmap {
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: String,

        #[arg(short, long, default_value = maps::HEATMAP_FILE)]
        output: String,
    },
    /// Render only the detailed high-opportunity marker map
    Markers {
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: String,

        #[arg(short, long, default_value = maps::MARKERS_FILE)]
        output: String,
    },
    /// Render only the state summary map
    States {
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: String,

        #[arg(short, long, default_value = maps::STATES_FILE)]
        output: String,
    },
    /// Print dataset and per-state summaries without writing any maps
    Summary {
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/jetfuel_maps.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("jetfuel_maps.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { input, output_dir } => generate(&input, &output_dir)?,
        Commands::Heatmap { input, output } => {
            let records = load_records(&input)?;
            info!("Creating heat map");
            write_page(Path::new(&output), &heatmap::render(&records)?)?;
        }
        Commands::Markers { input, output } => {
            let records = load_records(&input)?;
            info!("Creating detailed opportunities map");
            let (page, shown) = markers::render(&records)?;
            write_page(Path::new(&output), &page)?;
            info!(airports_shown = shown, "Detailed opportunities map rendered");
        }
        Commands::States { input, output } => {
            let records = load_records(&input)?;
            info!("Creating state summary map");
            write_page(Path::new(&output), &states::render(&records)?)?;
        }
        Commands::Summary { input } => {
            let records = load_records(&input)?;
            print_summary(&records);
        }
    }

    Ok(())
}

/// Loads the scored airport CSV from a local file path or over HTTP.
#[tracing::instrument(skip_all, fields(source = %source))]
fn load_records(source: &str) -> Result<Vec<AirportRecord>> {
    let bytes = if source.starts_with("http") {
        fetch_bytes(source)?
    } else {
        std::fs::read(source).with_context(|| format!("reading input file {source}"))?
    };

    let records = parse_records(&bytes)?;
    info!(total = records.len(), "Scored airports loaded");

    Ok(records)
}

/// Renders all three maps into `output_dir`.
#[tracing::instrument(skip_all, fields(input = %input, output_dir = %output_dir))]
fn generate(input: &str, output_dir: &str) -> Result<()> {
    let records = load_records(input)?;

    let summary = DatasetSummary::from_records(&records);
    info!(
        with_coordinates = summary.with_coordinates,
        high_opportunity = summary.high_opportunity,
        military_relevant = summary.military_relevant,
        "Dataset ready for rendering"
    );

    let dir = Path::new(output_dir);

    info!("Creating heat map");
    write_page(&dir.join(maps::HEATMAP_FILE), &heatmap::render(&records)?)?;

    info!("Creating detailed opportunities map");
    let (page, shown) = markers::render(&records)?;
    write_page(&dir.join(maps::MARKERS_FILE), &page)?;
    info!(airports_shown = shown, "Detailed opportunities map rendered");

    info!("Creating state summary map");
    write_page(&dir.join(maps::STATES_FILE), &states::render(&records)?)?;

    info!(output_dir, "All maps created");
    Ok(())
}

/// Logs the dataset summary and one line per state aggregate.
fn print_summary(records: &[AirportRecord]) {
    let summary = DatasetSummary::from_records(records);

    info!(
        total = summary.total,
        with_coordinates = summary.with_coordinates,
        coordinate_pct = %format!("{:.1}", summary.coordinate_pct()),
        high_opportunity = summary.high_opportunity,
        military_relevant = summary.military_relevant,
        mean_score = %format!("{:.2}", summary.mean_score),
        max_score = %format!("{:.2}", summary.max_score),
        "Dataset summary"
    );

    for (state, aggregate) in states::aggregate_states(records) {
        info!(
            state = %state,
            avg_score = aggregate.avg_score,
            max_score = aggregate.max_score,
            count = aggregate.count,
            has_center = states::state_center(&state).is_some(),
            "State aggregate"
        );
    }
}
