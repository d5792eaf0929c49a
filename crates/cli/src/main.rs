//! # enrolment-analytics
//!
//! Command-line dashboard for the regional enrolment analytics engine.
//! Loads a record file, builds the views and prints them as JSON or as a
//! text report.

mod loader;
mod report;

use std::fs::File;
use std::path::{Path, PathBuf};

use analytics::{
    build_views_with, overview_stats, region_totals, top_by_bio_ratio, top_by_demo_ratio,
    AnalyticsViews, Metric, Record, RecordSource, RegionFilter, ViewConfig, DEFAULT_HORIZON,
    DEFAULT_TOP_N,
};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::loader::FileSource;

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "enrolment-analytics")]
#[command(about = "Regional enrolment analytics dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Input file with one record per row (CSV or JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file (optional, defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build every view and print them as JSON
    Views {
        #[command(flatten)]
        io: InputArgs,

        /// Metrics to rank by (repeatable)
        #[arg(short, long = "metric")]
        metrics: Vec<String>,

        /// Number of regions in each ranking
        #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
        top: usize,

        /// Number of months to forecast
        #[arg(long, default_value_t = DEFAULT_HORIZON)]
        horizon: usize,
    },

    /// Top regions by one metric
    Top {
        #[command(flatten)]
        io: InputArgs,

        /// Metric to rank by (total_enrol, total_demo_updates, total_bio_updates, demo_per_enrol, bio_per_enrol)
        #[arg(short, long, default_value = "total_enrol")]
        metric: String,

        /// Number of regions to return
        #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
        top: usize,
    },

    /// Anomaly labels for every region
    Anomalies {
        #[command(flatten)]
        io: InputArgs,

        /// Also list the top regions by each update ratio
        #[arg(long)]
        leaders: Option<usize>,
    },

    /// Monthly enrolment totals and forecast
    Forecast {
        #[command(flatten)]
        io: InputArgs,

        /// Number of months to forecast
        #[arg(long, default_value_t = DEFAULT_HORIZON)]
        horizon: usize,
    },

    /// Overall statistics, optionally for one region
    Stats {
        #[command(flatten)]
        io: InputArgs,

        /// Region name, or ALL
        #[arg(short, long, default_value = "ALL")]
        region: String,
    },

    /// Print a text dashboard
    Report {
        #[command(flatten)]
        io: InputArgs,

        /// Region name, or ALL
        #[arg(short, long, default_value = "ALL")]
        region: String,
    },
}

fn load_records(input: &Path) -> CliResult<Vec<Record>> {
    FileSource::new(input).records().map_err(|e| e.to_string())
}

fn build(records: &[Record], config: &ViewConfig) -> CliResult<AnalyticsViews> {
    build_views_with(records, config).map_err(|e| {
        tracing::error!(error = %e, "unable to build analytics views");
        e.to_string()
    })
}

/// Write a JSON document to the output file or stdout
fn write_json<T: Serialize>(value: &T, output: Option<&PathBuf>) -> CliResult<()> {
    if let Some(path) = output {
        let mut file = File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, value)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        tracing::info!(path = %path.display(), "results written");
    } else {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| format!("Failed to serialize JSON: {}", e))?;
        println!("{}", json);
    }
    Ok(())
}

fn run_views(io: InputArgs, metrics: Vec<String>, top: usize, horizon: usize) -> CliResult<()> {
    let mut builder = ViewConfig::builder().top_n(top).horizon(horizon);
    for name in &metrics {
        let metric: Metric = name.parse().map_err(|e: analytics::AnalyticsError| e.to_string())?;
        builder = builder.metric(metric);
    }
    let config = builder.build().map_err(|e| e.to_string())?;

    let records = load_records(&io.input)?;
    let views = build(&records, &config)?;
    write_json(&views, io.output.as_ref())
}

fn run_top(io: InputArgs, metric: String, top: usize) -> CliResult<()> {
    let metric: Metric = metric.parse().map_err(|e: analytics::AnalyticsError| e.to_string())?;
    let config = ViewConfig::builder()
        .metrics(vec![metric])
        .top_n(top)
        .build()
        .map_err(|e| e.to_string())?;

    let records = load_records(&io.input)?;
    let views = build(&records, &config)?;
    let ranking = views.ranking(metric).unwrap_or_default();
    write_json(&ranking, io.output.as_ref())
}

fn run_anomalies(io: InputArgs, leaders: Option<usize>) -> CliResult<()> {
    let records = load_records(&io.input)?;
    let views = build(&records, &ViewConfig::default())?;

    match leaders {
        Some(0) => Err("--leaders must be positive".to_string()),
        Some(n) => {
            let json = serde_json::json!({
                "points": views.anomalies,
                "top_demo_per_enrol": top_by_demo_ratio(&views.anomalies, n),
                "top_bio_per_enrol": top_by_bio_ratio(&views.anomalies, n),
            });
            write_json(&json, io.output.as_ref())
        }
        None => write_json(&views.anomalies, io.output.as_ref()),
    }
}

/// Monthly series and forecast for `horizon` months as one JSON document
fn forecast_document(records: &[Record], horizon: usize) -> CliResult<serde_json::Value> {
    let config = ViewConfig::builder()
        .horizon(horizon)
        .build()
        .map_err(|e| e.to_string())?;
    let views = build(records, &config)?;

    Ok(serde_json::json!({
        "monthly": views.monthly,
        "horizon": config.horizon,
        "forecast": views.forecast,
    }))
}

fn run_forecast(io: InputArgs, horizon: usize) -> CliResult<()> {
    let records = load_records(&io.input)?;
    let json = forecast_document(&records, horizon)?;
    write_json(&json, io.output.as_ref())
}

fn run_stats(io: InputArgs, region: String) -> CliResult<()> {
    let records = load_records(&io.input)?;
    let views = build(&records, &ViewConfig::default())?;
    let filter = RegionFilter::parse(&region);

    let json = serde_json::json!({
        "overview": overview_stats(&views.summaries),
        "filter": filter,
        "totals": region_totals(&views.summaries, &filter),
    });
    write_json(&json, io.output.as_ref())
}

fn run_report(io: InputArgs, region: String) -> CliResult<()> {
    let records = load_records(&io.input)?;
    let views = build(&records, &ViewConfig::default())?;
    let mut text = String::new();
    report::render(&mut text, &views, &RegionFilter::parse(&region))
        .map_err(|e| format!("Failed to render report: {}", e))?;

    if let Some(path) = io.output {
        std::fs::write(&path, text).map_err(|e| format!("Failed to write report: {}", e))?;
        tracing::info!(path = %path.display(), "report written");
    } else {
        print!("{}", text);
    }
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "enrolment_analytics=info,analytics_core=info".into()),
        )
        .init();
}

fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Views {
            io,
            metrics,
            top,
            horizon,
        } => run_views(io, metrics, top, horizon),
        Commands::Top { io, metric, top } => run_top(io, metric, top),
        Commands::Anomalies { io, leaders } => run_anomalies(io, leaders),
        Commands::Forecast { io, horizon } => run_forecast(io, horizon),
        Commands::Stats { io, region } => run_stats(io, region),
        Commands::Report { io, region } => run_report(io, region),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
