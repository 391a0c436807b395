//! Recordings Monitor CLI
//!
//! Entry point: builds the monitoring report from the configured
//! recordings directory and either prints it or publishes it over MQTT.

use clap::{Parser, Subcommand};
use recmon::{
    board_id, config::MonitorConfig, filename_parser::FilenameParser, monitor::Monitor,
    publisher::ReportPublisher, scanner,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "recmon", about = "Camera recordings monitor", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the monitoring report and print it to stdout
    Report {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Build the monitoring report and publish it to the MQTT broker
    Publish,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recmon=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = MonitorConfig::default();
    config.validate()?;
    tracing::info!(
        recordings_dir = %config.recordings_dir.display(),
        expected_interval_min = config.expected_interval.num_minutes(),
        tolerance_secs = config.tolerance.num_seconds(),
        "Configuration loaded"
    );

    let board = board_id::board_id();
    let now = chrono::Utc::now();

    let parser = FilenameParser::new();
    let entries = scanner::scan_recordings(&config.recordings_dir, &parser, now.date_naive());
    tracing::info!(count = entries.len(), "Recordings discovered");

    let monitor = Monitor::new(&config);
    let report = monitor.build_report(entries, &board, now.naive_utc(), now);
    tracing::info!(
        camera_status = ?report.camera_status,
        total_videos = report.total_videos,
        total_offline_segments = report.total_offline_segments,
        "Report assembled"
    );

    match cli.command {
        Command::Report { pretty } => {
            let json = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{}", json);
        }
        Command::Publish => {
            let publisher = ReportPublisher::new(config.mqtt.clone());
            publisher.publish(&report).await?;
        }
    }

    Ok(())
}
