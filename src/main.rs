//! Command line entry point for the Attendance Rule Engine.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::calculation::run;
use attendance_engine::config::ConfigLoader;
use attendance_engine::report::write_run;
use attendance_engine::store::ReferenceTables;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "attendance-engine")]
#[command(about = "Classifies clock punches and produces monthly attendance reports")]
#[command(version)]
struct Cli {
    /// Directory holding shifts.yaml and rules.yaml
    #[arg(long, global = true, default_value = "./config/default")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a directory of CSV tables and write the reports
    Run {
        /// Directory holding employee.csv, attendance.csv, leave.csv,
        /// holiday.csv, meal.csv and manual_ot.csv
        #[arg(long)]
        data: PathBuf,

        /// Directory the reports are written to
        #[arg(long, default_value = "./reports")]
        output: PathBuf,

        /// Month label used in report file names (defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },

    /// Serve the HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Attendance engine failed");
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigLoader::load(&cli.config)?;
    info!(
        config_dir = %cli.config.display(),
        shifts = config.config().shifts().len(),
        "Configuration loaded"
    );

    match cli.command {
        Commands::Run {
            data,
            output,
            month,
        } => {
            let tables = ReferenceTables::load_dir(&data)?;
            let report = run(&config, tables);
            let month = month.unwrap_or_else(|| Local::now().format("%B").to_string());
            let written = write_run(&output, &month, &report)?;
            info!(
                run_id = %report.run_id,
                files = written.len(),
                output = %output.display(),
                "Reports written"
            );
        }
        Commands::Serve { addr } => {
            let app = create_router(AppState::new(config));
            let listener = tokio::net::TcpListener::bind(addr).await?;
            info!(addr = %addr, "Starting API server");
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
