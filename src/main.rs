use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use index_volatility::{config::Config, server, AnalyzerService, VolatilityReport};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "index-volatility")]
#[command(about = "Annualized volatility from historical index prices", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the YAML configuration file
    #[arg(short, long, global = true, default_value = "config/volatility.yaml")]
    config: PathBuf,

    /// Log filter, overrides RUST_LOG and the config file
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Analyze a local CSV file and print the result
    Analyze {
        /// CSV file with a header row and a close price column
        file: PathBuf,
    },
}

fn init_tracing(cli_level: Option<&str>, config: &Config) {
    let filter = match cli_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    init_tracing(cli.log_level.as_deref(), &config);

    let service = AnalyzerService::new();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let addr = config.server.socket_addr()?;
            let app = server::router(service, config.server.max_upload_bytes);
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("binding {}", addr))?;
            info!(%addr, "listening");
            axum::serve(listener, app).await?;
        }
        Commands::Analyze { file } => {
            let report = service
                .analyze_path(&file)
                .with_context(|| format!("Error processing the file {}", file.display()))?;
            print_report(&report);
        }
    }

    Ok(())
}

fn print_report(report: &VolatilityReport) {
    println!("Close column: {}", report.close_column);
    println!("Observations: {}", report.observations);
    println!("Daily volatility: {:.6}", report.daily_volatility);
    println!(
        "Annualized volatility: {:.6} ({:.2}%)",
        report.annualized_volatility,
        report.annualized_volatility * 100.0
    );
}
