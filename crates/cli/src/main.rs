use clap::{Parser, Subcommand};

mod commands;

use commands::{load_config, run_report, run_seed, ReportArgs};
use rota_ops_data::DatabaseClient;
use rota_ops_web_api::{ApiServer, AppState};

#[derive(Parser)]
#[command(name = "rota-ops")]
#[command(about = "Operations dashboard for cash-on-delivery logistics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web API server
    Serve {
        /// Address override, e.g. "0.0.0.0:8080"; defaults to the configured
        /// host and port
        #[arg(short, long)]
        addr: Option<String>,
    },
    /// Print the dashboard report for a period
    Report(ReportArgs),
    /// Seed the database with the demo dataset
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Commands::Serve { addr } => {
            run_serve(addr).await?;
        }
        Commands::Report(args) => {
            run_report(args).await?;
        }
        Commands::Seed => {
            run_seed().await?;
        }
    }

    Ok(())
}

async fn run_serve(addr: Option<String>) -> anyhow::Result<()> {
    let config = load_config();
    let addr =
        addr.unwrap_or_else(|| format!("{}:{}", config.server.host, config.server.port));

    let db = DatabaseClient::from_config(&config.database).await?;
    let state = AppState::new(db.pool());

    ApiServer::new(state).serve(&addr).await
}
