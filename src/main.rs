use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;

use dialcoach::{routes, AppConfig, AppState, SimulationSettings};

/// dialcoach - AI sales-call practice server
#[derive(Parser, Debug)]
#[command(name = "dialcoach")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Compile a simulation prompt from a settings file and print it
    Prompt {
        /// Path to a JSON file with simulation settings
        #[arg(short = 's', long = "settings", value_name = "FILE")]
        settings: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present, before reading configuration
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Prompt { settings }) => {
            let raw = std::fs::read_to_string(&settings)
                .with_context(|| format!("failed to read {}", settings.display()))?;
            let settings: SimulationSettings =
                serde_json::from_str(&raw).context("invalid simulation settings")?;
            print!("{}", dialcoach::compile(&settings));
            Ok(())
        }
        Some(Commands::Serve) | None => serve().await,
    }
}

async fn serve() -> anyhow::Result<()> {
    let config = AppConfig::from_env().map_err(|e| anyhow!(e.to_string()))?;
    let address = config.address();

    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not set; session minting will fail");
    }

    let state = AppState::new(config);
    let app = routes::create_router(state);

    let socket_addr: SocketAddr = address
        .parse()
        .map_err(|e| anyhow!("Invalid server address '{}': {}", address, e))?;

    info!("Server listening on http://{}", socket_addr);
    let listener = TcpListener::bind(&socket_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
