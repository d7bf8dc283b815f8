mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use solgen::{AppConfig, GeneratorClient};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "solgen-tui")]
#[command(about = "Generate and inspect Solana wallets for the current session")]
struct Cli {
    /// Generation endpoint, overriding SOLGEN_GENERATOR__URL
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the Terminal User Interface
    Tui,
    /// Request one wallet and print its public key
    Generate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(endpoint) = cli.endpoint {
        config = config.with_generator_url(endpoint);
    }

    init_logging(&config)?;
    info!("Starting solgen v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Tui => tui::run_tui(config).await,
        Commands::Generate => {
            let client = GeneratorClient::new(&config.generator)?;
            info!(url = client.url(), "Requesting one wallet");
            let record = client.generate().await?;
            // The secret key and seed phrase never leave the process here
            println!("{}", record.public_key());
            Ok(())
        }
    }
}

/// Logs go to a file; the terminal belongs to the UI.
fn init_logging(config: &AppConfig) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.logging.file)
        .with_context(|| format!("Cannot open log file {}", config.logging.file))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "solgen=info,solgen_tui=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}
