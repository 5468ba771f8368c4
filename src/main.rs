//! Postwright CLI
//!
//! Commands:
//!   serve - Start the HTTP service (default)
//!   info  - Show the resolved configuration

use anyhow::Result;
use clap::{Parser, Subcommand};
use postwright::config::{mask_secret, API_KEY_ENV};
use postwright::{build_router, AppState, Config, OpenAIProvider, PostAssistant};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "postwright")]
#[command(about = "Conversational social post generation with tone matching")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.postwright/config.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show resolved configuration
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Serve { host: None, port: None }) {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            run_server(config).await?;
        }

        Commands::Info => {
            println!("Postwright\n");
            println!("Listen:   {}", config.bind_addr());
            println!("Endpoint: {}", config.provider.api_url);
            println!("Model:    {}", config.provider.model);
            println!("Timeout:  {}s", config.provider.request_timeout_secs);
            match &config.provider.api_key {
                Some(key) => println!("API key:  {}", mask_secret(key)),
                None => println!("API key:  not set (export {})", API_KEY_ENV),
            }
        }
    }

    Ok(())
}

async fn run_server(config: Config) -> Result<()> {
    if config.provider.api_key.is_none() {
        tracing::warn!(
            "{} is not set; every completion request will fail until it is",
            API_KEY_ENV
        );
    }

    let provider = OpenAIProvider::new(&config.provider)?;
    let assistant = PostAssistant::new(Arc::new(provider));
    tracing::info!(model = assistant.model(), "completion provider ready");

    let app = build_router(AppState::new(assistant));

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
            eprintln!("\n\x1b[31mError:\x1b[0m Port {} is already in use.\n", config.server.port);
            eprintln!("Try a different port with:");
            eprintln!("  \x1b[36mpostwright serve --port <PORT>\x1b[0m\n");
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    println!("Server running on http://{}", addr);
    println!("\nAPI Endpoints:");
    println!("  GET    /                - Liveness probe");
    println!("  GET    /health          - Health check");
    println!("  POST   /generate-post   - One-shot post for a topic and tone");
    println!("  POST   /chat            - Chat turn with suggested post");

    postwright::server::serve(listener, app).await
}
