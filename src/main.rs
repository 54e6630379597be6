// src/main.rs
// moodscope - Request-Service and web form launcher

use anyhow::Result;
use axum::Router;
use clap::{Args, Parser, Subcommand};
use moodscope::config::{DEFAULT_SECRETS_FILE, ServiceConfig};
use moodscope::sentiment::Analyzer;
use moodscope::ui::{self, InlineBackend, RemoteBackend, UiState};
use moodscope::web::{self, state::AppState};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

const SERVICE_PORT: u16 = 8000;
const WEB_PORT: u16 = 8501;

#[derive(Parser)]
#[command(name = "moodscope")]
#[command(about = "Sentiment analysis backed by the DeepSeek chat API")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    bind: BindArgs,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "SENTIMENT_LOG_LEVEL", default_value = "info")]
    log_level: Level,

    /// TOML file consulted for DEEPSEEK_API_KEY when the environment has none
    #[arg(long, global = true, env = "SENTIMENT_SECRETS_FILE", default_value = DEFAULT_SECRETS_FILE)]
    secrets: PathBuf,
}

#[derive(Args)]
struct BindArgs {
    /// Address to bind
    #[arg(long, global = true, env = "SENTIMENT_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on (default depends on the command)
    #[arg(short, long, global = true, env = "SENTIMENT_PORT")]
    port: Option<u16>,
}

impl BindArgs {
    fn addr(&self, default_port: u16) -> String {
        format!("{}:{}", self.host, self.port.unwrap_or(default_port))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the JSON analysis API (default)
    Serve,

    /// Run the web form against a running analysis API
    Web {
        /// Base URL of the analysis API
        #[arg(long, env = "SENTIMENT_API_URL", default_value = "http://localhost:8000")]
        api_url: String,
    },

    /// Run the web form, calling the model directly
    Cloud,
}

async fn serve(app: Router, addr: &str, what: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("{} running on http://{}", what, addr);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn run_service(bind: &BindArgs, config: ServiceConfig) -> Result<()> {
    info!(model = config.model(), endpoint = config.endpoint(), "Starting analysis API");
    let app = web::create_router(AppState::new(config));
    serve(app, &bind.addr(SERVICE_PORT), "Analysis API").await
}

async fn run_web(bind: &BindArgs, api_url: String) -> Result<()> {
    info!(api_url = %api_url, "Starting web form (remote mode)");
    let state = UiState::new(Arc::new(RemoteBackend::new(api_url)));
    serve(ui::create_router(state), &bind.addr(WEB_PORT), "Web form").await
}

async fn run_cloud(bind: &BindArgs, config: ServiceConfig) -> Result<()> {
    info!(model = config.model(), endpoint = config.endpoint(), "Starting web form (inline mode)");
    let analyzer = Arc::new(Analyzer::new(config));
    let state = UiState::new(Arc::new(InlineBackend::new(analyzer)));
    serve(ui::create_router(state), &bind.addr(WEB_PORT), "Web form").await
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env from the current directory
    let _ = dotenvy::dotenv();

    let Cli {
        command,
        bind,
        log_level,
        secrets,
    } = Cli::parse();

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_service(&bind, ServiceConfig::from_env(&secrets)).await,
        Commands::Web { api_url } => run_web(&bind, api_url).await,
        Commands::Cloud => run_cloud(&bind, ServiceConfig::from_env(&secrets)).await,
    }
}
