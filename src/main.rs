use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tarot_deck::deck::DeckPolicy;
use tarot_deck::ServerConfig;

#[derive(Parser)]
#[command(name = "tarotd")]
#[command(about = "Virtual tarot deck API server", long_about = None)]
#[command(version)]
struct Cli {
    /// Address to bind, e.g. 0.0.0.0:5000 (overrides PORT)
    #[arg(long)]
    bind: Option<String>,

    /// Directory with card images and meaning documents
    #[arg(long, default_value = "assets")]
    assets_dir: PathBuf,

    /// Directory with the dashboard files
    #[arg(long, default_value = "frontend")]
    frontend_dir: PathBuf,

    /// Additional browser origin allowed to call the API (repeatable)
    #[arg(long = "allow-origin", value_name = "ORIGIN")]
    allow_origins: Vec<String>,

    /// Fixed shuffle seed for reproducible readings (default: OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Randomize deck order once at startup
    #[arg(long)]
    shuffle_on_start: bool,

    /// Re-shuffle on reset instead of restoring the original order
    #[arg(long)]
    reset_reshuffles: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = build_config(&cli);
    let app = tarot_deck::server::router(&config);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    tracing::info!(bind = %config.bind, assets = %config.assets_dir.display(), "serving tarot deck API");
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_config(cli: &Cli) -> ServerConfig {
    // --bind wins; otherwise honor the platform-provided PORT.
    let bind = cli.bind.clone().unwrap_or_else(|| {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(ServerConfig::DEFAULT_PORT);
        format!("0.0.0.0:{port}")
    });

    let mut config = ServerConfig::default()
        .with_bind(bind)
        .with_assets_dir(cli.assets_dir.clone())
        .with_frontend_dir(cli.frontend_dir.clone())
        .with_policy(DeckPolicy {
            shuffle_on_build: cli.shuffle_on_start,
            reset_reshuffles: cli.reset_reshuffles,
        });

    for origin in &cli.allow_origins {
        config = config.with_allowed_origin(origin.clone());
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    config
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "tarot_deck=debug,tarotd=debug,tower_http=debug"
    } else {
        "tarot_deck=info,tarotd=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
