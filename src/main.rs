use anyhow::Context;
use tokio::io::{self, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinema_system::{
    config::{Config, LogFormat},
    console::Console,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("failed to load configuration")?;

    // Logs go to stderr, stdout belongs to the console.
    let filter = tracing_subscriber::EnvFilter::new(&config.app.rust_log);
    match config.app.log_format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }

    info!(
        environment = %config.app.environment,
        "Starting box office for {}", config.theater.name
    );

    let state = AppState::new(config)?;
    info!("Catalog ready with {} screenings", state.catalog.len());

    Console::new(state.catalog.clone(), BufReader::new(io::stdin()), io::stdout())
        .run()
        .await
}
