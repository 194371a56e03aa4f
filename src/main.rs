use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use readwise_relay::controllers::save::SaveController;
use readwise_relay::infrastructure::config::{Config, LogFormat};
use readwise_relay::infrastructure::http::start_http_server;
use readwise_relay::infrastructure::readwise::ReadwiseClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Readwise save relay on {}:{}",
        config.host,
        config.port
    );

    if config.readwise_api_token.is_empty() {
        tracing::warn!(
            "READWISE_API_TOKEN is not set; save requests will fail until it is configured"
        );
    }

    let config = Arc::new(config);

    let readwise_client = Arc::new(ReadwiseClient::new(
        config.readwise_api_url.clone(),
        config.readwise_api_token.clone(),
        Duration::from_millis(config.readwise_timeout_ms),
    ));

    let save_controller = Arc::new(SaveController::new(readwise_client, config.clone()));

    // Start HTTP server
    start_http_server(config, save_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "readwise_relay=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "readwise_relay=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
