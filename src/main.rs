use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use paraboda_translate::config::{mask_api_key, Config};
use paraboda_translate::{create_routes, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("paraboda_translate=debug,tower_http=info")),
        )
        .init();

    info!("Translation API server starting up...");

    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        Some("conf.json".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let (mut config, loaded_path) = Config::discover(&config_paths)?;
    match loaded_path {
        Some(path) => info!("Loaded configuration from: {}", path),
        None => info!("No config file found, using defaults. Tried: {:?}", config_paths),
    }
    config.apply_env_overrides();

    match config.translation.api_key.as_deref() {
        Some(key) if config.translation.api_key_configured() => {
            info!("HF_API_KEY is configured: {}", mask_api_key(key));
            info!("API key length: {} characters", key.chars().count());
        }
        _ => warn!("HF_API_KEY environment variable is not set!"),
    }
    info!(
        "Model: {} ({})",
        config.translation.model,
        config.translation.endpoint_url()
    );
    if !config.translation.validate_languages {
        warn!("Language validation disabled, any language code is forwarded upstream");
    }

    let host = config.server.host.clone();
    let port = config.server.port;
    let app_state = AppState::new(config)?;
    let app = create_routes(app_state);

    info!("Starting server on {}:{}", host, port);
    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!("Translation API ready to serve requests");
    axum::serve(listener, app).await?;

    Ok(())
}
