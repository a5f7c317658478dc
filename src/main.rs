// src/main.rs
use box_advisor::api;
use box_advisor::config::AppConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // .env may set RUST_LOG, so it is read before the subscriber is installed
    let dotenv_result = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = dotenv_result {
        if !matches!(err, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            tracing::warn!(%err, "could not load .env");
        }
    }

    let app_config = AppConfig::from_env();
    let api_config = app_config.api.clone();
    let advisor_settings = app_config.advisor.clone();

    tracing::info!("box advisor starting");
    if let Err(err) = api::start_api_server(api_config, advisor_settings).await {
        tracing::error!(%err, "API server terminated with an error");
        std::process::exit(1);
    }
}
