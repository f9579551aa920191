use tracing_subscriber::EnvFilter;

use progress_api::config;
use progress_api::state::AppState;

/// Set to any value to log JSON lines instead of human-readable text.
const LOG_JSON_ENV: &str = "PROGRESS_LOG_JSON";

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if std::env::var_os(LOG_JSON_ENV).is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let config = config::load_config()?;
    let tz = config.time_zone()?;
    let bind_addr = config.bind_addr.clone();
    tracing::info!(
        data_dir = %config.data_dir.display(),
        export_dir = %config.export_dir.display(),
        timezone = %config.timezone,
        "configuration loaded"
    );

    let app = progress_api::router(AppState::new(config, tz));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
