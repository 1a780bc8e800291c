mod config;
mod routes;
mod state;

/// Startup failure.
#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "wjjw-docs failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = config::SiteConfig::from_env()?;
    let state = state::AppState::new(&config);
    tracing::info!(
        static_dir = %config.static_dir.display(),
        script_bytes = state.theme_script.len(),
        "theme bootstrap script rendered"
    );

    let app = routes::app(&config, state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, "wjjw-docs listening");
    axum::serve(listener, app).await?;
    Ok(())
}
