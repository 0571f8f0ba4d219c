use anyhow::Error as AnyhowError;
use thiserror::Error;
use whoami_server::{
    AppState,
    config::{Config, ConfigError, IdentityBackend},
    logging::init_tracing,
    routes,
};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Other(#[from] AnyhowError),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Load environment variables from `.env` if present
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config.log_level)
        .map_err(|e| anyhow::anyhow!("Failed to create tracing filter: {e}"))?;

    if config.port == 0 {
        tracing::info!("No PORT environment variable set, using port 0 for auto-assignment");
    }
    match &config.identity {
        IdentityBackend::Headers => {
            tracing::info!("Resolving users from platform identity headers")
        }
        IdentityBackend::Fixed { email, .. } => tracing::warn!(
            "Fixed identity backend active, every request is signed in as {}",
            email.as_deref().unwrap_or("nobody")
        ),
    }

    let state = AppState::new(config.identity_provider());
    let app_router = routes::router(state);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;
    let actual_port = listener.local_addr()?.port();

    tracing::info!("Server running on http://{}:{actual_port}", config.host);

    axum::serve(listener, app_router).await?;
    Ok(())
}
