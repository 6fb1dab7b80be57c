use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::RedisStore;
use tracing_subscriber::{fmt, EnvFilter};

use crate::server::{
    config::Config,
    error::{config::ConfigError, Error},
};

/// Install the global tracing subscriber, filtered by `RUST_LOG` (default `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).init();
}

/// Build the REST Countries client with the configured endpoint and timeout
pub fn build_country_client(config: &Config) -> Result<country_api::Client, Error> {
    let client = country_api::Client::builder()
        .base_url(&config.country_api_url)
        .timeout(config.country_api_timeout)
        .user_agent(&config.user_agent)
        .build()?;

    Ok(client)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<tower_sessions_redis_store::fred::prelude::Pool>>, Error>
{
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};
    use tower_sessions_redis_store::fred::prelude::*;

    let config = Config::from_url(&config.valkey_url)?;
    let pool = Pool::new(config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Secure cookies need HTTPS, which local development doesn't have
    let secure_cookies = !cfg!(debug_assertions);

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Allow credentialed requests from the configured client origin
pub fn build_cors(config: &Config) -> Result<CorsLayer, Error> {
    let origin = config
        .client_url
        .trim_end_matches('/')
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: "CLIENT_URL".to_string(),
            reason: e.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]))
}

/// Resolves once Ctrl+C or SIGTERM is received
pub async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }

        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
