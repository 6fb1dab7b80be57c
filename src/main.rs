use atlas::server::{config::Config, model::app::AppState, router, startup};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), atlas::server::error::Error> {
    let country_client = startup::build_country_client(&config)?;
    let session = startup::connect_to_session(&config).await?;
    let db = startup::connect_to_database(&config).await?;
    let cors = startup::build_cors(&config)?;

    let app = router::app(AppState { db, country_client }, config.static_dir.clone())
        .layer(session)
        .layer(cors);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address).await?;

    tracing::info!("Atlas listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}
