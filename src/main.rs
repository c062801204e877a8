use axum::http::HeaderValue;
use gestione_corsi::server::{
    config::Config, error::AppError, router, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let cors_origin = match HeaderValue::from_str(&config.cors_allow_origin) {
        Ok(origin) => Some(origin),
        Err(_) => {
            tracing::warn!(
                "CORS_ALLOW_ORIGIN '{}' is not a valid header value, allowing any origin",
                config.cors_allow_origin
            );
            None
        }
    };

    let app = router::router(cors_origin).with_state(AppState::new(db.clone()));

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Starting server on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped, closing database connection");
    db.close().await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
