mod auth;
mod config;
mod pages;
mod routes;
mod state;
mod validate;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    // Configuration errors are fatal and name the offending variable.
    let config = config::AppConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "invalid configuration");
        std::process::exit(1);
    });

    let provider = auth::SupabaseAuth::new(&config).unwrap_or_else(|e| {
        tracing::error!(error = %e, "auth client init failed");
        std::process::exit(1);
    });

    let port = config.port;
    let state = state::AppState::new(config, Arc::new(provider));

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "inventory-pro listening");
    axum::serve(listener, app).await.expect("server failed");
}
