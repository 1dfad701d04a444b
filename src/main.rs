mod bot;
mod config;
mod controller;
mod data;
mod error;
mod model;
mod router;
mod service;
mod startup;
mod state;

use std::net::SocketAddr;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, service::token::TokenIssuer, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let token_issuer = TokenIssuer::new(&config.jwt_secret);

    // Start the Discord bot in a separate task
    let bot_token = config.discord_bot_token.clone();
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(&bot_token).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let app = router::router()
        .with_state(AppState::new(db, token_issuer))
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server is running on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
