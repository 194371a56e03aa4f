use axum::{
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod middleware;

use self::middleware::{request_id_middleware, response_framing_middleware};
use crate::controllers::{health, save::SaveController};
use crate::infrastructure::config::Config;

/// Build the relay's router with all routes and response framing configured
pub fn create_router(config: Arc<Config>, save_controller: Arc<SaveController>) -> Router {
    // The save route is registered for every method; the handler rejects
    // non-GET itself so the 405 carries the relay's JSON body and the
    // framing headers.
    let save_routes = Router::new()
        .route("/api/save", any(SaveController::save))
        .with_state(save_controller);

    Router::new()
        .route("/health", get(health::health))
        .merge(save_routes)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(axum::middleware::from_fn_with_state(
            config,
            response_framing_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    save_controller: Arc<SaveController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(config.clone(), save_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
