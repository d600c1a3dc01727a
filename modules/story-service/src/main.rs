//! Story Service — standalone binary serving CRUD over an in-memory story list.
//!
//! Default: http://127.0.0.1:9201/stories

mod config;
mod routes;
mod store;

use routes::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = config::Config::from_env();
    let state = Arc::new(AppState::new());

    let cors = tower_http::cors::CorsLayer::permissive();
    let app = routes::router(state).layer(cors);

    let addr = config.bind_addr();
    log::info!("Story Service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server error");
}
