use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::core::generator::Generator;
use crate::web::handlers::{
    api::{api_not_found, generate_qr, health_check},
    static_files::serve_index,
};

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<Mutex<Generator>>,
}

pub fn create_routes(generator: Arc<Mutex<Generator>>) -> Router {
    // API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/generate", post(generate_qr))
        .fallback(api_not_found)
        .with_state(AppState { generator });

    // The page itself is a single inline document
    Router::new().nest("/api", api_routes).fallback(serve_index)
}
