use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::core::generator::Generator;
use crate::web::routes::create_routes;

pub struct WebServer {
    addr: SocketAddr,
    generator: Arc<Mutex<Generator>>,
}

impl WebServer {
    pub fn new(addr: SocketAddr, generator: Arc<Mutex<Generator>>) -> Self {
        Self { addr, generator }
    }

    pub async fn run(&self) -> Result<()> {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let app = create_routes(Arc::clone(&self.generator))
            .layer(TraceLayer::new_for_http())
            .layer(cors);

        info!("Starting web server on {}", self.addr);
        let listener = TcpListener::bind(self.addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
