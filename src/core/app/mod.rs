use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::core::generator::Generator;
use crate::core::models::RenderOptions;
use crate::utils::qrcode::PngQrEncoder;
use crate::web::server::WebServer;

pub struct App {
    host: String,
    port: u16,
    open_browser: bool,
}

impl App {
    pub fn new(host: String, port: u16, open_browser: bool) -> Self {
        Self {
            host,
            port,
            open_browser,
        }
    }

    pub async fn run(&self) -> Result<()> {
        // 0.0.0.0 is a bind address, not something a browser can visit
        let display_host = if self.host == "0.0.0.0" {
            "127.0.0.1"
        } else {
            self.host.as_str()
        };
        let url = format!("http://{}:{}", display_host, self.port);
        info!("QR code generator available at: {}", url);

        // One controller instance for the whole session; render options are
        // fixed for the lifetime of the process.
        let generator = Arc::new(Mutex::new(Generator::new(
            Arc::new(PngQrEncoder),
            RenderOptions::default(),
        )));

        if self.open_browser {
            if let Err(e) = open::that(&url) {
                error!("Failed to open browser: {}", e);
            }
        }

        let addr: SocketAddr = format!("{}:{}", self.host, self.port).parse()?;
        let server = WebServer::new(addr, generator);

        let shutdown_signal = async {
            signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
            info!("Received Ctrl+C, shutting down gracefully...");
        };

        tokio::select! {
            result = server.run() => {
                if let Err(e) = result {
                    error!("Server error: {}", e);
                }
            }
            _ = shutdown_signal => {
                info!("Shutdown signal received");
            }
        }

        info!("Shutdown complete");
        Ok(())
    }
}
