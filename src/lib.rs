//! urlqr - Turn any URL into a downloadable QR code from your browser
//!
//! This crate serves a small web interface where a user types a URL and
//! receives a 320px PNG QR code encoding it, offered as a download.

pub mod cli;
pub mod core;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::core::{
    config::AppConfig,
    error::{AppError, AppResult},
    generator::{Generator, QrEncoder},
    models::{GeneratorState, QrArtifact, RenderOptions},
};

pub use utils::{
    network::{is_port_available, pick_port},
    qrcode::PngQrEncoder,
    validate::is_valid_url,
};

pub use web::{routes::create_routes, server::WebServer};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
