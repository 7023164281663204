pub mod app;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
