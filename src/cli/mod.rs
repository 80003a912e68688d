//! CLI module for the laptop price predictor
//!
//! Provides subcommands for running the predictor in different modes:
//! - `serve`: API + UI combined
//! - `api`: API server only
//! - `predict`: score a single laptop from the command line

pub mod api;
pub mod predict;
pub mod serve;

use std::net::SocketAddr;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;

/// Laptop Price Predictor - price estimates with per-feature contributions
#[derive(Parser)]
#[command(name = "laptop-price")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run API + UI server combined
    Serve(serve::ServeArgs),

    /// Run API server only
    Api,

    /// Predict the price of one laptop and print the contributions
    Predict(predict::PredictArgs),
}

/// Load `.env` and the layered configuration
pub(crate) fn load_config() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();
    Ok(AppConfig::load()?)
}

pub(crate) fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}
