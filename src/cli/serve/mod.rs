//! Serve command - runs API + UI combined on the same port

use clap::Args;
use tokio::net::TcpListener;
use tracing::info;

use super::api::shutdown_signal;
use super::{build_socket_addr, load_config};
use crate::api::create_router_with_ui;
use crate::infrastructure::logging::{self, LoggingConfig};
use crate::infrastructure::observability::init_metrics;

/// Arguments for the serve command
#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Directory holding the static HTML form
    #[arg(long, default_value = "public")]
    pub ui_dir: String,
}

/// Run the combined API + UI server
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    let config = load_config()?;
    logging::init_logging(&LoggingConfig::from(&config.logging));

    let state = crate::create_app_state_with_config(&config)?;
    let metrics = init_metrics(&config.observability.metrics);
    let app = create_router_with_ui(state, metrics, &args.ui_dir);

    let addr = build_socket_addr(&config)?;
    info!("Starting server (API + UI) on {}, UI from {}", addr, args.ui_dir);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
