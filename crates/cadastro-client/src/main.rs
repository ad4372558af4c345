//! Cadastro client entry point.
//!
//! Wires together the configuration, the HTTP API client, and the shared
//! customer store, then runs the Tokio event loop.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()          -- TOML settings (backend URL, log level)
//!  └─ HttpCustomerApi::new() -- reqwest client for the users resource
//!  └─ CustomerStore::new()   -- shared state the ui_bridge commands read
//!  └─ initial load_customers()
//!  └─ notification pump loop
//! ```
//!
//! The web view itself is an external collaborator: it invokes the
//! `ui_bridge` commands against the same `Arc<CustomerStore>` built here.
//! The pump loop below drains the success-notification queue on a short
//! interval and logs each event, so mutations driven from elsewhere remain
//! visible even with no toast layer attached.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cadastro_client::application::customer_store::CustomerStore;
use cadastro_client::infrastructure::api::HttpCustomerApi;
use cadastro_client::infrastructure::storage::config::load_config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().context("loading configuration")?;

    // Initialise structured logging.  RUST_LOG wins over the config file.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.client.log_level.clone())),
        )
        .init();

    info!("Cadastro client starting");
    info!(base_url = %config.api.base_url, "using REST backend");

    let api = Arc::new(HttpCustomerApi::new(config.api.base_url.clone()));
    let store = CustomerStore::new(api);

    // Initial list load.  A dead backend is not fatal at startup; the list
    // view retries through its own reload command.
    match store.load_customers().await {
        Ok(()) => {
            let count = store.customers().await.len();
            info!(count, "customer list loaded");
        }
        Err(e) => warn!("initial customer load failed: {e}"),
    }

    info!("Cadastro client ready");

    // ── Notification pump ─────────────────────────────────────────────────────
    let mut ticker = tokio::time::interval(Duration::from_millis(500));
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown signal received");
                break;
            }
            _ = ticker.tick() => {
                for notification in store.drain_notifications().await {
                    info!("{}", notification.message());
                }
            }
        }
    }

    info!("Cadastro client stopped");
    Ok(())
}
