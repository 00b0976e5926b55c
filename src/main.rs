//! Binary entry point - wires configuration, the HTTP client, and the
//! view-model together, then hands control to the interactive session.

use std::sync::Arc;

use dotenvy::dotenv;
use stockroom::{
    api::HttpProductApi,
    config,
    core::Inventory,
    errors::Result,
    ui,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    // 3. Resolve the API endpoint
    let base_url = config::resolve_base_url()?;
    info!("Talking to product API at {base_url}.");

    // 4. Build the client and the view-model, then run the session
    let api = Arc::new(HttpProductApi::new(&base_url));
    let mut inventory = Inventory::new(api);

    ui::run_session(&mut inventory).await
}
