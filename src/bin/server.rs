//! Deskgate query server
//!
//! Run with: cargo run --features server --bin deskgate-server
//!
//! Configuration (environment):
//!   DESKGATE_POLICY  - JSON policy document (default: reference policy)
//!   DESKGATE_ADDR    - bind address (default: 0.0.0.0)
//!   PORT             - bind port (default: 3000)
//!   RUST_LOG         - tracing filter, e.g. "deskgate=debug,tower_http=info"

use deskgate::{server, Gate, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let config = ServerConfig::from_env()?;
    // Loaded once, before the first query; never reloaded
    let policy = config.policy()?;
    tracing::info!(
        grants = policy.len(),
        fingerprint = %policy.fingerprint(),
        "policy ready"
    );

    let app = server::router(Gate::new(policy));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "deskgate server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
