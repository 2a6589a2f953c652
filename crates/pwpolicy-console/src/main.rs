//! pwPolicy console binary.
//!
//! Config path: `$PWPOLICY_CONFIG`, default `pwpolicy.yaml`.
//! Log filter: `RUST_LOG`.

use tracing_subscriber::{fmt, EnvFilter};

use pwpolicy_console::{app_state, config, router};
use pwpolicy_core::error::{PolicyError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::var("PWPOLICY_CONFIG").unwrap_or_else(|_| "pwpolicy.yaml".into());
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.console.listen_addr()?;

    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, config = %path, "pwpolicy-console starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| PolicyError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| PolicyError::Internal(format!("server failed: {e}")))
}
