//! chatGate gateway dev binary.
//!
//! Serves the restrictions endpoint over an in-memory directory so the
//! policy file and query surface can be exercised without a host platform.
//! Real deployments embed the library and supply their own directories.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use chatgate_gateway::{app_state::AppState, config, directory::InMemoryDirectory, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("chatgate.yaml").expect("config load failed");

    let dir = Arc::new(InMemoryDirectory::new());
    let state = AppState::new(dir.clone(), dir);
    state.config().replace(Arc::new(cfg));

    let app = router::build_router(state);

    let listen: SocketAddr = "0.0.0.0:8080".parse().expect("listen addr");
    tracing::info!(%listen, "chatgate-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
