use std::net::SocketAddr;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use shuttle_server::board::BoardConfig;
use shuttle_server::schedules;
use shuttle_server::web::{AppState, create_router};

/// Default schedule file, next to the binary's working directory.
const DEFAULT_SCHEDULE_FILE: &str = "schedules.json";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Schedules are configuration; a malformed file is fatal at startup.
    let schedule_path = std::env::var("SCHEDULE_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SCHEDULE_FILE));
    let registry = match schedules::load(&schedule_path) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Failed to load {}: {e}", schedule_path.display());
            std::process::exit(1);
        }
    };
    tracing::info!(
        path = %schedule_path.display(),
        routes = registry.len(),
        default_stop = registry.default_stop(),
        "loaded schedules"
    );

    let state = AppState::new(registry, BoardConfig::default());
    let app = create_router(state, "static");

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Shuttle departure board listening on http://{addr}");
    println!();
    println!("Endpoints:");
    println!("  GET /                 - Board page (stop, direction, at params)");
    println!("  GET /health           - Health check");
    println!("  GET /api/board        - Board as JSON");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
