use std::{env, net::SocketAddr, path::Path};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, AppState};
use service::storage::{json_file_store::JsonFileStore, Store};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

// The frontend is served separately; allow every origin.
fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
            let port = env::var("PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8000);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

fn load_data_dir() -> String {
    match configs::load_default() {
        Ok(mut cfg) => {
            cfg.store.normalize_from_env();
            cfg.store.data_dir
        }
        Err(_) => env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
    }
}

/// Open the document store, falling back to a disconnected handle when the
/// backing file cannot be initialized. Requests then answer 500 instead of
/// the process refusing to start.
async fn open_store(data_dir: &str) -> Store {
    let path = Path::new(data_dir).join("documents.json");
    match JsonFileStore::new(path).await {
        Ok(backend) => Store::connected(backend),
        Err(e) => {
            warn!(error = %e, "document store unavailable at startup");
            Store::disconnected()
        }
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let data_dir = load_data_dir();
    if let Err(e) = common::env::ensure_data_dir(&data_dir).await {
        warn!(error = %e, "data directory unavailable");
    }
    let store = open_store(&data_dir).await;
    let state = AppState { store, data_dir };

    let cors = build_cors();
    let app: Router = routes::build_router(cors, state);

    let addr = load_bind_addr()?;
    info!(%addr, "starting content backend");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
