//! Server-rendered web UI for the toolshelf SaaS directory.
//!
//! `toolshelf-web` serves an axum application with two HTML pages (the
//! filterable listing at `/` and a detail page at `/tools/{id}`) and a small
//! JSON API mirroring them. Pages are rendered on the server; the filter
//! controls are a plain `GET` form.
//!
//! # Quick start
//!
//! ```ignore
//! use std::sync::Arc;
//! use toolshelf::{MemoryStore, StoreConfig, PostgrestStore};
//! use toolshelf_web::{AppState, WebConfig, spawn_web};
//!
//! let store = Arc::new(PostgrestStore::new(&StoreConfig::from_env()?)?);
//! let addr = spawn_web(AppState::new(store), WebConfig::default()).await?;
//! println!("Directory: http://{addr}");
//! ```
//!
//! # Architecture
//!
//! ```text
//! browser ──GET /?category=&q=──▶ pages::listing ──ListingEngine──▶ Arc<dyn ToolStore>
//!         ──GET /tools/{id}─────▶ pages::detail  ──DetailLoader───▶ Arc<dyn ToolStore>
//! ```
//!
//! The store is constructed once by the caller and injected through
//! [`AppState`]. Engines and loaders are created per request and dropped
//! with the response.

pub mod api;
mod pages;
pub mod render;
mod server;

pub use api::AppState;
pub use server::build_router;

use std::net::SocketAddr;
use std::path::PathBuf;

/// Configuration for the web server.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Address to bind to. Default: `127.0.0.1:3001`.
    pub bind_addr: SocketAddr,
    /// Directory of static assets (logos, favicon) served for unmatched paths.
    ///
    /// If `None`, unmatched paths get the not-found page.
    pub static_dir: Option<PathBuf>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3001)),
            static_dir: None,
        }
    }
}

/// Spawn the web server on a Tokio task and return the bound address.
///
/// The server runs until the Tokio runtime shuts down.
pub async fn spawn_web(state: AppState, config: WebConfig) -> std::io::Result<SocketAddr> {
    let router = server::build_router(state, config.static_dir);
    server::start_server(router, config.bind_addr).await
}

/// Serve in the foreground until the process exits.
pub async fn serve_web(state: AppState, config: WebConfig) -> std::io::Result<()> {
    let router = server::build_router(state, config.static_dir);
    server::run_server(router, config.bind_addr).await
}
