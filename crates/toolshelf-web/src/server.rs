//! Axum server setup and router construction.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::api::{self, AppState};
use crate::pages;

/// Build the full axum router.
///
/// The router serves:
/// - HTML pages at `/` and `/tools/{id}`
/// - JSON API at `/api/*` and `/health`
/// - Optional static files from `static_dir` for every other path
pub fn build_router(state: AppState, static_dir: Option<PathBuf>) -> Router {
    // Read-only JSON API; any origin may fetch it.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/api/tools", get(api::list_tools))
        .route("/api/tools/{id}", get(api::get_tool))
        .route("/api/categories", get(api::list_categories))
        .route("/health", get(api::health))
        .layer(cors);

    let page_routes = Router::new()
        .route("/", get(pages::listing))
        .route("/tools/{id}", get(pages::detail));

    let mut router = Router::new().merge(page_routes).merge(api_routes);

    router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router.fallback(pages::not_found),
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Bind `bind_addr` and serve `router` on a background task.
///
/// Returns the bound address (useful with port 0).
pub async fn start_server(router: Router, bind_addr: SocketAddr) -> std::io::Result<SocketAddr> {
    let listener = TcpListener::bind(bind_addr).await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            error!("Server error: {e}");
        }
    });

    Ok(addr)
}

/// Bind `bind_addr` and serve `router` in the foreground.
pub async fn run_server(router: Router, bind_addr: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind_addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await
}
