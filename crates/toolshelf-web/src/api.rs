//! JSON API endpoint handlers.
//!
//! These mirror the HTML pages for clients that render on their own. Each
//! request builds its own engine or loader, so no state outlives a request.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use toolshelf::{
    CATEGORIES, Category, DetailLoader, DetailState, FilterParams, ListingEngine, ListingFilter,
    ListingView, Tool, ToolStore,
};

/// Shared application state passed to all handlers via axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ToolStore>,
    pub filter: Arc<dyn ListingFilter>,
}

impl AppState {
    /// State with the default client-side filter.
    pub fn new(store: Arc<dyn ToolStore>) -> Self {
        Self {
            store,
            filter: Arc::new(toolshelf::ClientFilter),
        }
    }

    /// A fresh listing engine for one page view.
    pub fn listing_engine(&self) -> ListingEngine {
        ListingEngine::with_filter(self.store.clone(), self.filter.clone())
    }

    /// A fresh detail loader for one page view.
    pub fn detail_loader(&self) -> DetailLoader {
        DetailLoader::new(self.store.clone())
    }
}

/// Error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// API error that converts to an HTTP response.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "Tool not found",
        }
    }

    pub fn upstream() -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: "Failed to load tool",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message.to_string(),
        };
        (self.status, Json(body)).into_response()
    }
}

/// GET /api/tools?category=&q=: Filtered listing view.
///
/// Returns `{"state":"tools","tools":[...]}` or `{"state":"empty"}`. A
/// failed store fetch yields the empty state.
pub async fn list_tools(
    State(app): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Json<ListingView> {
    let engine = app.listing_engine();
    engine.load_all().await;
    Json(engine.view(&params))
}

/// GET /api/tools/{id}: A single tool.
///
/// Returns 404 when the store has no such tool and 502 when the fetch fails.
pub async fn get_tool(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Tool>, ApiError> {
    match app.detail_loader().load_by_id(&id).await {
        DetailState::Found(tool) => Ok(Json(tool)),
        DetailState::NotFound => Err(ApiError::not_found()),
        DetailState::Failed | DetailState::Loading => Err(ApiError::upstream()),
    }
}

/// GET /api/categories: The fixed category vocabulary.
pub async fn list_categories() -> Json<&'static [Category]> {
    Json(CATEGORIES)
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health: Liveness probe. Does not touch the store.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_serializes() {
        let json = serde_json::to_value(ErrorBody {
            error: "Tool not found".into(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"error": "Tool not found"}));
    }

    #[test]
    fn api_error_statuses() {
        assert_eq!(ApiError::not_found().into_response().status(), 404);
        assert_eq!(ApiError::upstream().into_response().status(), 502);
    }

    #[tokio::test]
    async fn categories_lists_fixed_vocabulary() {
        let Json(categories) = list_categories().await;
        let slugs: Vec<&str> = categories.iter().map(|c| c.slug).collect();
        assert_eq!(
            slugs,
            vec![
                "sales-marketing",
                "customer-service",
                "productivity",
                "content-creation",
                "development"
            ]
        );
    }
}
