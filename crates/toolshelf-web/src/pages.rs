//! HTML page handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use toolshelf::{DetailState, FilterParams};

use crate::api::AppState;
use crate::render;

/// GET /?category=&q=: Listing page.
///
/// Loads the collection once for this page view and renders the filtered
/// grid. A failed load renders the empty state.
pub async fn listing(
    State(app): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Html<String> {
    let engine = app.listing_engine();
    engine.load_all().await;
    let view = engine.view(&params);
    Html(render::listing::page(&params, &view))
}

/// GET /tools/{id}: Detail page.
///
/// 404 with the "Tool not found" page when the id is unknown, 502 with a
/// generic failure page when the fetch fails.
pub async fn detail(State(app): State<AppState>, Path(id): Path<String>) -> Response {
    match app.detail_loader().load_by_id(&id).await {
        DetailState::Found(tool) => Html(render::detail::page(&tool)).into_response(),
        DetailState::NotFound => {
            (StatusCode::NOT_FOUND, Html(render::detail::not_found())).into_response()
        }
        DetailState::Failed | DetailState::Loading => {
            (StatusCode::BAD_GATEWAY, Html(render::detail::failed())).into_response()
        }
    }
}

/// Fallback for unknown paths when no static directory is configured.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(render::detail::not_found())).into_response()
}
