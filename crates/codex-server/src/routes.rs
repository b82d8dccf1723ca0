//! Route surface: one listing route and one detail route per collection.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use codex_data::Collection;
use codex_render::{pages, EntityLinker};

use crate::provider::DataProvider;

pub fn router(provider: DataProvider) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/:collection", get(index_page))
        .route("/:collection/:name", get(detail_page))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(provider))
}

/// A failed catalogue load is the one hard failure a render can hit.
struct LoadFailure(codex_data::CatalogError);

impl IntoResponse for LoadFailure {
    fn into_response(self) -> Response {
        tracing::error!("catalogue load failed: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "catalogue unavailable".to_string(),
        )
            .into_response()
    }
}

async fn home(State(provider): State<Arc<DataProvider>>) -> Result<Html<String>, LoadFailure> {
    let catalog = provider.load().map_err(LoadFailure)?;
    Ok(Html(pages::home(&catalog)))
}

async fn index_page(
    State(provider): State<Arc<DataProvider>>,
    Path(collection): Path<String>,
) -> Result<Response, LoadFailure> {
    let Some(collection) = Collection::from_segment(&collection) else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };
    let catalog = provider.load().map_err(LoadFailure)?;
    Ok(Html(pages::collection_index(&catalog, collection)).into_response())
}

async fn detail_page(
    State(provider): State<Arc<DataProvider>>,
    Path((collection, name)): Path<(String, String)>,
) -> Result<Response, LoadFailure> {
    let Some(collection) = Collection::from_segment(&collection) else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };
    let catalog = provider.load().map_err(LoadFailure)?;
    let linker = EntityLinker::from_catalog(&catalog);
    // Lookup misses render a not-found page, not an error status.
    Ok(Html(pages::detail(&catalog, &linker, collection, &name)).into_response())
}
