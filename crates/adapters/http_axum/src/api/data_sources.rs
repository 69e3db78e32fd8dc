//! JSON REST handler for data sources.

use axum::Json;
use axum::extract::State;

use datadict_app::ports::CatalogSource;

use crate::state::AppState;

/// `GET /api/data-sources` — distinct data sources, sorted.
pub async fn list<S>(State(state): State<AppState<S>>) -> Json<Vec<String>>
where
    S: CatalogSource + Send + Sync + 'static,
{
    Json(state.dictionary.list_data_sources().await)
}
