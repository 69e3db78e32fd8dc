//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod data_sources;
#[allow(clippy::missing_errors_doc)]
pub mod events;

use axum::Router;
use axum::routing::get;

use datadict_app::ports::CatalogSource;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: CatalogSource + Send + Sync + 'static,
{
    Router::new()
        // Events
        .route("/events", get(events::list::<S>))
        .route("/events/{name}", get(events::get::<S>))
        // Data sources
        .route("/data-sources", get(data_sources::list::<S>))
}
