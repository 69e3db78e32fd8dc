//! JSON REST handlers for events.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use datadict_app::ports::CatalogSource;
use datadict_domain::event::Event;
use datadict_domain::query::VisibleNames;

use crate::error::ApiError;
use crate::extract::Filters;
use crate::state::AppState;

/// Body of the list endpoint.
#[derive(Debug, Serialize)]
pub struct EventList {
    /// Number of events in the catalog.
    pub total: usize,
    /// Names passing the `dataSource` and `event` filters.
    pub visible: VisibleNames,
    /// Visible events, attributes restricted by the `attribute` filter.
    pub events: Vec<Event>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<EventList>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Event>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/events` — events passing the query-string filters.
pub async fn list<S>(
    State(state): State<AppState<S>>,
    Filters(params): Filters,
) -> ListResponse
where
    S: CatalogSource + Send + Sync + 'static,
{
    let filtered = state.dictionary.filter_events(&params).await;
    ListResponse::Ok(Json(EventList {
        total: filtered.total,
        visible: filtered.visible,
        events: filtered.events,
    }))
}

/// `GET /api/events/{name}` — one event by exact name.
pub async fn get<S>(
    State(state): State<AppState<S>>,
    Path(name): Path<String>,
) -> Result<GetResponse, ApiError>
where
    S: CatalogSource + Send + Sync + 'static,
{
    let event = state.dictionary.get_event(&name).await?;
    Ok(GetResponse::Ok(Json(event)))
}
