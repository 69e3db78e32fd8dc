//! Server-side rendered HTML pages (no JavaScript).

pub mod dictionary;
pub mod links;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;

use datadict_app::ports::CatalogSource;

use crate::state::AppState;

/// Failure while rendering an HTML page.
#[derive(Debug)]
pub struct DashboardError(askama::Error);

impl From<askama::Error> for DashboardError {
    fn from(err: askama::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "template rendering failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<h1>Internal server error</h1>"),
        )
            .into_response()
    }
}

/// Build the dashboard sub-router for SSR HTML pages.
///
/// `page_path` is where the dictionary is mounted; `/` redirects to it.
pub fn routes<S>(page_path: &str) -> Router<AppState<S>>
where
    S: CatalogSource + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index::<S>))
        .route(page_path, get(dictionary::page::<S>))
}

/// `GET /` — redirect to the dictionary page.
async fn index<S>(State(state): State<AppState<S>>) -> Redirect
where
    S: CatalogSource + Send + Sync + 'static,
{
    Redirect::to(&state.page.path)
}
