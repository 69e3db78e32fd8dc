//! Shared application state for axum handlers.

use std::sync::Arc;

use datadict_app::ports::CatalogSource;
use datadict_app::services::dictionary_service::DictionaryService;

/// Default URL path of the dictionary page.
pub const DEFAULT_PAGE_PATH: &str = "/attribute-dictionary";
/// Default page title.
pub const DEFAULT_PAGE_TITLE: &str = "Data dictionary";

/// Presentation settings of the dictionary page.
#[derive(Debug, Clone)]
pub struct PageSettings {
    /// Path the page is served under; every generated link is relative to it.
    pub path: String,
    /// Title shown in `<title>` and the page heading.
    pub title: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            path: DEFAULT_PAGE_PATH.to_string(),
            title: DEFAULT_PAGE_TITLE.to_string(),
        }
    }
}

/// Application state shared across all axum handlers.
///
/// Generic over the catalog source to avoid dynamic dispatch.
/// `Clone` is implemented manually so the source itself does not need to be
/// `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<S> {
    /// Dictionary read service.
    pub dictionary: Arc<DictionaryService<S>>,
    /// Page presentation settings.
    pub page: Arc<PageSettings>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            dictionary: Arc::clone(&self.dictionary),
            page: Arc::clone(&self.page),
        }
    }
}

impl<S> AppState<S>
where
    S: CatalogSource + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(dictionary: DictionaryService<S>, page: PageSettings) -> Self {
        Self {
            dictionary: Arc::new(dictionary),
            page: Arc::new(page),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service is also shared with background tasks
    /// (e.g. a reload trigger) before constructing the HTTP state.
    pub fn from_arc(dictionary: Arc<DictionaryService<S>>, page: PageSettings) -> Self {
        Self {
            dictionary,
            page: Arc::new(page),
        }
    }
}
