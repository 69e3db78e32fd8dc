//! Dictionary service — use-cases for reading the attribute dictionary.

use std::sync::Arc;

use tokio::sync::RwLock;

use datadict_domain::catalog::Catalog;
use datadict_domain::error::DataDictError;
use datadict_domain::event::Event;
use datadict_domain::query::{QueryParams, VisibleNames};

use crate::ports::CatalogSource;

/// Events passing a set of filters, detached from the catalog.
#[derive(Debug, Clone)]
pub struct FilteredEvents {
    /// Number of events in the catalog.
    pub total: usize,
    /// Names passing the `dataSource` and `event` filters.
    pub visible: VisibleNames,
    /// Visible events, attributes restricted by the `attribute` filter.
    pub events: Vec<Event>,
}

/// Application service holding the currently loaded [`Catalog`].
///
/// The catalog is replaced wholesale on [`reload`](Self::reload); readers
/// keep the `Arc` they obtained and never see a partial update.
pub struct DictionaryService<S> {
    source: S,
    catalog: RwLock<Arc<Catalog>>,
}

impl<S: CatalogSource> DictionaryService<S> {
    /// Create a new service reading from `source`, starting with an empty catalog.
    pub fn new(source: S) -> Self {
        Self {
            source,
            catalog: RwLock::new(Arc::new(Catalog::default())),
        }
    }

    /// Load the events from the source and swap in the new catalog.
    ///
    /// Returns the number of loaded events. The previous catalog stays in
    /// place when loading or validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`DataDictError::Source`] when the source fails, or
    /// [`DataDictError::Validation`] when the events break catalog invariants.
    #[tracing::instrument(skip(self))]
    pub async fn reload(&self) -> Result<usize, DataDictError> {
        let events = self.source.load().await?;
        let catalog = Catalog::new(events)?;
        let count = catalog.len();
        *self.catalog.write().await = Arc::new(catalog);
        tracing::info!(events = count, "catalog loaded");
        Ok(count)
    }

    /// Snapshot of the current catalog.
    pub async fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&*self.catalog.read().await)
    }

    /// Look up one event by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`DataDictError::NotFound`] when no event has that name.
    pub async fn get_event(&self, name: &str) -> Result<Event, DataDictError> {
        let catalog = self.catalog().await;
        Ok(catalog.get(name)?.clone())
    }

    /// Distinct data sources of the current catalog, sorted.
    pub async fn list_data_sources(&self) -> Vec<String> {
        let catalog = self.catalog().await;
        catalog
            .data_sources()
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Visible events under `params`, with attribute tables already filtered.
    pub async fn filter_events(&self, params: &QueryParams) -> FilteredEvents {
        let catalog = self.catalog().await;
        let visible = catalog.visible_names(params);
        let events = catalog
            .events()
            .iter()
            .filter(|event| visible.contains(&event.name))
            .map(|event| Event {
                attributes: event
                    .attributes_matching(params.attribute())
                    .into_iter()
                    .cloned()
                    .collect(),
                ..event.clone()
            })
            .collect();

        tracing::debug!(
            total = catalog.len(),
            visible = visible.len(),
            "filtered events"
        );

        FilteredEvents {
            total: catalog.len(),
            visible,
            events,
        }
    }
}
