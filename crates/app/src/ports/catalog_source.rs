//! Catalog source port — access to the pre-built data layer.

use std::future::Future;

use datadict_domain::error::DataDictError;
use datadict_domain::event::Event;

/// Produces the dictionary events from the external data layer.
pub trait CatalogSource {
    /// Read every event currently published by the data layer.
    ///
    /// Order does not matter; the catalog sorts events by name.
    fn load(&self) -> impl Future<Output = Result<Vec<Event>, DataDictError>> + Send;
}

impl<T: CatalogSource + Send + Sync> CatalogSource for std::sync::Arc<T> {
    fn load(&self) -> impl Future<Output = Result<Vec<Event>, DataDictError>> + Send {
        (**self).load()
    }
}
