//! JSON implementation of [`CatalogSource`].

use std::borrow::Cow;
use std::path::PathBuf;

use datadict_app::ports::CatalogSource;
use datadict_domain::error::DataDictError;
use datadict_domain::event::Event;

use crate::error::CatalogError;
use crate::payload;

/// Catalog source backed by a JSON payload.
#[derive(Debug, Clone)]
pub enum JsonCatalogSource {
    /// Payload read from disk on every load.
    File(PathBuf),
    /// Payload held in memory.
    Inline(String),
}

impl JsonCatalogSource {
    /// Read the payload from `path` each time the catalog is loaded.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Serve a payload already held in memory.
    #[must_use]
    pub fn inline(content: impl Into<String>) -> Self {
        Self::Inline(content.into())
    }

    async fn read(&self) -> Result<Cow<'_, str>, CatalogError> {
        match self {
            Self::File(path) => tokio::fs::read_to_string(path)
                .await
                .map(Cow::Owned)
                .map_err(|source| CatalogError::Io {
                    path: path.clone(),
                    source,
                }),
            Self::Inline(content) => Ok(Cow::Borrowed(content.as_str())),
        }
    }
}

impl CatalogSource for JsonCatalogSource {
    async fn load(&self) -> Result<Vec<Event>, DataDictError> {
        let content = self.read().await?;
        let events = payload::parse(&content)?;
        tracing::debug!(events = events.len(), "parsed catalog payload");
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"[
        {"name": "Transaction", "dataSources": ["APM"]},
        {"name": "PageView", "dataSources": ["Browser"]}
    ]"#;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("datadict-{}-{name}.json", std::process::id()))
    }

    #[tokio::test]
    async fn should_load_inline_payload() {
        let source = JsonCatalogSource::inline(PAYLOAD);
        let events = source.load().await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name, "Transaction");
    }

    #[tokio::test]
    async fn should_load_payload_from_file() {
        let path = temp_path("load");
        tokio::fs::write(&path, PAYLOAD).await.unwrap();

        let events = JsonCatalogSource::file(&path).load().await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[1].data_sources, vec!["Browser".to_string()]);
    }

    #[tokio::test]
    async fn should_return_source_error_when_file_is_missing() {
        let source = JsonCatalogSource::file(temp_path("missing"));
        let err = source.load().await.unwrap_err();

        let DataDictError::Source(inner) = err else {
            panic!("expected a source error");
        };
        let inner = inner.downcast::<CatalogError>().unwrap();
        assert!(matches!(*inner, CatalogError::Io { .. }));
    }

    #[tokio::test]
    async fn should_return_source_error_for_invalid_payload() {
        let source = JsonCatalogSource::inline("not json");
        let result = source.load().await;
        assert!(matches!(result, Err(DataDictError::Source(_))));
    }
}
