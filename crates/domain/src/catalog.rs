//! Catalog — the validated, name-sorted collection of events loaded from
//! the data layer.

use std::collections::BTreeSet;

use crate::error::{NotFoundError, ValidationError};
use crate::event::Event;
use crate::query::{QueryParams, VisibleNames, visible_event_names};

/// Immutable set of events served by the dictionary.
///
/// Events are sorted by name and names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    events: Vec<Event>,
}

impl Catalog {
    /// Validate `events` and sort them by name.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when an event or attribute is unnamed,
    /// or when two events share a name.
    pub fn new(mut events: Vec<Event>) -> Result<Self, ValidationError> {
        for event in &events {
            event.validate()?;
        }
        events.sort_by(|a, b| a.name.cmp(&b.name));
        if let Some(pair) = events.windows(2).find(|pair| pair[0].name == pair[1].name) {
            return Err(ValidationError::DuplicateEvent(pair[0].name.clone()));
        }
        Ok(Self { events })
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Find an event by exact name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Event> {
        self.events
            .binary_search_by(|event| event.name.as_str().cmp(name))
            .ok()
            .map(|idx| &self.events[idx])
    }

    /// Find an event by exact name, failing when absent.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when no event is named `name`.
    pub fn get(&self, name: &str) -> Result<&Event, NotFoundError> {
        self.find(name).ok_or_else(|| NotFoundError {
            kind: "Event",
            name: name.to_string(),
        })
    }

    /// Distinct data sources across all events, sorted.
    #[must_use]
    pub fn data_sources(&self) -> Vec<&str> {
        self.events
            .iter()
            .flat_map(|event| event.data_sources.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Names of events passing the `dataSource` and `event` filters.
    #[must_use]
    pub fn visible_names(&self, params: &QueryParams) -> VisibleNames {
        visible_event_names(&self.events, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Attribute;

    fn event(name: &str, sources: &[&str]) -> Event {
        sources
            .iter()
            .fold(Event::builder().name(name), |builder, source| {
                builder.data_source(*source)
            })
            .build()
            .unwrap()
    }

    #[test]
    fn should_sort_events_by_name() {
        let catalog = Catalog::new(vec![
            event("Transaction", &["APM"]),
            event("PageView", &["Browser"]),
            event("Span", &["APM"]),
        ])
        .unwrap();

        let names: Vec<&str> = catalog.events().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["PageView", "Span", "Transaction"]);
    }

    #[test]
    fn should_reject_duplicate_event_names() {
        let result = Catalog::new(vec![
            event("Span", &["APM"]),
            event("Transaction", &["APM"]),
            event("Span", &["Browser"]),
        ]);
        assert_eq!(
            result,
            Err(ValidationError::DuplicateEvent("Span".to_string()))
        );
    }

    #[test]
    fn should_reject_unnamed_attribute() {
        let mut broken = event("Span", &["APM"]);
        broken.attributes.push(Attribute::builder().build());
        let result = Catalog::new(vec![broken]);
        assert!(matches!(
            result,
            Err(ValidationError::EmptyAttributeName { .. })
        ));
    }

    #[test]
    fn should_find_event_by_exact_name() {
        let catalog = Catalog::new(vec![event("Span", &["APM"]), event("Metric", &[])]).unwrap();
        assert_eq!(catalog.find("Span").map(|e| e.name.as_str()), Some("Span"));
        assert!(catalog.find("span").is_none());
    }

    #[test]
    fn should_return_not_found_error_for_unknown_event() {
        let catalog = Catalog::new(vec![event("Span", &["APM"])]).unwrap();
        let err = catalog.get("Log").unwrap_err();
        assert_eq!(err.kind, "Event");
        assert_eq!(err.name, "Log");
    }

    #[test]
    fn should_list_distinct_data_sources_sorted() {
        let catalog = Catalog::new(vec![
            event("Transaction", &["APM"]),
            event("Span", &["Browser", "APM"]),
            event("PageView", &["Browser"]),
        ])
        .unwrap();
        assert_eq!(catalog.data_sources(), vec!["APM", "Browser"]);
    }

    #[test]
    fn should_compute_visible_names_in_sorted_order() {
        let catalog = Catalog::new(vec![
            event("Transaction", &["APM"]),
            event("Span", &["APM"]),
            event("PageView", &["Browser"]),
        ])
        .unwrap();
        let visible = catalog.visible_names(&QueryParams::default().with_data_source("APM"));
        assert_eq!(visible.iter().collect::<Vec<_>>(), vec!["Span", "Transaction"]);
    }

    #[test]
    fn should_be_empty_by_default() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.data_sources().is_empty());
    }
}
