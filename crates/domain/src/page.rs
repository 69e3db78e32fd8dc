//! Dictionary page view model.
//!
//! Every event of the catalog gets an entry; entries outside the visible
//! subset are flagged `hidden` rather than dropped, so renderers keep them
//! in the markup and suppress them presentationally.

use crate::catalog::Catalog;
use crate::event::{Attribute, Event};
use crate::query::{QueryParams, VisibleNames};
use crate::text::pluralize;

/// One event as rendered on the page.
#[derive(Debug, Clone)]
pub struct EventEntry<'a> {
    pub event: &'a Event,
    /// Not part of the visible subset.
    pub hidden: bool,
    /// Attributes after the `attribute` filter, in data-layer order.
    pub attributes: Vec<&'a Attribute>,
}

impl EventEntry<'_> {
    /// `"Data source"` or `"Data sources"` depending on the source count.
    #[must_use]
    pub fn data_source_label(&self) -> String {
        format!("Data {}", pluralize("source", self.event.data_sources.len()))
    }
}

/// Everything needed to render the dictionary for one set of parameters.
#[derive(Debug, Clone)]
pub struct DictionaryPage<'a> {
    params: QueryParams,
    total: usize,
    visible: VisibleNames,
    entries: Vec<EventEntry<'a>>,
    data_sources: Vec<&'a str>,
}

impl<'a> DictionaryPage<'a> {
    /// Build the page for `catalog` under `params`.
    #[must_use]
    pub fn build(catalog: &'a Catalog, params: &QueryParams) -> Self {
        let visible = catalog.visible_names(params);
        let entries = catalog
            .events()
            .iter()
            .map(|event| EventEntry {
                event,
                hidden: !visible.contains(&event.name),
                attributes: event.attributes_matching(params.attribute()),
            })
            .collect();

        Self {
            params: params.clone(),
            total: catalog.len(),
            visible,
            entries,
            data_sources: catalog.data_sources(),
        }
    }

    #[must_use]
    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Number of events in the catalog.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of events passing the filters.
    #[must_use]
    pub fn shown(&self) -> usize {
        self.visible.len()
    }

    /// Whether the filters hide at least one event; drives the clear action.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        self.shown() != self.total
    }

    #[must_use]
    pub fn visible(&self) -> &VisibleNames {
        &self.visible
    }

    #[must_use]
    pub fn entries(&self) -> &[EventEntry<'a>] {
        &self.entries
    }

    /// Distinct data sources of the catalog, sorted.
    #[must_use]
    pub fn data_sources(&self) -> &[&'a str] {
        &self.data_sources
    }

    /// Status readout, e.g. `"Displaying 1 of 3 results"`.
    #[must_use]
    pub fn status(&self) -> String {
        format!("Displaying {} of {} results", self.shown(), self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction_catalog() -> Catalog {
        Catalog::new(vec![
            Event::builder()
                .name("Transaction")
                .data_source("APM")
                .attribute(
                    Attribute::builder()
                        .name("duration")
                        .units("seconds")
                        .event("Transaction")
                        .build(),
                )
                .build()
                .unwrap(),
        ])
        .unwrap()
    }

    fn two_event_catalog() -> Catalog {
        Catalog::new(vec![
            Event::builder()
                .name("Span")
                .data_source("APM")
                .data_source("Browser")
                .attribute(Attribute::builder().name("a1").build())
                .attribute(Attribute::builder().name("a2").build())
                .build()
                .unwrap(),
            Event::builder()
                .name("Transaction")
                .data_source("APM")
                .attribute(Attribute::builder().name("a2").build())
                .build()
                .unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn should_show_everything_without_filters() {
        let catalog = transaction_catalog();
        let page = DictionaryPage::build(&catalog, &QueryParams::default());

        assert_eq!(page.status(), "Displaying 1 of 1 results");
        assert!(!page.is_filtered());
        assert_eq!(page.entries().len(), 1);

        let entry = &page.entries()[0];
        assert!(!entry.hidden);
        assert_eq!(entry.attributes.len(), 1);
        assert_eq!(entry.attributes[0].name, "duration");
        assert_eq!(entry.attributes[0].units.as_deref(), Some("seconds"));
    }

    #[test]
    fn should_hide_but_keep_events_outside_data_source() {
        let catalog = transaction_catalog();
        let params = QueryParams::default().with_data_source("Browser");
        let page = DictionaryPage::build(&catalog, &params);

        assert_eq!(page.status(), "Displaying 0 of 1 results");
        assert!(page.is_filtered());
        assert_eq!(page.entries().len(), 1);
        assert!(page.entries()[0].hidden);
    }

    #[test]
    fn should_restrict_attributes_of_every_entry() {
        let catalog = two_event_catalog();
        let params = QueryParams::default().with_attribute("a2");
        let page = DictionaryPage::build(&catalog, &params);

        assert!(!page.is_filtered());
        for entry in page.entries() {
            let names: Vec<&str> = entry.attributes.iter().map(|a| a.name.as_str()).collect();
            assert_eq!(names, vec!["a2"]);
        }
    }

    #[test]
    fn should_keep_attribute_order_without_filter() {
        let catalog = two_event_catalog();
        let page = DictionaryPage::build(&catalog, &QueryParams::default());
        let names: Vec<&str> = page.entries()[0]
            .attributes
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, vec!["a1", "a2"]);
    }

    #[test]
    fn should_flag_only_selected_event_as_visible() {
        let catalog = two_event_catalog();
        let params = QueryParams::default().with_event("Transaction");
        let page = DictionaryPage::build(&catalog, &params);

        let flags: Vec<(&str, bool)> = page
            .entries()
            .iter()
            .map(|entry| (entry.event.name.as_str(), entry.hidden))
            .collect();
        assert_eq!(flags, vec![("Span", true), ("Transaction", false)]);
        assert_eq!(page.status(), "Displaying 1 of 2 results");
    }

    #[test]
    fn should_pluralize_data_source_label() {
        let catalog = two_event_catalog();
        let page = DictionaryPage::build(&catalog, &QueryParams::default());
        assert_eq!(page.entries()[0].data_source_label(), "Data sources");
        assert_eq!(page.entries()[1].data_source_label(), "Data source");
    }

    #[test]
    fn should_expose_catalog_data_sources() {
        let catalog = two_event_catalog();
        let page = DictionaryPage::build(&catalog, &QueryParams::default());
        assert_eq!(page.data_sources(), &["APM", "Browser"]);
    }
}
