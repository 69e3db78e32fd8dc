//! Query parameters driving the dictionary filters, and the pure
//! visible-name computation.

use serde::Serialize;

use crate::event::Event;

/// Query parameter selecting events reported by one data source.
pub const DATA_SOURCE_PARAM: &str = "dataSource";
/// Query parameter selecting a single event by name.
pub const EVENT_PARAM: &str = "event";
/// Query parameter restricting an event's attribute table to one attribute.
pub const ATTRIBUTE_PARAM: &str = "attribute";

/// Filters read from the request URL.
///
/// A present but empty `dataSource` or `event` still filters and matches
/// nothing. An empty `attribute` leaves the attribute tables unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    data_source: Option<String>,
    event: Option<String>,
    attribute: Option<String>,
}

impl QueryParams {
    /// Build from decoded `(key, value)` pairs.
    ///
    /// When a key is repeated the first occurrence wins; unknown keys are
    /// ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                DATA_SOURCE_PARAM => &mut params.data_source,
                EVENT_PARAM => &mut params.event,
                ATTRIBUTE_PARAM => &mut params.attribute,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }

    #[must_use]
    pub fn with_data_source(mut self, data_source: impl Into<String>) -> Self {
        self.data_source = Some(data_source.into());
        self
    }

    #[must_use]
    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    #[must_use]
    pub fn data_source(&self) -> Option<&str> {
        self.data_source.as_deref()
    }

    #[must_use]
    pub fn event(&self) -> Option<&str> {
        self.event.as_deref()
    }

    /// Attribute name the per-event table is restricted to, if any.
    #[must_use]
    pub fn attribute(&self) -> Option<&str> {
        self.attribute.as_deref().filter(|attribute| !attribute.is_empty())
    }

    /// Whether `event` passes the `dataSource` and `event` filters.
    #[must_use]
    pub fn matches(&self, event: &Event) -> bool {
        self.data_source()
            .is_none_or(|data_source| event.has_data_source(data_source))
            && self.event().is_none_or(|name| event.name == name)
    }
}

/// Names of the events passing the active filters, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VisibleNames(Vec<String>);

impl VisibleNames {
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|visible| visible == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Compute the visible-name subset for `events` under `params`.
///
/// `dataSource` and `event` compose with AND semantics. The result depends
/// only on the inputs.
#[must_use]
pub fn visible_event_names(events: &[Event], params: &QueryParams) -> VisibleNames {
    VisibleNames(
        events
            .iter()
            .filter(|event| params.matches(event))
            .map(|event| event.name.clone())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Attribute;

    fn events() -> Vec<Event> {
        vec![
            Event::builder()
                .name("BrowserInteraction")
                .data_source("Browser")
                .build()
                .unwrap(),
            Event::builder()
                .name("Span")
                .data_source("APM")
                .data_source("Browser")
                .build()
                .unwrap(),
            Event::builder()
                .name("Transaction")
                .data_source("APM")
                .attribute(Attribute::builder().name("duration").build())
                .build()
                .unwrap(),
        ]
    }

    fn names(visible: &VisibleNames) -> Vec<&str> {
        visible.iter().collect()
    }

    #[test]
    fn should_show_all_names_when_no_filter_present() {
        let visible = visible_event_names(&events(), &QueryParams::default());
        assert_eq!(
            names(&visible),
            vec!["BrowserInteraction", "Span", "Transaction"]
        );
    }

    #[test]
    fn should_keep_only_events_reported_by_data_source() {
        let params = QueryParams::default().with_data_source("APM");
        let visible = visible_event_names(&events(), &params);
        assert_eq!(names(&visible), vec!["Span", "Transaction"]);
    }

    #[test]
    fn should_keep_single_event_when_filtered_by_name() {
        let params = QueryParams::default().with_event("Span");
        let visible = visible_event_names(&events(), &params);
        assert_eq!(names(&visible), vec!["Span"]);
    }

    #[test]
    fn should_be_empty_when_event_name_is_unknown() {
        let params = QueryParams::default().with_event("Metric");
        assert!(visible_event_names(&events(), &params).is_empty());
    }

    #[test]
    fn should_compose_data_source_and_event_filters() {
        let matching = QueryParams::default()
            .with_data_source("Browser")
            .with_event("Span");
        assert_eq!(
            names(&visible_event_names(&events(), &matching)),
            vec!["Span"]
        );

        let disjoint = QueryParams::default()
            .with_data_source("Browser")
            .with_event("Transaction");
        assert!(visible_event_names(&events(), &disjoint).is_empty());
    }

    #[test]
    fn should_ignore_attribute_when_computing_visible_names() {
        let params = QueryParams::default().with_attribute("duration");
        assert_eq!(visible_event_names(&events(), &params).len(), 3);
    }

    #[test]
    fn should_be_idempotent_for_identical_inputs() {
        let params = QueryParams::default().with_data_source("Browser");
        let first = visible_event_names(&events(), &params);
        let second = visible_event_names(&events(), &params);
        assert_eq!(first, second);
    }

    #[test]
    fn should_keep_first_value_when_key_is_repeated() {
        let params = QueryParams::from_pairs([
            ("dataSource", "APM"),
            ("dataSource", "Browser"),
            ("unknown", "x"),
        ]);
        assert_eq!(params.data_source(), Some("APM"));
        assert_eq!(params.event(), None);
    }

    #[test]
    fn should_match_nothing_when_data_source_is_present_but_empty() {
        let params = QueryParams::from_pairs([("dataSource", "")]);
        assert_eq!(params.data_source(), Some(""));
        assert!(visible_event_names(&events(), &params).is_empty());
    }

    #[test]
    fn should_match_nothing_when_event_is_present_but_empty() {
        let params = QueryParams::from_pairs([("event", "")]);
        assert!(visible_event_names(&events(), &params).is_empty());
    }

    #[test]
    fn should_leave_attribute_unrestricted_when_empty() {
        let params = QueryParams::from_pairs([("attribute", "")]);
        assert_eq!(params.attribute(), None);
        assert_eq!(visible_event_names(&events(), &params).len(), 3);
    }

    #[test]
    fn should_keep_first_value_even_when_it_is_empty() {
        let params = QueryParams::from_pairs([("event", ""), ("event", "Span")]);
        assert_eq!(params.event(), Some(""));

        let params = QueryParams::from_pairs([("attribute", ""), ("attribute", "duration")]);
        assert_eq!(params.attribute(), None);
    }
}
