//! Deep links into the dictionary page.
//!
//! Every link is the page path followed by a form-urlencoded query string,
//! so names containing spaces or reserved characters survive the round trip.

use datadict_domain::query::{ATTRIBUTE_PARAM, DATA_SOURCE_PARAM, EVENT_PARAM};

/// Builds hrefs relative to the page path.
#[derive(Debug, Clone, Copy)]
pub struct Links<'a> {
    base: &'a str,
}

impl<'a> Links<'a> {
    #[must_use]
    pub fn new(base: &'a str) -> Self {
        Self { base }
    }

    /// The page itself, with every filter cleared.
    #[must_use]
    pub fn clear(&self) -> String {
        self.base.to_string()
    }

    /// `?event=<name>`
    #[must_use]
    pub fn event(&self, name: &str) -> String {
        self.with_query(&[(EVENT_PARAM, name)])
    }

    /// `?dataSource=<value>`
    #[must_use]
    pub fn data_source(&self, data_source: &str) -> String {
        self.with_query(&[(DATA_SOURCE_PARAM, data_source)])
    }

    /// `?event=<name>&attribute=<attribute>`
    #[must_use]
    pub fn attribute(&self, event: &str, attribute: &str) -> String {
        self.with_query(&[(EVENT_PARAM, event), (ATTRIBUTE_PARAM, attribute)])
    }

    fn with_query(&self, pairs: &[(&str, &str)]) -> String {
        // string pairs always serialize
        let query = serde_urlencoded::to_string(pairs).unwrap_or_default();
        format!("{}?{query}", self.base)
    }
}

/// HTML `id` for an event section: whitespace becomes `-`.
#[must_use]
pub fn element_id(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}
