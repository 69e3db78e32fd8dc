//! Request extractors shared by the API and the dashboard.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use datadict_domain::query::QueryParams;

/// Hidden field submitted by the sidebar filter form.
///
/// Its presence marks empty selections as "All" rather than as filters that
/// match nothing.
pub const FORM_PARAM: &str = "filter";

/// Dictionary filters decoded from the request query string.
///
/// Never rejects: a missing or undecodable query string yields no filters.
#[derive(Debug, Clone, Default)]
pub struct Filters(pub QueryParams);

impl<S: Send + Sync> FromRequestParts<S> for Filters {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parse_query(parts.uri.query())))
    }
}

/// Decode a raw query string into [`QueryParams`].
///
/// Repeated keys keep their first value, like `URLSearchParams::get`.
/// Empty values submitted by the filter form are dropped.
#[must_use]
pub fn parse_query(query: Option<&str>) -> QueryParams {
    let Some(query) = query else {
        return QueryParams::default();
    };
    match serde_urlencoded::from_str::<Vec<(String, String)>>(query) {
        Ok(mut pairs) => {
            if pairs.iter().any(|(key, _)| key == FORM_PARAM) {
                pairs.retain(|(_, value)| !value.is_empty());
            }
            QueryParams::from_pairs(pairs)
        }
        Err(err) => {
            tracing::debug!(error = %err, query, "ignoring undecodable query string");
            QueryParams::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_no_filters_without_query() {
        assert_eq!(parse_query(None), QueryParams::default());
    }

    #[test]
    fn should_decode_percent_encoded_values() {
        let params = parse_query(Some("event=Page%20View&dataSource=Mobile+SDK&attribute=a%26b"));
        assert_eq!(params.event(), Some("Page View"));
        assert_eq!(params.data_source(), Some("Mobile SDK"));
        assert_eq!(params.attribute(), Some("a&b"));
    }

    #[test]
    fn should_keep_first_value_for_repeated_keys() {
        let params = parse_query(Some("dataSource=APM&dataSource=Browser"));
        assert_eq!(params.data_source(), Some("APM"));
    }

    #[test]
    fn should_ignore_unknown_keys() {
        let params = parse_query(Some("utm_source=newsletter&event=Span"));
        assert_eq!(params, QueryParams::default().with_event("Span"));
    }

    #[test]
    fn should_keep_empty_link_values_as_filters() {
        let params = parse_query(Some("dataSource=&event="));
        assert_eq!(params.data_source(), Some(""));
        assert_eq!(params.event(), Some(""));
    }

    #[test]
    fn should_drop_empty_selections_submitted_by_form() {
        let params = parse_query(Some("filter=1&dataSource=&event=Span"));
        assert_eq!(params, QueryParams::default().with_event("Span"));
    }
}
