//! Attribute dictionary page.

use askama::Template;
use axum::extract::State;
use axum::response::Html;

use datadict_app::ports::CatalogSource;
use datadict_domain::event::Attribute;
use datadict_domain::page::{DictionaryPage, EventEntry};

use super::DashboardError;
use super::links::{Links, element_id};
use crate::extract::{FORM_PARAM, Filters};
use crate::state::{AppState, PageSettings};

/// A labelled href.
#[derive(Debug)]
pub struct LinkView<'a> {
    pub label: &'a str,
    pub href: String,
}

/// One `<option>` of a sidebar select.
#[derive(Debug)]
pub struct OptionView<'a> {
    pub value: &'a str,
    pub selected: bool,
}

/// One row of an event's attribute table.
#[derive(Debug)]
pub struct AttributeView<'a> {
    pub name: &'a str,
    pub href: String,
    pub units: Option<&'a str>,
    pub definition: Option<&'a str>,
    pub events: Vec<LinkView<'a>>,
}

/// One event section.
#[derive(Debug)]
pub struct EventView<'a> {
    pub name: &'a str,
    pub id: String,
    pub anchor: String,
    pub hidden: bool,
    pub data_source_label: String,
    pub data_sources: Vec<LinkView<'a>>,
    pub definition: Option<&'a str>,
    pub attributes: Vec<AttributeView<'a>>,
}

impl<'a> EventView<'a> {
    fn new(entry: &EventEntry<'a>, links: Links<'_>) -> Self {
        let event = entry.event;
        Self {
            name: &event.name,
            id: element_id(&event.name),
            anchor: links.event(&event.name),
            hidden: entry.hidden,
            data_source_label: entry.data_source_label(),
            data_sources: event
                .data_sources
                .iter()
                .map(|data_source| LinkView {
                    label: data_source,
                    href: links.data_source(data_source),
                })
                .collect(),
            definition: event.definition.as_ref().map(|def| def.html.as_str()),
            attributes: entry
                .attributes
                .iter()
                .map(|attribute| AttributeView::new(&event.name, *attribute, links))
                .collect(),
        }
    }
}

impl<'a> AttributeView<'a> {
    fn new(event: &str, attribute: &'a Attribute, links: Links<'_>) -> Self {
        Self {
            name: &attribute.name,
            href: links.attribute(event, &attribute.name),
            units: attribute.units.as_deref(),
            definition: attribute.definition.as_ref().map(|def| def.html.as_str()),
            events: attribute
                .events
                .iter()
                .map(|other| LinkView {
                    label: &other.name,
                    href: links.event(&other.name),
                })
                .collect(),
        }
    }
}

/// Attribute dictionary page template.
#[derive(Template)]
#[template(path = "attribute_dictionary.html")]
pub struct DictionaryTemplate<'a> {
    title: &'a str,
    page_path: &'a str,
    form_param: &'static str,
    status: String,
    clear_href: Option<String>,
    events: Vec<EventView<'a>>,
    data_sources: Vec<OptionView<'a>>,
    event_names: Vec<OptionView<'a>>,
}

impl<'a> DictionaryTemplate<'a> {
    /// Project `page` into markup-ready views.
    #[must_use]
    pub fn new(settings: &'a PageSettings, page: &DictionaryPage<'a>) -> Self {
        let links = Links::new(&settings.path);
        let params = page.params();

        Self {
            title: &settings.title,
            page_path: &settings.path,
            form_param: FORM_PARAM,
            status: page.status(),
            clear_href: page.is_filtered().then(|| links.clear()),
            events: page
                .entries()
                .iter()
                .map(|entry| EventView::new(entry, links))
                .collect(),
            data_sources: page
                .data_sources()
                .iter()
                .copied()
                .map(|value| OptionView {
                    value,
                    selected: params.data_source() == Some(value),
                })
                .collect(),
            event_names: page
                .entries()
                .iter()
                .map(|entry| {
                    let event = entry.event;
                    OptionView {
                        value: &event.name,
                        selected: params.event() == Some(event.name.as_str()),
                    }
                })
                .collect(),
        }
    }
}

/// `GET <page path>` — the attribute dictionary, filtered by the query string.
pub async fn page<S>(
    State(state): State<AppState<S>>,
    Filters(params): Filters,
) -> Result<Html<String>, DashboardError>
where
    S: CatalogSource + Send + Sync + 'static,
{
    let catalog = state.dictionary.catalog().await;
    let page = DictionaryPage::build(&catalog, &params);
    tracing::debug!(
        data_source = params.data_source(),
        event = params.event(),
        attribute = params.attribute(),
        shown = page.shown(),
        visible = ?page.visible(),
        total = page.total(),
        "rendering dictionary"
    );

    let html = DictionaryTemplate::new(&state.page, &page).render()?;
    Ok(Html(html))
}
