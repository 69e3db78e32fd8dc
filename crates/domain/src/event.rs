//! Event — a named record type reported by one or more data sources,
//! together with the attributes it exposes.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Pre-rendered HTML body supplied by the data layer.
///
/// The content is trusted and passed through verbatim by renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub html: String,
}

impl Definition {
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

/// Back-reference from an attribute to an event that declares it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRef {
    pub name: String,
}

/// A named field reported on one or more events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub name: String,
    pub units: Option<String>,
    pub definition: Option<Definition>,
    /// Every event exposing this attribute name, in data-layer order.
    pub events: Vec<EventRef>,
}

impl Attribute {
    /// Create a builder for constructing an [`Attribute`].
    #[must_use]
    pub fn builder() -> AttributeBuilder {
        AttributeBuilder::default()
    }
}

/// Step-by-step builder for [`Attribute`].
#[derive(Debug, Default)]
pub struct AttributeBuilder {
    name: Option<String>,
    units: Option<String>,
    definition: Option<Definition>,
    events: Vec<EventRef>,
}

impl AttributeBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    #[must_use]
    pub fn definition(mut self, html: impl Into<String>) -> Self {
        self.definition = Some(Definition::new(html));
        self
    }

    /// Add a back-reference to an event declaring this attribute.
    #[must_use]
    pub fn event(mut self, name: impl Into<String>) -> Self {
        self.events.push(EventRef { name: name.into() });
        self
    }

    /// Consume the builder and return an [`Attribute`].
    ///
    /// Name validation happens when the owning event is validated.
    #[must_use]
    pub fn build(self) -> Attribute {
        Attribute {
            name: self.name.unwrap_or_default(),
            units: self.units,
            definition: self.definition,
            events: self.events,
        }
    }
}

/// An event type listed in the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub name: String,
    pub data_sources: Vec<String>,
    pub definition: Option<Definition>,
    pub attributes: Vec<Attribute>,
}

impl Event {
    /// Create a builder for constructing an [`Event`].
    #[must_use]
    pub fn builder() -> EventBuilder {
        EventBuilder::default()
    }

    /// Whether `data_source` is one of the sources reporting this event.
    #[must_use]
    pub fn has_data_source(&self, data_source: &str) -> bool {
        self.data_sources.iter().any(|ds| ds == data_source)
    }

    /// Attributes to display, restricted to `filter` when given.
    ///
    /// Order is preserved as supplied by the data layer.
    #[must_use]
    pub fn attributes_matching(&self, filter: Option<&str>) -> Vec<&Attribute> {
        match filter {
            Some(name) => self
                .attributes
                .iter()
                .filter(|attr| attr.name == name)
                .collect(),
            None => self.attributes.iter().collect(),
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyEventName`] when `name` is empty and
    /// [`ValidationError::EmptyAttributeName`] when any attribute is unnamed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyEventName);
        }
        if self.attributes.iter().any(|attr| attr.name.is_empty()) {
            return Err(ValidationError::EmptyAttributeName {
                event: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Event`].
#[derive(Debug, Default)]
pub struct EventBuilder {
    name: Option<String>,
    data_sources: Vec<String>,
    definition: Option<Definition>,
    attributes: Vec<Attribute>,
}

impl EventBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn data_source(mut self, data_source: impl Into<String>) -> Self {
        self.data_sources.push(data_source.into());
        self
    }

    #[must_use]
    pub fn definition(mut self, html: impl Into<String>) -> Self {
        self.definition = Some(Definition::new(html));
        self
    }

    #[must_use]
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Consume the builder, validate, and return an [`Event`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the name is missing or empty, or if
    /// any attribute is unnamed.
    pub fn build(self) -> Result<Event, ValidationError> {
        let event = Event {
            name: self.name.unwrap_or_default(),
            data_sources: self.data_sources,
            definition: self.definition,
            attributes: self.attributes,
        };
        event.validate()?;
        Ok(event)
    }
}
