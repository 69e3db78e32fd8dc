//! Data-layer payload layout and its mapping into domain events.

use serde::Deserialize;
use serde_json::Value;

use datadict_domain::event::{Attribute, Definition, Event, EventRef};

use crate::error::CatalogError;

const QUERY_ROOT: &str = "allDataDictionaryEvent";

#[derive(Debug, Deserialize)]
struct Connection {
    edges: Vec<Edge>,
}

#[derive(Debug, Deserialize)]
struct Edge {
    node: EventNode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventNode {
    name: String,
    #[serde(default)]
    data_sources: Option<Vec<String>>,
    #[serde(default)]
    definition: Option<DefinitionNode>,
    #[serde(default, alias = "attributes")]
    children_data_dictionary_attribute: Option<Vec<AttributeNode>>,
}

#[derive(Debug, Deserialize)]
struct AttributeNode {
    name: String,
    #[serde(default)]
    units: Option<String>,
    #[serde(default)]
    definition: Option<DefinitionNode>,
    #[serde(default)]
    events: Option<Vec<EventRefNode>>,
}

#[derive(Debug, Deserialize)]
struct DefinitionNode {
    #[serde(default)]
    html: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EventRefNode {
    name: String,
}

impl DefinitionNode {
    fn into_definition(self) -> Option<Definition> {
        self.html.map(Definition::new)
    }
}

impl From<AttributeNode> for Attribute {
    fn from(node: AttributeNode) -> Self {
        Self {
            name: node.name,
            units: node.units.filter(|units| !units.is_empty()),
            definition: node.definition.and_then(DefinitionNode::into_definition),
            events: node
                .events
                .unwrap_or_default()
                .into_iter()
                .map(|event| EventRef { name: event.name })
                .collect(),
        }
    }
}

impl From<EventNode> for Event {
    fn from(node: EventNode) -> Self {
        Self {
            name: node.name,
            data_sources: node.data_sources.unwrap_or_default(),
            definition: node.definition.and_then(DefinitionNode::into_definition),
            attributes: node
                .children_data_dictionary_attribute
                .unwrap_or_default()
                .into_iter()
                .map(Attribute::from)
                .collect(),
        }
    }
}

/// Parse a data-layer payload into domain events.
///
/// Accepted shapes:
/// - `{"data": {"allDataDictionaryEvent": {"edges": [{"node": …}]}}}`
/// - `{"allDataDictionaryEvent": {"edges": [{"node": …}]}}`
/// - `[…]` — a bare array of event nodes
///
/// # Errors
///
/// Returns [`CatalogError::Json`] on malformed JSON or nodes and
/// [`CatalogError::Shape`] when the top-level layout is not recognized.
pub fn parse(content: &str) -> Result<Vec<Event>, CatalogError> {
    let mut value: Value = serde_json::from_str(content)?;
    if let Some(data) = value.get_mut("data").map(Value::take) {
        value = data;
    }

    let nodes: Vec<EventNode> = match value {
        Value::Array(_) => serde_json::from_value(value)?,
        Value::Object(mut object) => {
            let root = object
                .remove(QUERY_ROOT)
                .ok_or(CatalogError::Shape("missing allDataDictionaryEvent"))?;
            let connection: Connection = serde_json::from_value(root)?;
            connection.edges.into_iter().map(|edge| edge.node).collect()
        }
        _ => return Err(CatalogError::Shape("expected an object or an array")),
    };

    Ok(nodes.into_iter().map(Event::from).collect())
}
