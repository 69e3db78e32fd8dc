//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`DataDictError`] via `From`.

/// Top-level error shared by the application and its adapters.
#[derive(Debug, thiserror::Error)]
pub enum DataDictError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A requested item does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The catalog source failed to produce events.
    #[error("catalog source error")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Invariant violations detected while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// An event has an empty name.
    #[error("event name must not be empty")]
    EmptyEventName,

    /// An attribute of the given event has an empty name.
    #[error("attribute name must not be empty (event {event:?})")]
    EmptyAttributeName { event: String },

    /// Two events share the same name.
    #[error("duplicate event {0:?}")]
    DuplicateEvent(String),
}

/// Lookup miss for a named item.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} {name:?} not found")]
pub struct NotFoundError {
    /// Kind of the missing item (e.g. `"Event"`).
    pub kind: &'static str,
    /// Name that was looked up.
    pub name: String,
}
