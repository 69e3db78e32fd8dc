//! # datadict-adapter-catalog-json
//!
//! Catalog adapter reading the JSON payload produced by the static-site
//! build (the attribute-dictionary page query).
//!
//! ## Responsibilities
//! - Implement the `CatalogSource` port defined in `datadict-app::ports`
//! - Read the payload from a file or from an inline string
//! - Accept the page-query response shape, its `data` member, or a bare
//!   array of event nodes
//! - Map data-layer nodes into domain events
//!
//! ## Dependency rule
//! Depends on `datadict-app` (for the port trait) and `datadict-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod payload;
pub mod source;

pub use error::CatalogError;
pub use source::JsonCatalogSource;
