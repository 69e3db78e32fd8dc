//! # datadict-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `CatalogSource` — produce the events of the pre-built data layer
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DictionaryService` — load, cache and swap the catalog; build page views
//! - Orchestrate domain objects without knowing *how* the data layer is read
//!
//! ## Dependency rule
//! Depends on `datadict-domain` only (plus `tokio::sync` for the catalog lock).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
