//! # datadict-domain
//!
//! Pure domain model for the datadict attribute dictionary.
//!
//! ## Responsibilities
//! - Define **Events** (named record types reported by one or more data sources)
//! - Define **Attributes** (named fields shared across events, with back-references)
//! - Define the **Catalog** (validated, name-sorted set of events)
//! - Define **Query parameters** and the pure visible-name computation
//! - Build the **dictionary page** view model consumed by adapters
//! - Contain all invariant enforcement and filtering logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Loading the catalog is expressed as a trait in the `app` crate (port).

pub mod error;
pub mod text;

pub mod catalog;
pub mod event;
pub mod page;
pub mod query;
