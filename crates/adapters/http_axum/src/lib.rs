//! # datadict-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **attribute dictionary** as a server-side-rendered HTML page
//!   that works with **zero JavaScript**
//! - Serve a small **JSON API** sharing the same filters
//!   (`/api/events`, `/api/events/{name}`, `/api/data-sources`)
//! - Map query strings into domain [`QueryParams`](datadict_domain::query::QueryParams)
//! - Map application results into HTTP responses (JSON or HTML)
//!
//! ## No-JS filtering approach
//! - Filters live in the URL (`dataSource`, `event`, `attribute`); every
//!   deep link on the page is a plain `<a href>` carrying them.
//! - Events outside the filters stay in the markup with a `hidden` class.
//! - The filter sidebar is a `GET` form targeting the page itself.
//!
//! ## Dependency rule
//! Depends on `datadict-app` (for the port trait and service) and
//! `datadict-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
