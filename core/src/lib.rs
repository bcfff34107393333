//! Client for the to-do items API.
//!
//! # Overview
//! `ItemsClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network. `ApiClient` runs those requests
//! over `reqwest` and exposes one async call per server operation.
//!
//! # Design
//! - `ItemsClient` is stateless; it holds only `base_url`.
//! - Each operation is a `build_*` / `parse_*` pair, so the I/O boundary is
//!   explicit and testable without a server.
//! - DTOs are defined independently from the server crate; the end-to-end
//!   test catches schema drift.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use api::{ApiClient, DEFAULT_BASE_URL};
pub use client::ItemsClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateItem, Item, UpdateItem};
