//! Client and presentation-binding core for a read-only Star Wars catalog.
//!
//! # Overview
//! `ResourceClient` builds catalog requests and normalizes responses into
//! `Person`, `Starship` and `Planet` records. `HttpCatalog` runs those
//! requests through a `Transport`; `FixtureCatalog` serves canned data. Both
//! implement `CatalogService`, the capability views consume.
//!
//! # Design
//! - Data flows one way: `ServiceContext` -> `with_service` mapping ->
//!   `Binding` -> render function. Nothing below the binding fetches.
//! - The context is an explicit handle created at the composition root;
//!   swapping the service is `ServiceContext::replace`.
//! - Every fetch is tagged with a `RequestToken`; only the latest one may
//!   settle, and failures settle into a renderable `Failed` phase.
//! - Render failures are contained by `ErrorBoundary`, which stays tripped
//!   until explicitly reset.

pub mod binding;
pub mod boundary;
pub mod client;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod fixture;
pub mod http;
pub mod inject;
pub mod normalize;
pub mod presentation;
pub mod service;
pub mod transport;
pub mod types;
pub mod view;

pub use binding::{Binding, BindingHandle, Phase, RequestToken};
pub use boundary::{BoundaryState, ErrorBoundary};
pub use client::ResourceClient;
pub use config::CatalogConfig;
pub use context::ServiceContext;
pub use error::{ApiError, RenderError};
pub use fixture::FixtureCatalog;
pub use http::{HttpRequest, HttpResponse};
pub use inject::{with_service, Injected};
pub use normalize::extract_id;
pub use service::{CatalogService, HttpCatalog};
pub use transport::{Transport, UreqTransport};
pub use types::{Person, Planet, Record, ResourceKind, Starship};
pub use view::{
    bind_detail, bind_list, image_url, item_fetch, list_fetch, DetailModel, DetailProps,
    DetailView, ListModel, ListProps, ListView, Resolved,
};
