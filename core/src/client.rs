//! Stateless HTTP request builder and response parser for the catalog.
//!
//! # Design
//! `ResourceClient` holds only its `CatalogConfig` and carries no mutable
//! state between calls. Each retrieval is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`, so normalization is testable without a network.
//! `HttpCatalog` pairs it with a `Transport` to perform the round trip.

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::config::CatalogConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Person, Planet, RawPage, Record, ResourceKind, Starship};

#[derive(Debug, Clone, Default)]
pub struct ResourceClient {
    config: CatalogConfig,
}

impl ResourceClient {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Request for `base_url + path`.
    pub fn build_request(&self, path: &str) -> HttpRequest {
        HttpRequest {
            url: format!("{}{path}", self.config.base_url()),
            path: path.to_string(),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    pub fn build_list(&self, kind: ResourceKind) -> HttpRequest {
        self.build_request(&list_path(kind))
    }

    pub fn build_get(&self, kind: ResourceKind, id: &str) -> HttpRequest {
        self.build_request(&detail_path(kind, id))
    }

    /// Check the status and decode the body as `T`.
    pub fn parse_resource<T: DeserializeOwned>(
        &self,
        path: &str,
        response: HttpResponse,
    ) -> Result<T, ApiError> {
        if !response.is_success() {
            return Err(ApiError::Transport {
                status: response.status,
                path: path.to_string(),
            });
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Normalize every record of a collection page, in upstream order.
    pub fn parse_list<R: Record>(&self, response: HttpResponse) -> Result<Vec<R>, ApiError> {
        let path = list_path(R::KIND);
        let page: RawPage<R::Raw> = self.parse_resource(&path, response)?;
        if let Some(next) = &page.next {
            warn!(
                kind = %R::KIND,
                count = ?page.count,
                received = page.results.len(),
                %next,
                "collection has more pages; only the first is returned"
            );
        }
        page.results.into_iter().map(R::normalize).collect()
    }

    /// Normalize a single record. A 404 becomes `NotFound`.
    pub fn parse_get<R: Record>(&self, id: &str, response: HttpResponse) -> Result<R, ApiError> {
        let path = detail_path(R::KIND, id);
        match self.parse_resource::<R::Raw>(&path, response) {
            Ok(raw) => R::normalize(raw),
            Err(ApiError::Transport { status: 404, .. }) => Err(ApiError::NotFound {
                kind: R::KIND,
                id: id.to_string(),
            }),
            Err(e) => Err(e),
        }
    }

    pub fn image_url(&self, kind: ResourceKind, id: &str) -> String {
        format!("{}/{}/{id}.jpg", self.config.image_base(), kind.image_dir())
    }

    pub fn person_image(&self, person: &Person) -> String {
        self.image_url(ResourceKind::Person, &person.id)
    }

    pub fn starship_image(&self, starship: &Starship) -> String {
        self.image_url(ResourceKind::Starship, &starship.id)
    }

    pub fn planet_image(&self, planet: &Planet) -> String {
        self.image_url(ResourceKind::Planet, &planet.id)
    }
}

pub fn list_path(kind: ResourceKind) -> String {
    format!("/{}/", kind.collection())
}

/// People keep the trailing slash on detail paths; starships and planets
/// are addressed without it.
pub fn detail_path(kind: ResourceKind, id: &str) -> String {
    match kind {
        ResourceKind::Person => format!("/people/{id}/"),
        other => format!("/{}/{id}", other.collection()),
    }
}
