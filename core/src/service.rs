//! The catalog capability consumed by the presentation pipeline.
//!
//! # Design
//! `CatalogService` is the seam that `ServiceContext` swaps: `HttpCatalog`
//! talks to the live catalog, `FixtureCatalog` serves canned records. Views
//! never name a concrete implementation.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::client::ResourceClient;
use crate::config::CatalogConfig;
use crate::error::ApiError;
use crate::transport::{Transport, UreqTransport};
use crate::types::{Person, Planet, Record, Starship};

#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Short label for logs, e.g. `"live"` or `"fixture"`.
    fn source(&self) -> &'static str;

    async fn get_all_people(&self) -> Result<Vec<Person>, ApiError>;
    async fn get_person(&self, id: &str) -> Result<Person, ApiError>;

    async fn get_all_starships(&self) -> Result<Vec<Starship>, ApiError>;
    async fn get_starship(&self, id: &str) -> Result<Starship, ApiError>;

    async fn get_all_planets(&self) -> Result<Vec<Planet>, ApiError>;
    async fn get_planet(&self, id: &str) -> Result<Planet, ApiError>;

    fn get_person_image(&self, person: &Person) -> String;
    fn get_starship_image(&self, starship: &Starship) -> String;
    fn get_planet_image(&self, planet: &Planet) -> String;
}

/// `ResourceClient` plus a `Transport`. Read-only after construction.
#[derive(Clone)]
pub struct HttpCatalog {
    client: ResourceClient,
    transport: Arc<dyn Transport>,
}

impl HttpCatalog {
    pub fn new(config: CatalogConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            client: ResourceClient::new(config),
            transport,
        }
    }

    /// Catalog reached over HTTP with `UreqTransport`.
    pub fn live(config: CatalogConfig) -> Self {
        Self::new(config, Arc::new(UreqTransport::new()))
    }

    pub fn client(&self) -> &ResourceClient {
        &self.client
    }

    /// GET `base_url + path` and decode the body as `T`.
    #[instrument(skip(self))]
    pub async fn fetch_resource<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.client.build_request(path);
        let response = self.transport.execute(&request).await?;
        self.client.parse_resource(path, response)
    }

    #[instrument(skip(self), fields(kind = %R::KIND))]
    pub async fn get_all<R: Record>(&self) -> Result<Vec<R>, ApiError> {
        let request = self.client.build_list(R::KIND);
        let response = self.transport.execute(&request).await?;
        let records = self.client.parse_list(response)?;
        debug!(count = records.len(), "collection fetched");
        Ok(records)
    }

    #[instrument(skip(self), fields(kind = %R::KIND))]
    pub async fn get<R: Record>(&self, id: &str) -> Result<R, ApiError> {
        let request = self.client.build_get(R::KIND, id);
        let response = self.transport.execute(&request).await?;
        self.client.parse_get(id, response)
    }
}

#[async_trait]
impl CatalogService for HttpCatalog {
    fn source(&self) -> &'static str {
        "live"
    }

    async fn get_all_people(&self) -> Result<Vec<Person>, ApiError> {
        self.get_all().await
    }

    async fn get_person(&self, id: &str) -> Result<Person, ApiError> {
        self.get(id).await
    }

    async fn get_all_starships(&self) -> Result<Vec<Starship>, ApiError> {
        self.get_all().await
    }

    async fn get_starship(&self, id: &str) -> Result<Starship, ApiError> {
        self.get(id).await
    }

    async fn get_all_planets(&self) -> Result<Vec<Planet>, ApiError> {
        self.get_all().await
    }

    async fn get_planet(&self, id: &str) -> Result<Planet, ApiError> {
        self.get(id).await
    }

    fn get_person_image(&self, person: &Person) -> String {
        self.client.person_image(person)
    }

    fn get_starship_image(&self, starship: &Starship) -> String {
        self.client.starship_image(starship)
    }

    fn get_planet_image(&self, planet: &Planet) -> String {
        self.client.planet_image(planet)
    }
}
