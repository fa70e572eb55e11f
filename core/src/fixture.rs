//! Canned, in-memory catalog for offline development and tests.

use async_trait::async_trait;

use crate::client::ResourceClient;
use crate::config::CatalogConfig;
use crate::error::ApiError;
use crate::service::CatalogService;
use crate::types::{Person, Planet, Record, Starship};

/// Serves fixed records. Never performs I/O.
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    client: ResourceClient,
    people: Vec<Person>,
    starships: Vec<Starship>,
    planets: Vec<Planet>,
}

fn s(value: &str) -> String {
    value.to_string()
}

impl FixtureCatalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            client: ResourceClient::new(config),
            people: vec![
                Person {
                    id: s("1"),
                    name: s("Bilbo Baggins [TEST DATA]"),
                    gender: s("male"),
                    birth_year: s("long ago"),
                    eye_color: s("dark brown"),
                },
                Person {
                    id: s("2"),
                    name: s("Frodo Baggins [TEST DATA]"),
                    gender: s("male"),
                    birth_year: s("long ago"),
                    eye_color: s("dark brown"),
                },
            ],
            starships: vec![Starship {
                id: s("1"),
                name: s("USS Enterprise [TEST DATA]"),
                model: s("NCC-1701-C"),
                manufacturer: s("Northrop Grumman Shipbuilding"),
                cost_in_credits: s("not known"),
                length: s("approx 300 meters"),
                crew: s("1000"),
                passengers: s("50"),
                cargo_capacity: s("100"),
            }],
            planets: vec![Planet {
                id: s("1"),
                name: s("Earth [TEST DATA]"),
                population: s("7.530.000.000"),
                rotation_period: s("23 hours 56 seconds"),
                diameter: s("12.742 km"),
            }],
        }
    }

    /// Replace the canned people, keeping everything else.
    pub fn with_people(mut self, people: Vec<Person>) -> Self {
        self.people = people;
        self
    }
}

impl Default for FixtureCatalog {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}

fn lookup<R: Record>(records: &[R], id: &str) -> Result<R, ApiError> {
    records
        .iter()
        .find(|r| r.id() == id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound {
            kind: R::KIND,
            id: id.to_string(),
        })
}

#[async_trait]
impl CatalogService for FixtureCatalog {
    fn source(&self) -> &'static str {
        "fixture"
    }

    async fn get_all_people(&self) -> Result<Vec<Person>, ApiError> {
        Ok(self.people.clone())
    }

    async fn get_person(&self, id: &str) -> Result<Person, ApiError> {
        lookup(&self.people, id)
    }

    async fn get_all_starships(&self) -> Result<Vec<Starship>, ApiError> {
        Ok(self.starships.clone())
    }

    async fn get_starship(&self, id: &str) -> Result<Starship, ApiError> {
        lookup(&self.starships, id)
    }

    async fn get_all_planets(&self) -> Result<Vec<Planet>, ApiError> {
        Ok(self.planets.clone())
    }

    async fn get_planet(&self, id: &str) -> Result<Planet, ApiError> {
        lookup(&self.planets, id)
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
