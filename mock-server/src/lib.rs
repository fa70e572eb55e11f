use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::debug;

/// Host used when minting canonical `url` fields for seeded records.
pub const CANONICAL_BASE: &str = "https://swapi.dev/api";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub gender: String,
    pub birth_year: String,
    pub eye_color: String,
    pub url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Starship {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: String,
    pub length: String,
    pub crew: String,
    pub passengers: String,
    pub cargo_capacity: String,
    pub url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    pub population: String,
    pub rotation_period: String,
    pub diameter: String,
    pub url: String,
}

/// List envelope returned by every collection endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    fn single(results: Vec<T>) -> Self {
        Self {
            count: results.len(),
            next: None,
            previous: None,
            results,
        }
    }
}

/// Read-only data served by the mock catalog.
///
/// With `outage` set every endpoint answers 500, which lets client tests
/// exercise the non-404 failure path over real HTTP.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub people: Vec<Person>,
    pub starships: Vec<Starship>,
    pub planets: Vec<Planet>,
    pub outage: bool,
}

pub fn canonical_url(collection: &str, id: u32) -> String {
    format!("{CANONICAL_BASE}/{collection}/{id}/")
}

pub fn person(id: u32, name: &str, gender: &str, birth_year: &str, eye_color: &str) -> Person {
    Person {
        name: name.to_string(),
        gender: gender.to_string(),
        birth_year: birth_year.to_string(),
        eye_color: eye_color.to_string(),
        url: canonical_url("people", id),
    }
}

fn starship(id: u32, fields: [&str; 8]) -> Starship {
    let [name, model, manufacturer, cost_in_credits, length, crew, passengers, cargo_capacity] =
        fields.map(str::to_string);
    Starship {
        name,
        model,
        manufacturer,
        cost_in_credits,
        length,
        crew,
        passengers,
        cargo_capacity,
        url: canonical_url("starships", id),
    }
}

fn planet(id: u32, name: &str, population: &str, rotation_period: &str, diameter: &str) -> Planet {
    Planet {
        name: name.to_string(),
        population: population.to_string(),
        rotation_period: rotation_period.to_string(),
        diameter: diameter.to_string(),
        url: canonical_url("planets", id),
    }
}

impl Catalog {
    /// A small slice of the public catalog, enough for list and detail views.
    pub fn seeded() -> Self {
        Self {
            people: vec![
                person(1, "Luke Skywalker", "male", "19BBY", "blue"),
                person(2, "C-3PO", "n/a", "112BBY", "yellow"),
                person(4, "Darth Vader", "male", "41.9BBY", "yellow"),
                person(5, "Leia Organa", "female", "19BBY", "brown"),
                person(11, "Anakin Skywalker", "male", "41.9BBY", "blue"),
            ],
            starships: vec![
                starship(
                    2,
                    [
                        "CR90 corvette",
                        "CR90 corvette",
                        "Corellian Engineering Corporation",
                        "3500000",
                        "150",
                        "30-165",
                        "600",
                        "3000000",
                    ],
                ),
                starship(
                    5,
                    [
                        "Sentinel-class landing craft",
                        "Sentinel-class landing craft",
                        "Sienar Fleet Systems, Cyngus Spaceworks",
                        "240000",
                        "38",
                        "5",
                        "75",
                        "180000",
                    ],
                ),
                starship(
                    9,
                    [
                        "Death Star",
                        "DS-1 Orbital Battle Station",
                        "Imperial Department of Military Research, Sienar Fleet Systems",
                        "1000000000000",
                        "120000",
                        "342,953",
                        "843,342",
                        "1000000000000",
                    ],
                ),
            ],
            planets: vec![
                planet(1, "Tatooine", "200000", "23", "10465"),
                planet(2, "Alderaan", "2000000000", "24", "12500"),
                planet(3, "Yavin IV", "1000", "24", "10200"),
            ],
            outage: false,
        }
    }
}

/// Trailing numeric segment of a canonical url, e.g. `.../people/4/` -> `"4"`.
fn url_id(url: &str) -> Option<&str> {
    url.trim_end_matches('/').rsplit('/').next()
}

fn find<'a, T>(records: &'a [T], id: &str, url: impl Fn(&T) -> &str) -> Option<&'a T> {
    records.iter().find(|r| url_id(url(r)) == Some(id))
}

fn available(catalog: &Catalog) -> Result<(), StatusCode> {
    if catalog.outage {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(())
}

pub type Db = Arc<Catalog>;

pub fn app() -> Router {
    app_with(Catalog::seeded())
}

pub fn app_with(catalog: Catalog) -> Router {
    let db: Db = Arc::new(catalog);
    Router::new()
        .route("/people/", get(list_people))
        .route("/people/{id}/", get(get_person))
        .route("/starships/", get(list_starships))
        .route("/starships/{id}", get(get_starship))
        .route("/planets/", get(list_planets))
        .route("/planets/{id}", get(get_planet))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, catalog: Catalog) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(catalog)).await
}

async fn list_people(State(db): State<Db>) -> Result<Json<Page<Person>>, StatusCode> {
    available(&db)?;
    debug!(count = db.people.len(), "list people");
    Ok(Json(Page::single(db.people.clone())))
}

async fn get_person(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Person>, StatusCode> {
    available(&db)?;
    debug!(%id, "get person");
    find(&db.people, &id, |p| &p.url)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_starships(State(db): State<Db>) -> Result<Json<Page<Starship>>, StatusCode> {
    available(&db)?;
    debug!(count = db.starships.len(), "list starships");
    Ok(Json(Page::single(db.starships.clone())))
}

async fn get_starship(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Starship>, StatusCode> {
    available(&db)?;
    debug!(%id, "get starship");
    find(&db.starships, &id, |s| &s.url)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_planets(State(db): State<Db>) -> Result<Json<Page<Planet>>, StatusCode> {
    available(&db)?;
    debug!(count = db.planets.len(), "list planets");
    Ok(Json(Page::single(db.planets.clone())))
}

async fn get_planet(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Planet>, StatusCode> {
    available(&db)?;
    debug!(%id, "get planet");
    find(&db.planets, &id, |p| &p.url)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
