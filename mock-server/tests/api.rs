use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_swapi::{app, app_with, person, Catalog, Page, Person, Planet, Starship};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- people ---

#[tokio::test]
async fn list_people_returns_results_envelope() {
    let resp = app().oneshot(get("/people/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: Page<Person> = body_json(resp).await;
    assert_eq!(page.count, page.results.len());
    assert!(page.next.is_none());
    assert_eq!(page.results[0].name, "Luke Skywalker");
    assert_eq!(page.results[0].url, "https://swapi.dev/api/people/1/");
}

#[tokio::test]
async fn list_people_keeps_wire_field_names() {
    let resp = app().oneshot(get("/people/")).await.unwrap();
    let raw: serde_json::Value = body_json(resp).await;

    let first = &raw["results"][0];
    assert_eq!(first["birth_year"], "19BBY");
    assert_eq!(first["eye_color"], "blue");
    assert!(first.get("birthYear").is_none());
}

#[tokio::test]
async fn get_person_by_canonical_id() {
    let resp = app().oneshot(get("/people/11/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let anakin: Person = body_json(resp).await;
    assert_eq!(anakin.name, "Anakin Skywalker");
}

#[tokio::test]
async fn get_person_not_found() {
    let resp = app().oneshot(get("/people/99/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn custom_catalog_is_served_in_order() {
    let catalog = Catalog {
        people: vec![
            person(6, "Owen Lars", "male", "52BBY", "blue"),
            person(4, "Darth Vader", "male", "41.9BBY", "yellow"),
        ],
        ..Catalog::default()
    };
    let resp = app_with(catalog).oneshot(get("/people/")).await.unwrap();

    let page: Page<Person> = body_json(resp).await;
    let names: Vec<&str> = page.results.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Owen Lars", "Darth Vader"]);
}

// --- starships ---

#[tokio::test]
async fn get_starship_without_trailing_slash() {
    let resp = app().oneshot(get("/starships/5")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let ship: Starship = body_json(resp).await;
    assert_eq!(ship.model, "Sentinel-class landing craft");
    assert_eq!(ship.cargo_capacity, "180000");
}

#[tokio::test]
async fn list_starships() {
    let resp = app().oneshot(get("/starships/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: Page<Starship> = body_json(resp).await;
    assert_eq!(page.results.len(), 3);
}

// --- planets ---

#[tokio::test]
async fn get_planet_and_missing_planet() {
    let resp = app().oneshot(get("/planets/1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let tatooine: Planet = body_json(resp).await;
    assert_eq!(tatooine.rotation_period, "23");

    let resp = app().oneshot(get("/planets/42")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- outage ---

#[tokio::test]
async fn outage_answers_500_everywhere() {
    let catalog = Catalog {
        outage: true,
        ..Catalog::seeded()
    };
    for uri in ["/people/", "/people/1/", "/starships/", "/planets/1"] {
        let resp = app_with(catalog.clone()).oneshot(get(uri)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
    }
}

#[tokio::test]
async fn unknown_route_is_404() {
    let resp = app().oneshot(get("/vehicles/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
