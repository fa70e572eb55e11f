//! Catalog views composed from service injection, data binding and the
//! text renderers.
//!
//! Each constructor picks a mapping from `CatalogService` to props, binds it
//! to a fresh binding, and attaches a renderer. Views render to
//! `Result<String, RenderError>` so they can be placed under an
//! `ErrorBoundary`.

use std::sync::Arc;

use crate::context::ServiceContext;
use crate::error::RenderError;
use crate::inject::with_service;
use crate::presentation::{item_details, item_list, render_model_and_name, render_name};
use crate::service::CatalogService;
use crate::types::{Person, Planet, Starship};
use crate::view::{
    bind_detail, bind_list, image_url, item_fetch, list_fetch, DetailProps, DetailView, ListProps,
    ListView,
};

pub type Rendered = Result<String, RenderError>;
pub type CatalogList<T> = ListView<T, Rendered>;
pub type CatalogDetails<T> = DetailView<T, Rendered>;

pub fn people_list_props(service: &Arc<dyn CatalogService>) -> ListProps<Person> {
    let service = Arc::clone(service);
    ListProps {
        get_data: list_fetch(move || {
            let service = Arc::clone(&service);
            async move { service.get_all_people().await }
        }),
    }
}

pub fn starships_list_props(service: &Arc<dyn CatalogService>) -> ListProps<Starship> {
    let service = Arc::clone(service);
    ListProps {
        get_data: list_fetch(move || {
            let service = Arc::clone(&service);
            async move { service.get_all_starships().await }
        }),
    }
}

pub fn planets_list_props(service: &Arc<dyn CatalogService>) -> ListProps<Planet> {
    let service = Arc::clone(service);
    ListProps {
        get_data: list_fetch(move || {
            let service = Arc::clone(&service);
            async move { service.get_all_planets().await }
        }),
    }
}

pub fn person_details_props(service: &Arc<dyn CatalogService>) -> DetailProps<Person> {
    let fetcher = Arc::clone(service);
    let imager = Arc::clone(service);
    DetailProps {
        get_data: item_fetch(move |id| {
            let service = Arc::clone(&fetcher);
            async move { service.get_person(&id).await }
        }),
        get_image_url: image_url(move |person: &Person| imager.get_person_image(person)),
    }
}

pub fn starship_details_props(service: &Arc<dyn CatalogService>) -> DetailProps<Starship> {
    let fetcher = Arc::clone(service);
    let imager = Arc::clone(service);
    DetailProps {
        get_data: item_fetch(move |id| {
            let service = Arc::clone(&fetcher);
            async move { service.get_starship(&id).await }
        }),
        get_image_url: image_url(move |ship: &Starship| imager.get_starship_image(ship)),
    }
}

pub fn planet_details_props(service: &Arc<dyn CatalogService>) -> DetailProps<Planet> {
    let fetcher = Arc::clone(service);
    let imager = Arc::clone(service);
    DetailProps {
        get_data: item_fetch(move |id| {
            let service = Arc::clone(&fetcher);
            async move { service.get_planet(&id).await }
        }),
        get_image_url: image_url(move |planet: &Planet| imager.get_planet_image(planet)),
    }
}

pub fn person_list(context: &ServiceContext) -> CatalogList<Person> {
    let injected = with_service(context, people_list_props);
    bind_list(move || injected.props(), |model| item_list(model, render_name))
}

pub fn starship_list(context: &ServiceContext) -> CatalogList<Starship> {
    let injected = with_service(context, starships_list_props);
    bind_list(move || injected.props(), |model| {
        item_list(model, render_model_and_name)
    })
}

pub fn planet_list(context: &ServiceContext) -> CatalogList<Planet> {
    let injected = with_service(context, planets_list_props);
    bind_list(move || injected.props(), |model| item_list(model, render_name))
}

pub fn person_details(context: &ServiceContext) -> CatalogDetails<Person> {
    let injected = with_service(context, person_details_props);
    bind_detail(move || injected.props(), item_details)
}

pub fn starship_details(context: &ServiceContext) -> CatalogDetails<Starship> {
    let injected = with_service(context, starship_details_props);
    bind_detail(move || injected.props(), item_details)
}

pub fn planet_details(context: &ServiceContext) -> CatalogDetails<Planet> {
    let injected = with_service(context, planet_details_props);
    bind_detail(move || injected.props(), item_details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::FixtureCatalog;
    use crate::presentation::{SELECT_PROMPT, SPINNER};

    fn context() -> ServiceContext {
        ServiceContext::new(Arc::new(FixtureCatalog::default()))
    }

    #[tokio::test]
    async fn person_list_renders_fixture_people() {
        let list = person_list(&context());
        assert_eq!(list.render().unwrap(), SPINNER);

        list.mount().await;
        assert_eq!(
            list.render().unwrap(),
            "[1] Bilbo Baggins [TEST DATA]\n[2] Frodo Baggins [TEST DATA]\n"
        );
    }

    #[tokio::test]
    async fn starship_list_labels_with_model() {
        let list = starship_list(&context());
        list.mount().await;
        assert_eq!(
            list.render().unwrap(),
            "[1] USS Enterprise [TEST DATA] (NCC-1701-C)\n"
        );
    }

    #[tokio::test]
    async fn planet_details_prompt_then_record() {
        let details = planet_details(&context());
        assert_eq!(details.render().unwrap(), SELECT_PROMPT);

        details.select(Some("1")).await;
        let text = details.render().unwrap();
        assert!(text.starts_with(
            "image: https://starwars-visualguide.com/assets/img/planets/1.jpg\nEarth [TEST DATA]\n"
        ));
        assert!(text.contains("  Diameter: 12.742 km\n"));
    }

    #[tokio::test]
    async fn person_details_unknown_id_renders_error() {
        let details = person_details(&context());
        details.select(Some("42")).await;
        assert_eq!(
            details.render().unwrap(),
            "BOOM! Something has gone terribly wrong: person 42 not found"
        );
    }
}
