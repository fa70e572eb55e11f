//! Bound view-models: a binding, a props source and a render capability.
//!
//! # Design
//! `bind_list` and `bind_detail` take the fetch side as a props source (a
//! function returning `ListProps`/`DetailProps`, usually `Injected::props`)
//! and the presentation side as a render function over the view-model. The
//! source is asked for props each time a fetch is issued, so a swapped
//! catalog is picked up without rebuilding the view.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::binding::{BindingHandle, Phase};
use crate::error::ApiError;

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

pub type ListFetch<T> = Arc<dyn Fn() -> BoxFuture<Result<Vec<T>, ApiError>> + Send + Sync>;
pub type ItemFetch<T> = Arc<dyn Fn(String) -> BoxFuture<Result<T, ApiError>> + Send + Sync>;
pub type ImageUrl<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

pub fn list_fetch<T, F, Fut>(f: F) -> ListFetch<T>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + Send + 'static,
{
    Arc::new(move || Box::pin(f()) as BoxFuture<_>)
}

pub fn item_fetch<T, F, Fut>(f: F) -> ItemFetch<T>
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
{
    Arc::new(move |id| Box::pin(f(id)) as BoxFuture<_>)
}

pub fn image_url<T, F>(f: F) -> ImageUrl<T>
where
    F: Fn(&T) -> String + Send + Sync + 'static,
{
    Arc::new(f)
}

pub struct ListProps<T> {
    pub get_data: ListFetch<T>,
}

impl<T> Clone for ListProps<T> {
    fn clone(&self) -> Self {
        Self {
            get_data: Arc::clone(&self.get_data),
        }
    }
}

pub struct DetailProps<T> {
    pub get_data: ItemFetch<T>,
    pub get_image_url: ImageUrl<T>,
}

impl<T> Clone for DetailProps<T> {
    fn clone(&self) -> Self {
        Self {
            get_data: Arc::clone(&self.get_data),
            get_image_url: Arc::clone(&self.get_image_url),
        }
    }
}

/// What a list renderer sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListModel<T> {
    pub data: Option<Vec<T>>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

/// A resolved detail item together with its image url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub item: T,
    pub image: String,
}

/// What a detail renderer sees. `selected` is false in the
/// "nothing selected" state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailModel<T> {
    pub selected: bool,
    pub item: Option<T>,
    pub image: Option<String>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

type Source<P> = Box<dyn Fn() -> P + Send + Sync>;
type Render<M, O> = Box<dyn Fn(&M) -> O + Send + Sync>;

pub struct ListView<T, O> {
    binding: BindingHandle<(), Vec<T>>,
    source: Source<ListProps<T>>,
    render: Render<ListModel<T>, O>,
}

pub fn bind_list<T, O>(
    source: impl Fn() -> ListProps<T> + Send + Sync + 'static,
    render: impl Fn(&ListModel<T>) -> O + Send + Sync + 'static,
) -> ListView<T, O> {
    ListView {
        binding: BindingHandle::new(),
        source: Box::new(source),
        render: Box::new(render),
    }
}

impl<T: Clone, O> ListView<T, O> {
    /// First activation: fetch the collection once.
    pub async fn mount(&self) -> bool {
        let props = (self.source)();
        self.binding.load(Some(()), move |()| (props.get_data)()).await
    }

    pub async fn reload(&self) -> bool {
        let props = (self.source)();
        self.binding.reload(move |()| (props.get_data)()).await
    }

    pub fn model(&self) -> ListModel<T> {
        self.binding.inspect(|binding| match binding.phase() {
            Phase::Idle => ListModel {
                data: None,
                loading: false,
                error: None,
            },
            Phase::Loading => ListModel {
                data: None,
                loading: true,
                error: None,
            },
            Phase::Ready(data) => ListModel {
                data: Some(data.clone()),
                loading: false,
                error: None,
            },
            Phase::Failed(e) => ListModel {
                data: None,
                loading: false,
                error: Some(e.clone()),
            },
        })
    }

    pub fn render(&self) -> O {
        (self.render)(&self.model())
    }

    pub fn binding(&self) -> &BindingHandle<(), Vec<T>> {
        &self.binding
    }
}

pub struct DetailView<T, O> {
    binding: BindingHandle<String, Resolved<T>>,
    source: Source<DetailProps<T>>,
    render: Render<DetailModel<T>, O>,
}

pub fn bind_detail<T, O>(
    source: impl Fn() -> DetailProps<T> + Send + Sync + 'static,
    render: impl Fn(&DetailModel<T>) -> O + Send + Sync + 'static,
) -> DetailView<T, O> {
    DetailView {
        binding: BindingHandle::new(),
        source: Box::new(source),
        render: Box::new(render),
    }
}

async fn resolve<T>(props: DetailProps<T>, id: String) -> Result<Resolved<T>, ApiError> {
    let item = (props.get_data)(id).await?;
    let image = (props.get_image_url)(&item);
    Ok(Resolved { item, image })
}

impl<T: Clone, O> DetailView<T, O> {
    /// Change the identity input. A blank or absent id clears the selection.
    pub async fn select(&self, id: Option<&str>) -> bool {
        let identity = id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        let props = (self.source)();
        self.binding.load(identity, move |id| resolve(props, id)).await
    }

    pub async fn reload(&self) -> bool {
        let props = (self.source)();
        self.binding.reload(move |id| resolve(props, id)).await
    }

    pub fn model(&self) -> DetailModel<T> {
        self.binding.inspect(|binding| {
            let selected = binding.identity().is_some();
            match binding.phase() {
                Phase::Idle => DetailModel {
                    selected,
                    item: None,
                    image: None,
                    loading: false,
                    error: None,
                },
                Phase::Loading => DetailModel {
                    selected,
                    item: None,
                    image: None,
                    loading: true,
                    error: None,
                },
                Phase::Ready(resolved) => DetailModel {
                    selected,
                    item: Some(resolved.item.clone()),
                    image: Some(resolved.image.clone()),
                    loading: false,
                    error: None,
                },
                Phase::Failed(e) => DetailModel {
                    selected,
                    item: None,
                    image: None,
                    loading: false,
                    error: Some(e.clone()),
                },
            }
        })
    }

    pub fn render(&self) -> O {
        (self.render)(&self.model())
    }

    pub fn binding(&self) -> &BindingHandle<String, Resolved<T>> {
        &self.binding
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn counting_list(calls: Arc<AtomicUsize>) -> ListProps<u32> {
        ListProps {
            get_data: list_fetch(move || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(vec![1, 2, 3]) }
            }),
        }
    }

    #[tokio::test]
    async fn list_mount_fetches_once_and_renders() {
        let calls = Arc::new(AtomicUsize::new(0));
        let props = counting_list(calls.clone());
        let view = bind_list(move || props.clone(), |m: &ListModel<u32>| {
            m.data.as_ref().map(|d| d.len()).unwrap_or(0)
        });

        assert!(view.mount().await);
        assert!(!view.mount().await);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(view.render(), 3);
        assert!(!view.model().loading);
    }

    #[tokio::test]
    async fn list_reload_fetches_again() {
        let calls = Arc::new(AtomicUsize::new(0));
        let props = counting_list(calls.clone());
        let view = bind_list(move || props.clone(), |_: &ListModel<u32>| ());

        view.mount().await;
        assert!(view.reload().await);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn list_failure_is_exposed_in_model() {
        let props = ListProps::<u32> {
            get_data: list_fetch(|| async {
                Err(ApiError::Network {
                    path: "/people/".to_string(),
                    message: "connection refused".to_string(),
                })
            }),
        };
        let view = bind_list(move || props.clone(), |m: &ListModel<u32>| m.error.clone());

        assert!(view.mount().await);
        let model = view.model();
        assert!(!model.loading);
        assert!(model.data.is_none());
        assert!(matches!(view.render(), Some(ApiError::Network { .. })));
    }

    fn detail_props() -> DetailProps<String> {
        DetailProps {
            get_data: item_fetch(|id| async move { Ok(format!("record {id}")) }),
            get_image_url: image_url(|item: &String| format!("img/{item}.jpg")),
        }
    }

    #[tokio::test]
    async fn detail_select_resolves_item_and_image() {
        let view = bind_detail(detail_props, |m: &DetailModel<String>| m.clone());

        assert!(view.select(Some("11")).await);
        let model = view.render();
        assert!(model.selected);
        assert_eq!(model.item.as_deref(), Some("record 11"));
        assert_eq!(model.image.as_deref(), Some("img/record 11.jpg"));
    }

    #[tokio::test]
    async fn detail_blank_id_is_nothing_selected() {
        let view = bind_detail(detail_props, |m: &DetailModel<String>| m.clone());

        assert!(!view.select(Some("  ")).await);
        let model = view.model();
        assert!(!model.selected);
        assert!(!model.loading);
        assert!(model.item.is_none());
    }

    #[tokio::test]
    async fn detail_clearing_selection_returns_to_prompt() {
        let view = bind_detail(detail_props, |m: &DetailModel<String>| m.clone());

        view.select(Some("5")).await;
        view.select(None).await;
        assert!(!view.model().selected);
        assert!(view.model().item.is_none());
    }
}
