//! Projects the current catalog service into view props.
//!
//! `with_service` pairs a `ServiceContext` with a mapping function chosen at
//! composition time. Every `props()` call reads the context again, so a view
//! holding an `Injected` follows `ServiceContext::replace` without being
//! rebuilt.

use std::sync::Arc;

use crate::context::ServiceContext;
use crate::service::CatalogService;

pub struct Injected<M> {
    context: ServiceContext,
    map: M,
}

pub fn with_service<M, P>(context: &ServiceContext, map: M) -> Injected<M>
where
    M: Fn(&Arc<dyn CatalogService>) -> P,
{
    Injected {
        context: context.clone(),
        map,
    }
}

impl<M> Injected<M> {
    pub fn props<P>(&self) -> P
    where
        M: Fn(&Arc<dyn CatalogService>) -> P,
    {
        (self.map)(&self.context.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CatalogConfig;
    use crate::fixture::FixtureCatalog;
    use crate::service::HttpCatalog;

    #[test]
    fn mapping_sees_current_service() {
        let context = ServiceContext::new(Arc::new(FixtureCatalog::default()));
        let injected = with_service(&context, |service: &Arc<dyn CatalogService>| {
            service.source()
        });
        assert_eq!(injected.props(), "fixture");

        context.replace(Arc::new(HttpCatalog::live(CatalogConfig::default())));
        assert_eq!(injected.props(), "live");
    }
}
