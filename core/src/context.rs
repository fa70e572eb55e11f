//! The composition root's handle on "the current catalog".
//!
//! # Design
//! `ServiceContext` is created once with an initial service and passed down
//! explicitly, so there is no way to reach a consumer without one. Clones
//! share the same slot: `replace` on any clone is observed by every reader on
//! its next `current()` call. Futures already running keep the `Arc` they
//! started with and are not cancelled.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::service::CatalogService;

#[derive(Clone)]
pub struct ServiceContext {
    slot: Arc<RwLock<Arc<dyn CatalogService>>>,
}

impl ServiceContext {
    pub fn new(service: Arc<dyn CatalogService>) -> Self {
        info!(source = service.source(), "catalog service provided");
        Self {
            slot: Arc::new(RwLock::new(service)),
        }
    }

    pub fn current(&self) -> Arc<dyn CatalogService> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swap the held service. Returns the previous one.
    pub fn replace(&self, service: Arc<dyn CatalogService>) -> Arc<dyn CatalogService> {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        info!(from = slot.source(), to = service.source(), "catalog service replaced");
        std::mem::replace(&mut *slot, service)
    }
}
