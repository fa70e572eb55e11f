//! Asynchronous retrieval lifecycle for one view instance.
//!
//! # Design
//! `Binding` is a plain state machine: `select` decides whether a fetch must
//! be issued and hands out a `RequestToken`; `settle` applies a result only if
//! its token is the one most recently issued. Superseded fetches still run to
//! completion but can never overwrite a newer selection. Failures settle into
//! `Phase::Failed`, so every fetch ends in a renderable state.
//!
//! `BindingHandle` shares a `Binding` between the view and the futures it
//! drives. The lock is never held across an `.await`.

use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase<T> {
    /// No identity selected; nothing is fetched.
    Idle,
    Loading,
    Ready(T),
    Failed(ApiError),
}

#[derive(Debug)]
pub struct Binding<I, T> {
    identity: Option<I>,
    phase: Phase<T>,
    issued: u64,
    pending: Option<u64>,
}

impl<I, T> Default for Binding<I, T> {
    fn default() -> Self {
        Self {
            identity: None,
            phase: Phase::Idle,
            issued: 0,
            pending: None,
        }
    }
}

impl<I: Clone + PartialEq + fmt::Debug, T> Binding<I, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identity(&self) -> Option<&I> {
        self.identity.as_ref()
    }

    pub fn phase(&self) -> &Phase<T> {
        &self.phase
    }

    /// Point the binding at `identity`.
    ///
    /// Returns the token for the fetch the caller must issue, or `None` when
    /// nothing needs fetching: no identity, or the same identity again.
    /// Clearing the identity also invalidates any fetch still in flight.
    pub fn select(&mut self, identity: Option<I>) -> Option<RequestToken> {
        let Some(identity) = identity else {
            self.identity = None;
            self.pending = None;
            self.phase = Phase::Idle;
            return None;
        };
        if self.identity.as_ref() == Some(&identity) {
            return None;
        }
        debug!(?identity, "identity changed");
        self.identity = Some(identity);
        Some(self.issue())
    }

    /// Re-fetch the current identity, e.g. to retry after a failure.
    pub fn refresh(&mut self) -> Option<RequestToken> {
        self.identity.as_ref()?;
        Some(self.issue())
    }

    fn issue(&mut self) -> RequestToken {
        self.issued += 1;
        self.pending = Some(self.issued);
        self.phase = Phase::Loading;
        RequestToken(self.issued)
    }

    /// Apply a fetch outcome. Returns `false` when the token is stale.
    pub fn settle(&mut self, token: RequestToken, result: Result<T, ApiError>) -> bool {
        if self.pending != Some(token.0) {
            warn!(
                token = token.0,
                latest = self.issued,
                "discarding superseded fetch result"
            );
            return false;
        }
        self.pending = None;
        self.phase = match result {
            Ok(value) => Phase::Ready(value),
            Err(e) => {
                warn!(error = %e, identity = ?self.identity, "fetch failed");
                Phase::Failed(e)
            }
        };
        true
    }
}

/// Shared handle on a `Binding`, cloned into the futures that settle it.
pub struct BindingHandle<I, T> {
    inner: Arc<Mutex<Binding<I, T>>>,
}

impl<I, T> Clone for BindingHandle<I, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<I, T> Default for BindingHandle<I, T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Binding::default())),
        }
    }
}

impl<I: Clone + PartialEq + fmt::Debug, T> BindingHandle<I, T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Binding<I, T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Select `identity` and, if that requires a fetch, run `fetch` once and
    /// settle its outcome. Returns whether the outcome was applied.
    pub async fn load<F, Fut>(&self, identity: Option<I>, fetch: F) -> bool
    where
        F: FnOnce(I) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let issued = {
            let mut binding = self.lock();
            binding.select(identity.clone()).zip(identity)
        };
        match issued {
            Some((token, identity)) => self.run(token, identity, fetch).await,
            None => false,
        }
    }

    /// Re-run `fetch` for the current identity.
    pub async fn reload<F, Fut>(&self, fetch: F) -> bool
    where
        F: FnOnce(I) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let issued = {
            let mut binding = self.lock();
            let identity = binding.identity().cloned();
            binding.refresh().zip(identity)
        };
        match issued {
            Some((token, identity)) => self.run(token, identity, fetch).await,
            None => false,
        }
    }

    async fn run<F, Fut>(&self, token: RequestToken, identity: I, fetch: F) -> bool
    where
        F: FnOnce(I) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let result = fetch(identity).await;
        self.lock().settle(token, result)
    }

    /// Read the current state without cloning it.
    pub fn inspect<R>(&self, f: impl FnOnce(&Binding<I, T>) -> R) -> R {
        f(&self.lock())
    }

    pub fn phase(&self) -> Phase<T>
    where
        T: Clone,
    {
        self.lock().phase().clone()
    }
}
