//! Containment for failures raised while rendering a subtree.
//!
//! # Design
//! A boundary is either `Healthy` or `Failed`. While failed it renders only
//! its fallback; `reset` is the one way back. Both `Err(RenderError)` and
//! panics from the child render are contained, so a failing view never takes
//! the caller down. Fetch failures never reach here: the data binding turns
//! them into model state before rendering.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{error, info};

use crate::error::RenderError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryState {
    Healthy,
    Failed { reason: String },
}

pub struct ErrorBoundary<O> {
    state: BoundaryState,
    fallback: Box<dyn Fn(&str) -> O + Send + Sync>,
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "render panicked".to_string()
    }
}

impl<O> ErrorBoundary<O> {
    pub fn new(fallback: impl Fn(&str) -> O + Send + Sync + 'static) -> Self {
        Self {
            state: BoundaryState::Healthy,
            fallback: Box::new(fallback),
        }
    }

    pub fn state(&self) -> &BoundaryState {
        &self.state
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, BoundaryState::Failed { .. })
    }

    /// Render `child`, or the fallback if it fails or already failed.
    pub fn render<F>(&mut self, child: F) -> O
    where
        F: FnOnce() -> Result<O, RenderError>,
    {
        if let BoundaryState::Failed { reason } = &self.state {
            return (self.fallback)(reason);
        }
        let reason = match catch_unwind(AssertUnwindSafe(child)) {
            Ok(Ok(output)) => return output,
            Ok(Err(e)) => e.to_string(),
            Err(payload) => panic_message(payload.as_ref()),
        };
        error!(%reason, "render failed; showing fallback");
        let output = (self.fallback)(&reason);
        self.state = BoundaryState::Failed { reason };
        output
    }

    pub fn reset(&mut self) {
        if self.is_failed() {
            info!("error boundary reset");
        }
        self.state = BoundaryState::Healthy;
    }
}
