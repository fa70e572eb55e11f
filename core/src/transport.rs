//! Executes `HttpRequest`s built by `ResourceClient`.
//!
//! # Design
//! Non-2xx statuses come back as data so that `ResourceClient` alone decides
//! what a status means. Only a missing response (connection refused, DNS,
//! broken body) is an error here.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Live transport backed by a blocking `ureq` agent.
///
/// Each call runs on tokio's blocking pool so awaiting a catalog future never
/// stalls the executor. No timeout is configured.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn network_error(path: &str, e: impl ToString) -> ApiError {
    ApiError::Network {
        path: path.to_string(),
        message: e.to_string(),
    }
}

fn call(agent: &ureq::Agent, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
    let mut builder = agent.get(&request.url);
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    let mut response = builder.call().map_err(|e| network_error(&request.path, e))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| network_error(&request.path, e))?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}

#[async_trait]
impl Transport for UreqTransport {
    #[instrument(skip_all, fields(path = %request.path))]
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let agent = self.agent.clone();
        let owned = request.clone();
        let response = tokio::task::spawn_blocking(move || call(&agent, &owned))
            .await
            .map_err(|e| network_error(&request.path, e))??;
        debug!(status = response.status, "response received");
        Ok(response)
    }
}
