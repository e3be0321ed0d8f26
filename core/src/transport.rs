//! The HTTP transport seam.
//!
//! # Design
//! `Transport` is the one I/O boundary in the crate: it executes a prepared
//! `HttpRequest` and reports exactly one completion, either an
//! `HttpResponse` or a transport failure. Everything above the trait is
//! deterministic and unit-testable with an in-memory implementation.
//!
//! `UreqTransport` is the production implementation. Status interpretation
//! belongs to the client, so the agent is configured with
//! `http_status_as_error(false)` and 4xx/5xx responses come back as data.

use crate::error::RequestError;
use crate::http::{Headers, HttpRequest, HttpResponse, Method};

/// Executes one HTTP call. Implementations must report exactly one outcome
/// per `send` and perform no retries.
pub trait Transport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, RequestError>;
}

/// Blocking transport backed by a shared `ureq::Agent`.
///
/// The agent holds the connection pool; cloning the transport clones the
/// handle, not the pool, so concurrent calls are independent.
#[derive(Debug, Clone)]
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

    /// Use a caller-configured agent. The caller is responsible for
    /// disabling status-as-error behavior if non-2xx responses should reach
    /// the client as data.
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! apply_headers {
    ($builder:expr, $headers:expr) => {{
        let mut builder = $builder;
        for (name, value) in $headers.iter() {
            builder = builder.header(name, value);
        }
        builder
    }};
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, RequestError> {
        let agent = &self.agent;
        let url = request.url.as_str();
        let headers = &request.headers;

        let result = match (request.method, request.body.as_deref()) {
            (Method::Get, _) => apply_headers!(agent.get(url), headers).call(),
            (Method::Head, _) => apply_headers!(agent.head(url), headers).call(),
            (Method::Post, Some(body)) => apply_headers!(agent.post(url), headers).send(body),
            (Method::Post, None) => apply_headers!(agent.post(url), headers).send_empty(),
            (Method::Put, Some(body)) => apply_headers!(agent.put(url), headers).send(body),
            (Method::Put, None) => apply_headers!(agent.put(url), headers).send_empty(),
            (Method::Patch, Some(body)) => apply_headers!(agent.patch(url), headers).send(body),
            (Method::Patch, None) => apply_headers!(agent.patch(url), headers).send_empty(),
            (Method::Delete, Some(body)) => {
                apply_headers!(agent.delete(url), headers).force_send_body().send(body)
            }
            (Method::Delete, None) => apply_headers!(agent.delete(url), headers).call(),
        };

        let mut response = result.map_err(|e| RequestError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers: Headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value.to_str().ok().map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_vec()
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, headers, body })
    }
}
