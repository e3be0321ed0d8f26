//! Blocking HTTP request adapter with response coercion and status
//! classification.
//!
//! # Overview
//! One call path: describe a request as plain data, hand it to
//! [`Client::execute`], get back exactly one outcome — `Ok(Response)` for a
//! 2xx status, `Err(RequestError)` for everything else. Convenience verbs
//! (`get`, `post`, `put`, `delete`, `head`, `patch` and a few
//! representation-suffixed forms) are thin sugar over the same path.
//!
//! # Design
//! - Building the wire request is pure (`client::build_http_request`); the
//!   only I/O sits behind the [`Transport`] trait, so the whole pipeline is
//!   testable with an in-memory transport.
//! - Response bodies are coerced into the requested representation (text,
//!   JSON, markup document, binary); a failed coercion logs a warning and
//!   falls back to raw text rather than erroring.
//! - No retries, no timeouts, no cancellation — one send, one outcome.

pub mod client;
pub mod error;
pub mod http;
pub mod request;
pub mod response;
pub mod status;
pub mod transport;

pub use client::Client;
pub use error::RequestError;
pub use http::{Headers, HttpRequest, HttpResponse, Method};
pub use request::{BodyFormat, Options, Request, ResponseFormat};
pub use response::{Body, Response};
pub use status::StatusClass;
pub use transport::{Transport, UreqTransport};
