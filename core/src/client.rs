//! The request adapter: validation, header derivation, one transport call,
//! one outcome.
//!
//! # Design
//! `execute` is split into a pure build step (`build_http_request`) and one
//! transport send, mirroring the build/parse split in the rest of the crate.
//! The convenience verbs are an enumerated, compile-time set over a shared
//! `Options` value; there is no runtime name dispatch.

use crate::error::RequestError;
use crate::http::{HttpRequest, Method};
use crate::request::{BodyFormat, Options, Request};
use crate::response::{coerce, Response};
use crate::status::StatusClass;
use crate::transport::{Transport, UreqTransport};

/// Prepare the wire request for a spec: validate, then derive caching and
/// content-type headers.
///
/// Caller-supplied headers win: `Cache-Control` and `Content-Type` are only
/// appended when the caller did not set a header of that name.
pub fn build_http_request(spec: &Request) -> Result<HttpRequest, RequestError> {
    if spec.url.trim().is_empty() {
        return Err(RequestError::InvalidArgument("url must not be empty".to_string()));
    }
    if spec.headers.iter().any(|(name, _)| name.trim().is_empty()) {
        return Err(RequestError::InvalidArgument("header name must not be empty".to_string()));
    }

    let mut headers = spec.headers.clone();
    if !spec.cache && !headers.contains("cache-control") {
        headers.append("cache-control", "no-store");
    }
    if let Some(format) = spec.body_format {
        if !headers.contains("content-type") {
            headers.append("content-type", format.content_type());
        }
    }

    Ok(HttpRequest {
        method: spec.method,
        url: spec.url.clone(),
        headers,
        body: spec.body.clone(),
    })
}

/// Blocking HTTP client over a pluggable transport.
///
/// Holds no per-call state; concurrent calls through clones or references
/// are independent.
#[derive(Debug, Clone)]
pub struct Client<T = UreqTransport> {
    transport: T,
}

impl Client<UreqTransport> {
    pub fn new() -> Self {
        Self { transport: UreqTransport::new() }
    }
}

impl Default for Client<UreqTransport> {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! read_verb {
    ($(#[$meta:meta])* $name:ident, $method:ident) => {
        $(#[$meta])*
        pub fn $name(&self, url: &str, options: Options) -> Result<Response, RequestError> {
            self.execute(&Request::from_options(Method::$method, url, None, options))
        }
    };
}

macro_rules! write_verb {
    ($(#[$meta:meta])* $name:ident, $method:ident) => {
        $(#[$meta])*
        pub fn $name(
            &self,
            url: &str,
            body: impl Into<Vec<u8>>,
            options: Options,
        ) -> Result<Response, RequestError> {
            self.execute(&Request::from_options(
                Method::$method,
                url,
                Some(body.into()),
                options,
            ))
        }
    };
}

impl<T: Transport> Client<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Execute one request: exactly one transport send, exactly one outcome.
    ///
    /// `Ok` iff the call completed with a status in [200, 299]; any other
    /// completed status is `Err(RequestError::Status)` carrying the same
    /// coerced response. Validation failures return before the transport is
    /// touched.
    pub fn execute(&self, spec: &Request) -> Result<Response, RequestError> {
        let request = build_http_request(spec)?;
        let raw = self.transport.send(&request)?;

        let response = Response {
            status: raw.status,
            class: StatusClass::of(raw.status),
            headers: raw.headers,
            body: coerce(spec.response_format, raw.body),
        };

        if response.is_success() {
            Ok(response)
        } else {
            Err(RequestError::Status(response))
        }
    }

    read_verb!(get, Get);
    read_verb!(head, Head);
    write_verb!(post, Post);
    write_verb!(put, Put);
    write_verb!(delete, Delete);
    write_verb!(patch, Patch);

    /// GET with the response coerced as JSON regardless of
    /// `options.response_format`.
    pub fn get_json(&self, url: &str, mut options: Options) -> Result<Response, RequestError> {
        options.response_format = crate::request::ResponseFormat::Json;
        self.get(url, options)
    }

    /// POST with an `application/json` Content-Type derived unless the
    /// caller set one.
    pub fn post_json(
        &self,
        url: &str,
        body: impl Into<Vec<u8>>,
        mut options: Options,
    ) -> Result<Response, RequestError> {
        options.body_format = Some(BodyFormat::Json);
        self.post(url, body, options)
    }

    /// POST with an `application/x-www-form-urlencoded` Content-Type derived
    /// unless the caller set one.
    pub fn post_form(
        &self,
        url: &str,
        body: impl Into<Vec<u8>>,
        mut options: Options,
    ) -> Result<Response, RequestError> {
        options.body_format = Some(BodyFormat::Form);
        self.post(url, body, options)
    }
}
