//! Caller-facing description of one HTTP call.
//!
//! # Design
//! A `Request` is plain data consumed exactly once by
//! [`Client::execute`](crate::client::Client::execute). Body and response
//! formats are closed enums; the string names the original wire protocol
//! used ("json", "arraybuffer", ...) are still accepted through `from_name`
//! for callers driven by external configuration.

use tracing::warn;

use crate::http::{Headers, Method};

/// Request body format, selecting the Content-Type header to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    Json,
    Form,
    Xml,
}

impl BodyFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            BodyFormat::Json => "application/json",
            BodyFormat::Form => "application/x-www-form-urlencoded",
            BodyFormat::Xml => "application/xml",
        }
    }

    /// Look up a format by its conventional name. Unrecognized names yield
    /// `None` and are ignored by the client (no Content-Type is derived).
    pub fn from_name(name: &str) -> Option<BodyFormat> {
        match name {
            "json" => Some(BodyFormat::Json),
            "form" => Some(BodyFormat::Form),
            "xml" => Some(BodyFormat::Xml),
            _ => None,
        }
    }
}

/// Requested representation of the response body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseFormat {
    #[default]
    Text,
    Json,
    /// Markup carried as text for the caller's parser.
    Document,
    Binary,
}

impl ResponseFormat {
    /// Look up a format by its conventional name ("arraybuffer" and "blob"
    /// both mean binary). Unrecognized names log a warning and fall back to
    /// plain text.
    pub fn from_name(name: &str) -> ResponseFormat {
        match name {
            "text" => ResponseFormat::Text,
            "json" => ResponseFormat::Json,
            "document" => ResponseFormat::Document,
            "arraybuffer" | "blob" => ResponseFormat::Binary,
            other => {
                warn!(format = other, "unrecognized response format, falling back to text");
                ResponseFormat::Text
            }
        }
    }
}

/// Shared options for the convenience verbs.
///
/// Defaults: no headers, text response, no body format, caching allowed.
#[derive(Debug, Clone)]
pub struct Options {
    pub headers: Headers,
    pub response_format: ResponseFormat,
    pub body_format: Option<BodyFormat>,
    pub cache: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            headers: Headers::new(),
            response_format: ResponseFormat::Text,
            body_format: None,
            cache: true,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }
}

/// One HTTP call, as described by the caller.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub body: Option<Vec<u8>>,
    pub body_format: Option<BodyFormat>,
    pub response_format: ResponseFormat,
    /// When false, a `Cache-Control: no-store` header is derived unless the
    /// caller already set one.
    pub cache: bool,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Headers::new(),
            body: None,
            body_format: None,
            response_format: ResponseFormat::Text,
            cache: true,
        }
    }

    pub(crate) fn from_options(
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
        options: Options,
    ) -> Self {
        Self {
            method,
            url: url.to_string(),
            headers: options.headers,
            body,
            body_format: options.body_format,
            response_format: options.response_format,
            cache: options.cache,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn body_format(mut self, format: BodyFormat) -> Self {
        self.body_format = Some(format);
        self
    }

    pub fn response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = format;
        self
    }

    pub fn no_cache(mut self) -> Self {
        self.cache = false;
        self
    }
}
