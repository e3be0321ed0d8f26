//! Response coercion and the completed-call outcome type.
//!
//! # Design
//! A failed coercion is never fatal: a body requested as JSON that does not
//! parse, or as a document that is not markup, is returned as plain text
//! with a logged warning. The adapter reports exactly one outcome per call,
//! so losing the payload to a decode error would leave the caller with
//! nothing to inspect.

use std::fmt;

use tracing::warn;

use crate::http::Headers;
use crate::request::ResponseFormat;
use crate::status::StatusClass;

/// A response body coerced into the requested representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Text(String),
    Json(serde_json::Value),
    /// Markup carried as text; parsing is left to the caller.
    Document(String),
    Binary(Vec<u8>),
}

impl Body {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Body::Text(s) | Body::Document(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Body::Json(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Body::Text(s) | Body::Document(s) => s.as_bytes(),
            Body::Json(_) => &[],
            Body::Binary(b) => b,
        }
    }
}

/// The outcome of one completed HTTP call.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub class: Option<StatusClass>,
    pub headers: Headers,
    pub body: Body,
}

impl Response {
    /// True iff the status is in [200, 299].
    pub fn is_success(&self) -> bool {
        self.class == Some(StatusClass::Success)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.class {
            Some(class) => write!(f, "HTTP {} ({class})", self.status),
            None => write!(f, "HTTP {} (unclassified)", self.status),
        }
    }
}

/// Coerce a raw body into the requested representation.
///
/// Invalid UTF-8 in a textual format is replaced rather than rejected;
/// decode failures fall back to the raw text unchanged.
pub fn coerce(format: ResponseFormat, raw: Vec<u8>) -> Body {
    match format {
        ResponseFormat::Binary => Body::Binary(raw),
        ResponseFormat::Text => Body::Text(into_text(raw)),
        ResponseFormat::Json => {
            let text = into_text(raw);
            match serde_json::from_str(&text) {
                Ok(value) => Body::Json(value),
                Err(err) => {
                    warn!(%err, "response is not valid JSON, returning raw text");
                    Body::Text(text)
                }
            }
        }
        ResponseFormat::Document => {
            let text = into_text(raw);
            if text.trim_start().starts_with('<') {
                Body::Document(text)
            } else {
                warn!("response does not look like markup, returning raw text");
                Body::Text(text)
            }
        }
    }
}

fn into_text(raw: Vec<u8>) -> String {
    match String::from_utf8(raw) {
        Ok(s) => s,
        Err(err) => {
            warn!("response body is not valid UTF-8, replacing invalid sequences");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}
