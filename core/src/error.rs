//! Error types for the request adapter.
//!
//! # Design
//! A completed call with a non-2xx status is an error to the caller, but the
//! coerced response is still the interesting part, so `Status` carries the
//! full `Response`. Transport-level failures never produce a response and
//! carry only a message. Argument problems are caught before any network
//! activity.

use std::fmt;

use crate::response::Response;

/// Errors returned by `Client::execute` and the convenience verbs.
#[derive(Debug)]
pub enum RequestError {
    /// The request was malformed (empty url, empty header name) and no call
    /// was issued.
    InvalidArgument(String),

    /// The transport failed before a status code was available.
    Transport(String),

    /// The call completed with a non-success status. Carries the coerced
    /// response, same as a successful outcome would.
    Status(Response),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            RequestError::Transport(msg) => write!(f, "transport failure: {msg}"),
            RequestError::Status(response) => write!(f, "{response}"),
        }
    }
}

impl std::error::Error for RequestError {}
