//! Client error types
//!
//! Three failure classes stay distinct: the request never got out
//! ([`Error::Transport`]), the server rejected it ([`Error::Api`]), or the
//! server accepted it but returned something unparseable
//! ([`Error::Decode`]).

use reqwest::header::InvalidHeaderValue;
use reqwest::StatusCode;
use thiserror::Error;

use crate::client::HubResponse;

/// Errors returned by the Docker Hub client
#[derive(Debug, Error)]
pub enum Error {
    #[error("parsing request URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("encoding request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("sending request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("dumping response: {0}")]
    Dump(#[source] std::io::Error),

    /// Response status outside 200-299. The body is the raw JSON the server
    /// sent, preserved verbatim; the envelope keeps status and headers
    /// inspectable.
    #[error("{}: {body}", .envelope.status)]
    Api { envelope: HubResponse, body: String },

    #[error("decoding response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// A successful response with an empty body where a payload was
    /// required.
    #[error("empty response body from {0}")]
    EmptyBody(String),

    #[error("invalid bearer token: {0}")]
    Token(#[from] InvalidHeaderValue),
}

impl Error {
    /// The HTTP status of an API rejection, if that is what this error is.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { envelope, .. } => Some(envelope.status),
            _ => None,
        }
    }
}
