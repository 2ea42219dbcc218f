//! Pluggable HTTP transports and the bearer-credential decorator

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, InvalidHeaderValue, AUTHORIZATION};
use reqwest::{Request, Response};

/// Authorization scheme the Hub expects for session tokens.
pub const AUTH_SCHEME: &str = "JWT";

/// The component responsible for actually sending an HTTP request.
///
/// Transports compose by decoration: a wrapper holds another transport and
/// forwards (possibly amended) requests to it. [`reqwest::Client`] is the
/// terminal transport that talks to the network.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and return the raw response.
    async fn send(&self, req: Request) -> Result<Response, reqwest::Error>;

    /// The transport this one wraps, if any.
    ///
    /// Decorators return `Some`; terminal transports keep the default
    /// `None`. Installers use this to unwrap a stale decorator instead of
    /// nesting a new one around it.
    fn inner(&self) -> Option<Arc<dyn Transport>> {
        None
    }
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn send(&self, req: Request) -> Result<Response, reqwest::Error> {
        self.execute(req).await
    }
}

/// A pass-through transport that injects `Authorization: JWT <token>` into
/// outgoing requests.
///
/// A request that already carries an `Authorization` header is forwarded
/// untouched: caller-supplied credentials always win over the held token.
pub struct BearerTransport {
    inner: Arc<dyn Transport>,
    token: String,
    header: HeaderValue,
}

impl BearerTransport {
    /// Wrap `inner`, injecting `token` into unauthenticated requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the token contains bytes that cannot appear in an
    /// HTTP header value.
    pub fn new(inner: Arc<dyn Transport>, token: impl Into<String>) -> Result<Self, InvalidHeaderValue> {
        let token = token.into();
        let mut header = HeaderValue::from_str(&format!("{AUTH_SCHEME} {token}"))?;
        header.set_sensitive(true);
        Ok(Self {
            inner,
            token,
            header,
        })
    }

    /// The held session token.
    pub fn token(&self) -> &str {
        &self.token
    }
}

#[async_trait]
impl Transport for BearerTransport {
    async fn send(&self, mut req: Request) -> Result<Response, reqwest::Error> {
        if !req.headers().contains_key(AUTHORIZATION) {
            req.headers_mut().insert(AUTHORIZATION, self.header.clone());
        }
        self.inner.send(req).await
    }

    fn inner(&self) -> Option<Arc<dyn Transport>> {
        Some(Arc::clone(&self.inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_transport_has_no_inner() {
        let client = reqwest::Client::new();
        assert!(Transport::inner(&client).is_none());
    }

    #[test]
    fn test_wrapper_exposes_inner_transport() {
        let base: Arc<dyn Transport> = Arc::new(reqwest::Client::new());
        let wrapper = BearerTransport::new(base, "abc123").unwrap();
        assert_eq!(wrapper.token(), "abc123");

        let unwrapped = wrapper.inner().expect("wrapper must expose its inner");
        assert!(unwrapped.inner().is_none());
    }

    #[test]
    fn test_rejects_unencodable_token() {
        let base: Arc<dyn Transport> = Arc::new(reqwest::Client::new());
        assert!(BearerTransport::new(base, "bad\ntoken").is_err());
    }
}
