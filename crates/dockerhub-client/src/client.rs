//! Client handle and the generic request executor
//!
//! [`HubClient`] owns the base URL and the active [`Transport`], and exposes
//! one parametric call-and-decode primitive ([`HubClient::execute`]) that
//! every resource method funnels through. No resource method touches HTTP or
//! JSON on its own.

use std::io;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Request, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use url::Url;

use dockerhub_core::Page;

use crate::auth::AuthService;
use crate::error::Error;
use crate::repos::RepoService;
use crate::transport::Transport;
use crate::webhooks::WebhookService;

/// Base URL used by [`HubClient::default`].
pub const DEFAULT_HUB_URL: &str = "https://hub.docker.com/";

/// Hook invoked with every received response for diagnostic capture.
///
/// The hook gets the response envelope and the buffered body bytes; the
/// executor still owns the bytes, so the hook must not assume it is the only
/// reader. Returning an error aborts the call with [`Error::Dump`].
pub type DumpFn = Arc<dyn Fn(&HubResponse, &[u8]) -> io::Result<()> + Send + Sync>;

/// Envelope around a received HTTP response.
///
/// Built from every response before its body is consumed, so status and
/// headers stay inspectable even when the call itself fails. List endpoints
/// additionally thread their pagination fields into `page`.
#[derive(Debug, Clone)]
pub struct HubResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub page: Page,
}

impl HubResponse {
    fn from_response(res: &reqwest::Response) -> Self {
        Self {
            status: res.status(),
            headers: res.headers().clone(),
            page: Page::default(),
        }
    }
}

/// Client for the Docker Hub v2 API.
///
/// A single client may be shared across concurrent callers. The only shared
/// mutable state is the active transport: requests snapshot it without
/// blocking, and [`AuthService::login`] swaps it under its own lock. A login
/// racing in-flight requests may leave those requests on the pre-login
/// transport; that window is inherent and accepted.
pub struct HubClient {
    base_url: Url,
    transport: RwLock<Option<Arc<dyn Transport>>>,
    pub(crate) login_lock: Mutex<()>,
    dump_response: Option<DumpFn>,
}

impl HubClient {
    /// Create a client for the given base URL.
    ///
    /// The URL's path is normalized to end with `/` so that endpoint paths
    /// resolve relative to it.
    ///
    /// # Errors
    ///
    /// Returns an error if `uri` is not a valid URL.
    pub fn new(uri: &str) -> Result<Self, Error> {
        let mut base_url = Url::parse(uri)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            base_url,
            transport: RwLock::new(None),
            login_lock: Mutex::new(()),
            dump_response: None,
        })
    }

    /// Replace the transport requests are sent through.
    pub fn with_transport(self, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport: RwLock::new(Some(transport)),
            ..self
        }
    }

    /// Install a response-dump hook.
    pub fn with_dump_response(self, dump: DumpFn) -> Self {
        Self {
            dump_response: Some(dump),
            ..self
        }
    }

    /// The normalized base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Snapshot of the currently installed transport, if any.
    pub fn transport(&self) -> Option<Arc<dyn Transport>> {
        self.transport
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Authentication operations.
    pub fn auth(&self) -> AuthService<'_> {
        AuthService { client: self }
    }

    /// Repository and tag operations.
    pub fn repos(&self) -> RepoService<'_> {
        RepoService { client: self }
    }

    /// Webhook operations.
    pub fn webhooks(&self) -> WebhookService<'_> {
        WebhookService { client: self }
    }

    pub(crate) fn transport_or_default(&self) -> Arc<dyn Transport> {
        self.transport().unwrap_or_else(default_transport)
    }

    pub(crate) fn install_transport(&self, transport: Arc<dyn Transport>) {
        *self
            .transport
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(transport);
    }

    /// Execute a request and decode the response body.
    ///
    /// Resolves `path` against the base URL, serializes `body` as JSON when
    /// present (with a `Content-Type: application/json` header; no body and
    /// no header otherwise), sends the request through the current
    /// transport, and classifies the response.
    ///
    /// Returns `Ok((None, envelope))` when the response body is empty: an
    /// empty body on a successful status is not an error.
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`] if the request could not be sent or no
    ///   response was received. Never retried here.
    /// - [`Error::Api`] for a status outside 200-299; the raw body rides
    ///   along verbatim.
    /// - [`Error::Decode`] if a non-empty success body is not valid JSON for
    ///   `T`.
    pub async fn execute<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(Option<T>, HubResponse), Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (envelope, bytes) = self.send_raw(method, path, body).await?;
        if bytes.is_empty() {
            return Ok((None, envelope));
        }
        let value = serde_json::from_slice(&bytes).map_err(Error::Decode)?;
        Ok((Some(value), envelope))
    }

    /// Execute a request without decoding the response body.
    ///
    /// The body is still fully consumed (and captured into [`Error::Api`] on
    /// a non-success status).
    pub async fn execute_empty<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<HubResponse, Error>
    where
        B: Serialize + ?Sized,
    {
        let (envelope, _bytes) = self.send_raw(method, path, body).await?;
        Ok(envelope)
    }

    async fn send_raw<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(HubResponse, Vec<u8>), Error>
    where
        B: Serialize + ?Sized,
    {
        let url = self.base_url.join(path)?;
        let mut req = Request::new(method, url);

        if let Some(body) = body {
            // serde_json writes plain UTF-8: no HTML escaping of <, >, &.
            let payload = serde_json::to_vec(body).map_err(Error::Encode)?;
            req.headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            *req.body_mut() = Some(payload.into());
        }

        tracing::debug!(method = %req.method(), url = %req.url(), "sending request");

        let transport = self.transport_or_default();
        let res = transport.send(req).await.map_err(Error::Transport)?;

        let envelope = HubResponse::from_response(&res);
        let bytes = res.bytes().await.map_err(Error::Transport)?.to_vec();

        if let Some(dump) = &self.dump_response {
            dump(&envelope, &bytes).map_err(Error::Dump)?;
        }

        tracing::debug!(status = %envelope.status, len = bytes.len(), "received response");

        if !envelope.status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            return Err(Error::Api { envelope, body });
        }

        Ok((envelope, bytes))
    }
}

impl Default for HubClient {
    fn default() -> Self {
        Self::new(DEFAULT_HUB_URL).expect("default hub URL is valid")
    }
}

/// Shared fallback transport used when none has been configured.
fn default_transport() -> Arc<dyn Transport> {
    static DEFAULT: OnceLock<Arc<dyn Transport>> = OnceLock::new();
    Arc::clone(DEFAULT.get_or_init(|| Arc::new(reqwest::Client::new()) as Arc<dyn Transport>))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_appends_trailing_slash() {
        let client = HubClient::new("https://hub.docker.com").unwrap();
        assert_eq!(client.base_url().path(), "/");

        let client = HubClient::new("http://localhost:8080/api").unwrap();
        assert_eq!(client.base_url().path(), "/api/");
    }

    #[test]
    fn test_new_keeps_existing_trailing_slash() {
        let client = HubClient::new("http://localhost:8080/api/").unwrap();
        assert_eq!(client.base_url().path(), "/api/");
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        assert!(matches!(HubClient::new("not a url"), Err(Error::Url(_))));
    }

    #[test]
    fn test_paths_resolve_relative_to_base() {
        let client = HubClient::new("http://localhost:8080/api").unwrap();
        let url = client.base_url().join("v2/users/login/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/v2/users/login/");
    }

    #[test]
    fn test_transport_starts_unset() {
        let client = HubClient::default();
        assert!(client.transport().is_none());
    }
}
