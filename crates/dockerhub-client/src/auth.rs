//! Token-based authentication
//!
//! A successful login installs a [`BearerTransport`] around the client's
//! current transport, so every subsequent request carries the session token
//! without callers doing anything.

use std::sync::Arc;

use reqwest::Method;

use dockerhub_core::{BasicAuth, JwtToken};

use crate::client::{HubClient, HubResponse};
use crate::error::Error;
use crate::transport::BearerTransport;

pub(crate) const LOGIN_PATH: &str = "v2/users/login/";

/// Authentication operations, obtained from [`HubClient::auth`].
pub struct AuthService<'a> {
    pub(crate) client: &'a HubClient,
}

impl AuthService<'_> {
    /// Exchange a username/password pair for a session token and install it.
    ///
    /// Logins are serialized by a client-wide lock. On any failure the
    /// client's transport is left untouched; whatever was active before,
    /// authenticated or not, stays active.
    ///
    /// Re-authenticating replaces a previously installed [`BearerTransport`]
    /// instead of nesting a second one: the stale wrapper is unwrapped and
    /// its base transport reused, so login is idempotent with respect to
    /// wrapper depth.
    ///
    /// # Errors
    ///
    /// Any [`Error`] from the underlying exchange. A successful status with
    /// an empty or tokenless body is reported as [`Error::EmptyBody`] /
    /// [`Error::Decode`]; login cannot succeed without a token.
    pub async fn login(&self, credentials: &BasicAuth) -> Result<(JwtToken, HubResponse), Error> {
        let _guard = self.client.login_lock.lock().await;

        let (out, envelope) = self
            .client
            .execute::<BasicAuth, JwtToken>(Method::POST, LOGIN_PATH, Some(credentials))
            .await?;
        let token = out.ok_or_else(|| Error::EmptyBody(LOGIN_PATH.to_string()))?;

        let current = self.client.transport_or_default();
        // Unwrap one stale auth layer, if present, rather than nesting.
        let base = current.inner().unwrap_or(current);
        let wrapper = BearerTransport::new(base, token.token.as_str())?;
        self.client.install_transport(Arc::new(wrapper));

        Ok((token, envelope))
    }
}
