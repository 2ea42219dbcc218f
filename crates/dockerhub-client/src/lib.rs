//! # Docker Hub Client
//!
//! HTTP client for the Docker Hub v2 API.
//!
//! This crate provides:
//! - A generic JSON request executor shared by every resource method
//! - A pluggable [`Transport`] trait with a bearer-token decorator that
//!   login installs transparently
//! - Resource services for repositories, tags, and webhooks
//!
//! ## Example
//!
//! ```rust,ignore
//! use dockerhub_client::HubClient;
//! use dockerhub_core::BasicAuth;
//!
//! let client = HubClient::default();
//!
//! let credentials = BasicAuth {
//!     username: "alice".to_string(),
//!     password: "secret".to_string(),
//! };
//! client.auth().login(&credentials).await?;
//!
//! // Subsequent calls carry `Authorization: JWT <token>`.
//! let repo = "library/nginx".parse()?;
//! let (repository, _res) = client.repos().get(&repo).await?;
//! println!("{} pulls", repository.pull_count);
//! ```

mod auth;
mod client;
mod error;
mod repos;
mod transport;
mod webhooks;

pub use auth::AuthService;
pub use client::{DumpFn, HubClient, HubResponse, DEFAULT_HUB_URL};
pub use error::Error;
pub use repos::RepoService;
pub use transport::{BearerTransport, Transport, AUTH_SCHEME};
pub use webhooks::WebhookService;
