//! Webhook CRUD
//!
//! A webhook groups one or more delivery URLs ("hooks") under a repository.
//! Both levels get the same verb set.

use reqwest::Method;

use dockerhub_core::{Hook, HookInput, Paged, RepoRef, Webhook, WebhookInput};

use crate::client::{HubClient, HubResponse};
use crate::error::Error;

/// Webhook operations, obtained from [`HubClient::webhooks`].
pub struct WebhookService<'a> {
    pub(crate) client: &'a HubClient,
}

impl WebhookService<'_> {
    /// List the webhooks of a repository. Pagination fields end up on the
    /// returned envelope.
    pub async fn list(&self, repo: &RepoRef) -> Result<(Vec<Webhook>, HubResponse), Error> {
        let path = format!("v2/repositories/{repo}/webhooks/");
        let (out, mut res) = self
            .client
            .execute::<(), Paged<Webhook>>(Method::GET, &path, None)
            .await?;
        let paged = out.ok_or(Error::EmptyBody(path))?;
        res.page = paged.page;
        Ok((paged.results, res))
    }

    /// Fetch a single webhook.
    pub async fn get(&self, repo: &RepoRef, id: i64) -> Result<(Webhook, HubResponse), Error> {
        let path = format!("v2/repositories/{repo}/webhooks/{id}/");
        let (out, res) = self
            .client
            .execute::<(), Webhook>(Method::GET, &path, None)
            .await?;
        let webhook = out.ok_or(Error::EmptyBody(path))?;
        Ok((webhook, res))
    }

    /// Create a webhook.
    pub async fn create(
        &self,
        repo: &RepoRef,
        input: &WebhookInput,
    ) -> Result<(Webhook, HubResponse), Error> {
        let path = format!("v2/repositories/{repo}/webhooks/");
        let (out, res) = self
            .client
            .execute::<WebhookInput, Webhook>(Method::POST, &path, Some(input))
            .await?;
        let webhook = out.ok_or(Error::EmptyBody(path))?;
        Ok((webhook, res))
    }

    /// Rename a webhook.
    pub async fn update(
        &self,
        repo: &RepoRef,
        id: i64,
        input: &WebhookInput,
    ) -> Result<(Webhook, HubResponse), Error> {
        let path = format!("v2/repositories/{repo}/webhooks/{id}/");
        let (out, res) = self
            .client
            .execute::<WebhookInput, Webhook>(Method::PATCH, &path, Some(input))
            .await?;
        let webhook = out.ok_or(Error::EmptyBody(path))?;
        Ok((webhook, res))
    }

    /// Delete a webhook.
    pub async fn delete(&self, repo: &RepoRef, id: i64) -> Result<HubResponse, Error> {
        let path = format!("v2/repositories/{repo}/webhooks/{id}/");
        self.client
            .execute_empty::<()>(Method::DELETE, &path, None)
            .await
    }

    /// List the delivery URLs of a webhook.
    pub async fn list_hooks(
        &self,
        repo: &RepoRef,
        id: i64,
    ) -> Result<(Vec<Hook>, HubResponse), Error> {
        let path = format!("v2/repositories/{repo}/webhooks/{id}/hooks/");
        let (out, mut res) = self
            .client
            .execute::<(), Paged<Hook>>(Method::GET, &path, None)
            .await?;
        let paged = out.ok_or(Error::EmptyBody(path))?;
        res.page = paged.page;
        Ok((paged.results, res))
    }

    /// Fetch a single delivery URL.
    pub async fn get_hook(
        &self,
        repo: &RepoRef,
        id: i64,
        hook_id: i64,
    ) -> Result<(Hook, HubResponse), Error> {
        let path = format!("v2/repositories/{repo}/webhooks/{id}/hooks/{hook_id}/");
        let (out, res) = self
            .client
            .execute::<(), Hook>(Method::GET, &path, None)
            .await?;
        let hook = out.ok_or(Error::EmptyBody(path))?;
        Ok((hook, res))
    }

    /// Attach a delivery URL to a webhook.
    pub async fn create_hook(
        &self,
        repo: &RepoRef,
        id: i64,
        input: &HookInput,
    ) -> Result<(Hook, HubResponse), Error> {
        let path = format!("v2/repositories/{repo}/webhooks/{id}/hooks/");
        let (out, res) = self
            .client
            .execute::<HookInput, Hook>(Method::POST, &path, Some(input))
            .await?;
        let hook = out.ok_or(Error::EmptyBody(path))?;
        Ok((hook, res))
    }

    /// Update a delivery URL.
    pub async fn update_hook(
        &self,
        repo: &RepoRef,
        id: i64,
        hook_id: i64,
        input: &HookInput,
    ) -> Result<(Hook, HubResponse), Error> {
        let path = format!("v2/repositories/{repo}/webhooks/{id}/hooks/{hook_id}/");
        let (out, res) = self
            .client
            .execute::<HookInput, Hook>(Method::PATCH, &path, Some(input))
            .await?;
        let hook = out.ok_or(Error::EmptyBody(path))?;
        Ok((hook, res))
    }

    /// Delete a delivery URL.
    pub async fn delete_hook(
        &self,
        repo: &RepoRef,
        id: i64,
        hook_id: i64,
    ) -> Result<HubResponse, Error> {
        let path = format!("v2/repositories/{repo}/webhooks/{id}/hooks/{hook_id}/");
        self.client
            .execute_empty::<()>(Method::DELETE, &path, None)
            .await
    }
}
