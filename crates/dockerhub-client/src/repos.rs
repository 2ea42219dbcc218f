//! Repository and tag lookups

use reqwest::Method;

use dockerhub_core::{Paged, RepoRef, Repository, Tag};

use crate::client::{HubClient, HubResponse};
use crate::error::Error;

/// Repository operations, obtained from [`HubClient::repos`].
pub struct RepoService<'a> {
    pub(crate) client: &'a HubClient,
}

impl RepoService<'_> {
    /// Fetch a repository.
    pub async fn get(&self, repo: &RepoRef) -> Result<(Repository, HubResponse), Error> {
        let path = format!("v2/repositories/{repo}/");
        let (out, res) = self
            .client
            .execute::<(), Repository>(Method::GET, &path, None)
            .await?;
        let repository = out.ok_or(Error::EmptyBody(path))?;
        Ok((repository, res))
    }

    /// Fetch a single tag of a repository.
    pub async fn get_tag(&self, repo: &RepoRef, tag: &str) -> Result<(Tag, HubResponse), Error> {
        let path = format!("v2/repositories/{repo}/tags/{tag}/");
        let (out, res) = self
            .client
            .execute::<(), Tag>(Method::GET, &path, None)
            .await?;
        let tag = out.ok_or(Error::EmptyBody(path))?;
        Ok((tag, res))
    }

    /// List the tags of a repository. Pagination fields end up on the
    /// returned envelope.
    pub async fn list_tags(&self, repo: &RepoRef) -> Result<(Vec<Tag>, HubResponse), Error> {
        let path = format!("v2/repositories/{repo}/tags/");
        let (out, mut res) = self
            .client
            .execute::<(), Paged<Tag>>(Method::GET, &path, None)
            .await?;
        let paged = out.ok_or(Error::EmptyBody(path))?;
        res.page = paged.page;
        Ok((paged.results, res))
    }
}
