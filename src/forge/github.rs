//! Implements the Forge trait for Github
use async_trait::async_trait;
use log::*;
use octocrab::Octocrab;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    Result,
    error::GhrelError,
    forge::{
        config::{Connection, DEFAULT_PAGE_SIZE, RepoRef},
        request::{CreateReleaseRequest, UpdateReleaseRequest},
        traits::Forge,
        types::{ForgeResponse, Release, Tag, User},
    },
};

/// GitHub forge implementation using Octocrab for API interactions with
/// tags and releases.
pub struct Github {
    base_uri: String,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication and API
    /// base URL configuration.
    pub fn new(conn: &Connection) -> Result<Self> {
        let url = Url::parse(&conn.api_url).map_err(|e| {
            GhrelError::auth(format!(
                "invalid API url '{}': {e}",
                conn.api_url
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(GhrelError::auth(format!(
                "only http and https schemes are supported for API urls: {url}"
            )));
        }

        let base_uri = url.as_str().trim_end_matches('/').to_string();

        let instance = Octocrab::builder()
            .personal_token(conn.token.clone())
            .base_uri(base_uri.clone())
            .and_then(|builder| builder.build())
            .map_err(|e| {
                GhrelError::auth(format!(
                    "unable to build client for {base_uri}: {e}"
                ))
            })?;

        Ok(Self { base_uri, instance })
    }

    fn repo_endpoint(&self, repo: &RepoRef, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.base_uri, repo.org, repo.repo, path
        )
    }
}

/// Build a [`ForgeResponse`] from a received status and raw body. The body
/// is only decoded for successful statuses.
pub fn decode<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<ForgeResponse<T>> {
    if !status.is_success() {
        debug!("forge responded with {status}: {body}");
        return Ok(ForgeResponse::status_only(status));
    }

    if body.trim().is_empty() {
        return Ok(ForgeResponse::status_only(status));
    }

    let data: T = serde_json::from_str(body)?;

    Ok(ForgeResponse::new(status, Some(data)))
}

#[async_trait]
impl Forge for Github {
    fn api_url(&self) -> String {
        self.base_uri.clone()
    }

    async fn current_user(&self) -> Result<ForgeResponse<User>> {
        let endpoint = format!("{}/user", self.base_uri);
        let response = self.instance._get(endpoint).await?;
        let status = response.status();
        let body = self.instance.body_to_string(response).await?;
        decode(status, &body)
    }

    async fn list_tags(&self, repo: &RepoRef) -> Result<ForgeResponse<Vec<Tag>>> {
        let endpoint = self
            .repo_endpoint(repo, &format!("tags?per_page={DEFAULT_PAGE_SIZE}"));
        let response = self.instance._get(endpoint).await?;
        let status = response.status();
        let body = self.instance.body_to_string(response).await?;
        decode(status, &body)
    }

    async fn list_releases(
        &self,
        repo: &RepoRef,
    ) -> Result<ForgeResponse<Vec<Release>>> {
        // authenticated listing includes drafts
        let endpoint = self.repo_endpoint(
            repo,
            &format!("releases?per_page={DEFAULT_PAGE_SIZE}"),
        );
        let response = self.instance._get(endpoint).await?;
        let status = response.status();
        let body = self.instance.body_to_string(response).await?;
        decode(status, &body)
    }

    async fn create_release(
        &self,
        repo: &RepoRef,
        req: CreateReleaseRequest,
    ) -> Result<ForgeResponse<Release>> {
        let endpoint = self.repo_endpoint(repo, "releases");

        info!("creating release for tag: {}", req.tag_name);

        let response = self.instance._post(endpoint, Some(&req)).await?;
        let status = response.status();
        let body = self.instance.body_to_string(response).await?;
        decode(status, &body)
    }

    async fn update_release(
        &self,
        repo: &RepoRef,
        req: UpdateReleaseRequest,
    ) -> Result<ForgeResponse<Release>> {
        let endpoint = self.repo_endpoint(repo, &format!("releases/{}", req.id));

        info!("updating release {} for tag: {}", req.id, req.tag_name);

        let response = self.instance._patch(endpoint, Some(&req)).await?;
        let status = response.status();
        let body = self.instance.body_to_string(response).await?;
        decode(status, &body)
    }

    async fn delete_release(
        &self,
        repo: &RepoRef,
        id: u64,
    ) -> Result<ForgeResponse<()>> {
        let endpoint = self.repo_endpoint(repo, &format!("releases/{id}"));

        info!("deleting release {id}");

        let response = self.instance._delete(endpoint, None::<&()>).await?;

        Ok(ForgeResponse::status_only(response.status()))
    }
}
