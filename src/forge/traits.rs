//! Traits related to remote git forges
use async_trait::async_trait;

use crate::{
    Result,
    forge::{
        config::RepoRef,
        request::{CreateReleaseRequest, UpdateReleaseRequest},
        types::{ForgeResponse, Release, Tag, User},
    },
};

/// Remote API surface used to manage releases.
///
/// Implementations return `Err` only for transport level failures. Any
/// response received from the remote, successful or not, is returned as a
/// [`ForgeResponse`] so callers can check the exact status they expect.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Forge {
    /// REST API base URL the client is bound to.
    fn api_url(&self) -> String;
    async fn current_user(&self) -> Result<ForgeResponse<User>>;
    async fn list_tags(&self, repo: &RepoRef) -> Result<ForgeResponse<Vec<Tag>>>;
    async fn list_releases(
        &self,
        repo: &RepoRef,
    ) -> Result<ForgeResponse<Vec<Release>>>;
    async fn create_release(
        &self,
        repo: &RepoRef,
        req: CreateReleaseRequest,
    ) -> Result<ForgeResponse<Release>>;
    async fn update_release(
        &self,
        repo: &RepoRef,
        req: UpdateReleaseRequest,
    ) -> Result<ForgeResponse<Release>>;
    async fn delete_release(
        &self,
        repo: &RepoRef,
        id: u64,
    ) -> Result<ForgeResponse<()>>;
}
