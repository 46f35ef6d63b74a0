//! Manager that wraps forge implementations
use log::*;
use reqwest::StatusCode;

use crate::{
    Result,
    forge::{
        config::RepoRef,
        request::{CreateReleaseRequest, UpdateReleaseRequest},
        traits::Forge,
        types::{ForgeResponse, Release, Tag, User},
    },
};

/// Wraps a [`Forge`] and short circuits write calls when running dry.
pub struct ForgeManager {
    forge: Box<dyn Forge>,
    dry_run: bool,
}

impl ForgeManager {
    pub fn new(forge: Box<dyn Forge>, dry_run: bool) -> Self {
        Self { forge, dry_run }
    }

    pub fn api_url(&self) -> String {
        self.forge.api_url()
    }

    pub async fn current_user(&self) -> Result<ForgeResponse<User>> {
        self.forge.current_user().await
    }

    pub async fn list_tags(
        &self,
        repo: &RepoRef,
    ) -> Result<ForgeResponse<Vec<Tag>>> {
        debug!("listing tags for {}", repo.path());
        self.forge.list_tags(repo).await
    }

    pub async fn list_releases(
        &self,
        repo: &RepoRef,
    ) -> Result<ForgeResponse<Vec<Release>>> {
        debug!("listing releases for {}", repo.path());
        self.forge.list_releases(repo).await
    }

    pub async fn create_release(
        &self,
        repo: &RepoRef,
        req: CreateReleaseRequest,
    ) -> Result<ForgeResponse<Release>> {
        if self.dry_run {
            warn!("dry_run: would create release: req: {:#?}", req);
            return Ok(ForgeResponse::new(
                StatusCode::CREATED,
                Some(Release {
                    id: 0,
                    tag_name: req.tag_name,
                    name: Some(req.name),
                    body: Some(req.body),
                    draft: req.draft,
                    prerelease: req.prerelease,
                }),
            ));
        }
        self.forge.create_release(repo, req).await
    }

    pub async fn update_release(
        &self,
        repo: &RepoRef,
        req: UpdateReleaseRequest,
    ) -> Result<ForgeResponse<Release>> {
        if self.dry_run {
            warn!("dry_run: would update release: req: {:#?}", req);
            return Ok(ForgeResponse::new(
                StatusCode::OK,
                Some(Release {
                    id: req.id,
                    tag_name: req.tag_name,
                    name: req.name,
                    body: req.body,
                    draft: req.draft,
                    prerelease: req.prerelease,
                }),
            ));
        }
        self.forge.update_release(repo, req).await
    }

    pub async fn delete_release(
        &self,
        repo: &RepoRef,
        id: u64,
    ) -> Result<ForgeResponse<()>> {
        if self.dry_run {
            warn!(
                "dry_run: would delete release: repo: {}, id: {id}",
                repo.path()
            );
            return Ok(ForgeResponse::status_only(StatusCode::OK));
        }
        self.forge.delete_release(repo, id).await
    }
}
