//! Print the release for a tag as JSON.
use crate::{
    GhrelError, Result,
    forge::{config::RepoRef, manager::ForgeManager},
    release::finder::find_release,
};

pub async fn execute(forge: &ForgeManager, repo: &RepoRef) -> Result<String> {
    let release = find_release(forge, repo)
        .await?
        .ok_or_else(|| GhrelError::ReleaseNotFound(repo.tag.clone()))?;

    let json = serde_json::to_string_pretty(&release)?;

    Ok(json)
}
