//! Tag and release lookups by tag name.
use log::*;
use reqwest::StatusCode;

use crate::{
    GhrelError, Result,
    forge::{config::RepoRef, manager::ForgeManager, types::Release},
};

/// Confirm the tag named in `repo` exists. A missing tag is an error listing
/// every other tag found.
pub async fn find_tag(forge: &ForgeManager, repo: &RepoRef) -> Result<bool> {
    let resp = forge.list_tags(repo).await.map_err(|e| {
        GhrelError::remote(format!("Tags not found in {}. {e}", repo.path()))
    })?;

    if resp.status != StatusCode::OK {
        return Err(GhrelError::remote(format!(
            "Tags not found in {}. {}",
            repo.path(),
            resp.status
        )));
    }

    let tags = resp.data.unwrap_or_default();

    debug!("found {} tags in {}", tags.len(), repo.path());

    let mut others = vec![];
    let mut found = false;

    for tag in tags {
        if tag.name == repo.tag {
            found = true;
        } else {
            others.push(tag.name);
        }
    }

    if !found {
        return Err(GhrelError::tag_not_found(&repo.tag, others));
    }

    Ok(found)
}

/// Look up the release anchored to the tag named in `repo`, drafts
/// included. `None` means no release exists yet.
pub async fn find_release(
    forge: &ForgeManager,
    repo: &RepoRef,
) -> Result<Option<Release>> {
    let resp = forge.list_releases(repo).await.map_err(|e| {
        GhrelError::remote(format!("Unable to get the releases. {e}"))
    })?;

    if resp.status != StatusCode::OK {
        return Err(GhrelError::remote(format!(
            "Unable to get the releases. {}",
            resp.status
        )));
    }

    let release = resp
        .data
        .unwrap_or_default()
        .into_iter()
        .find(|r| r.tag_name == repo.tag);

    match &release {
        Some(r) => debug!("found release {} for tag {}", r.id, repo.tag),
        None => debug!("no release found for tag {}", repo.tag),
    }

    Ok(release)
}
