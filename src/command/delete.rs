//! Delete the release for a tag.
use crate::{
    GhrelError, Result,
    forge::{config::RepoRef, manager::ForgeManager},
    release::{
        finder::find_release, mutator::delete_release, outcome::ReleaseOutcome,
    },
};

/// Look up the tag's release and delete it. A tag without a release is
/// reported rather than treated as an internal fault.
pub async fn execute(
    forge: &ForgeManager,
    repo: &RepoRef,
) -> Result<ReleaseOutcome> {
    let release = find_release(forge, repo).await?;

    if release.is_none() {
        return Err(GhrelError::ReleaseNotFound(repo.tag.clone()));
    }

    delete_release(forge, repo, release).await
}
