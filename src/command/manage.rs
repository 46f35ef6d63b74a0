//! Create or update the release for a tag.
use crate::{
    Result,
    cli::ManageArgs,
    forge::{config::RepoRef, manager::ForgeManager},
    release::{manager::manage_release, outcome::ReleaseOutcome},
};

pub async fn execute(
    forge: &ForgeManager,
    repo: &RepoRef,
    manage: &ManageArgs,
) -> Result<ReleaseOutcome> {
    let req = manage.to_request(repo.clone())?;
    manage_release(forge, &req).await
}
