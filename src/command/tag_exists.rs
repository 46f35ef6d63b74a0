//! Verify a tag exists before releasing from it.
use log::*;

use crate::{
    Result, forge::config::RepoRef, forge::manager::ForgeManager,
    release::finder::find_tag,
};

pub async fn execute(forge: &ForgeManager, repo: &RepoRef) -> Result<()> {
    find_tag(forge, repo).await?;
    info!("Tag '{}' found in {}", repo.tag, repo.path());
    Ok(())
}
