//! Find-or-create logic for a tag's release.
use log::*;

use crate::{
    Result,
    forge::manager::ForgeManager,
    release::{
        finder::find_release,
        mutator::{create_release, update_release},
        outcome::ReleaseOutcome,
        request::ReleaseRequest,
    },
};

/// Update the release for the request's tag if one exists, otherwise create
/// it.
pub async fn manage_release(
    forge: &ForgeManager,
    req: &ReleaseRequest,
) -> Result<ReleaseOutcome> {
    match find_release(forge, &req.repo).await? {
        Some(release) => {
            info!("release found for tag {}: updating", req.tag());
            update_release(forge, Some(release), req).await
        }
        None => {
            info!("no release found for tag {}: creating", req.tag());
            create_release(forge, req).await
        }
    }
}
