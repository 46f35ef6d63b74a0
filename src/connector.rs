//! Authenticated client construction and token verification.
use log::*;
use reqwest::StatusCode;

use crate::{
    GhrelError, Result,
    forge::{config::Connection, github::Github, manager::ForgeManager},
};

/// Build a GitHub client for `conn` and verify its token. The returned
/// manager is ready for use.
pub async fn connect(conn: &Connection, dry_run: bool) -> Result<ForgeManager> {
    let github = Github::new(conn)?;
    let forge = ForgeManager::new(Box::new(github), dry_run);

    verify_identity(&forge).await?;

    Ok(forge)
}

/// Fetch the account owning the token. Any failure is an authentication
/// error.
pub async fn verify_identity(forge: &ForgeManager) -> Result<String> {
    info!("Github API URL used : {}", forge.api_url());

    let resp = forge.current_user().await.map_err(|e| {
        GhrelError::auth(format!("Unable to get the owner of the token given. {e}"))
    })?;

    if resp.status != StatusCode::OK {
        return Err(GhrelError::auth(format!(
            "Unable to get the owner of the token given. {}",
            resp.status
        )));
    }

    let user = resp.data.ok_or_else(|| {
        GhrelError::auth("Unable to get the owner of the token given. empty response")
    })?;

    info!("Connection successful. Token given by user '{}'", user.login);

    Ok(user.login)
}
