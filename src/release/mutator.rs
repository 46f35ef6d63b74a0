//! Create, update and delete calls for a single release.
use log::*;
use reqwest::StatusCode;

use crate::{
    GhrelError, Result,
    forge::{
        config::RepoRef,
        manager::ForgeManager,
        request::UpdateReleaseRequest,
        types::{ForgeResponse, Release},
    },
    release::{
        outcome::{ReleaseAction, ReleaseOutcome},
        request::ReleaseRequest,
        status::ReleaseStatus,
    },
};

const MISSING_RELEASE: &str = "Release object is nil.";

/// Fails unless the forge answered with exactly `expected`.
fn expect_status<T>(
    resp: ForgeResponse<T>,
    expected: StatusCode,
    context: impl FnOnce() -> String,
) -> Result<Option<T>> {
    if resp.status != expected {
        return Err(GhrelError::remote(format!(
            "{}. {}",
            context(),
            resp.status
        )));
    }
    Ok(resp.data)
}

/// Create a release for the request's tag. The forge must answer 201.
pub async fn create_release(
    forge: &ForgeManager,
    req: &ReleaseRequest,
) -> Result<ReleaseOutcome> {
    let create = req.to_create_request();
    let status = req.status();

    let resp = forge
        .create_release(&req.repo, create)
        .await
        .map_err(|e| {
            GhrelError::remote(format!(
                "Unable to create {status} '{}'. {e}",
                req.tag()
            ))
        })?;

    let release = expect_status(resp, StatusCode::CREATED, || {
        format!("Unable to create the {status} '{}'", req.tag())
    })?
    .ok_or_else(|| {
        GhrelError::remote(format!(
            "Unable to create {status} '{}'. empty response",
            req.tag()
        ))
    })?;

    let outcome = ReleaseOutcome::new(ReleaseAction::Created, release);
    info!("{outcome}");

    Ok(outcome)
}

/// Compute the edit needed to bring `current` in line with `req`, or `None`
/// when nothing tracked differs. Empty names and bodies never overwrite.
pub fn plan_update(
    current: &Release,
    req: &ReleaseRequest,
) -> Option<UpdateReleaseRequest> {
    let mut dirty = false;
    let mut name = current.name.clone();
    let mut body = current.body.clone();

    if !req.name.is_empty() && req.name != current.name() {
        name = Some(req.name.clone());
        dirty = true;
    }

    if !req.body.is_empty() && req.body != current.body() {
        body = Some(req.body.clone());
        dirty = true;
    }

    let draft = req.draft;
    let prerelease = req.effective_prerelease();

    if current.draft != draft || current.prerelease != prerelease {
        dirty = true;
    }

    if !dirty {
        return None;
    }

    Some(UpdateReleaseRequest {
        id: current.id,
        tag_name: current.tag_name.clone(),
        name,
        body,
        draft,
        prerelease,
    })
}

/// Update a previously fetched release. No call is made when nothing
/// changed; otherwise the forge must answer 200.
pub async fn update_release(
    forge: &ForgeManager,
    release: Option<Release>,
    req: &ReleaseRequest,
) -> Result<ReleaseOutcome> {
    let current = release.ok_or_else(|| GhrelError::internal(MISSING_RELEASE))?;
    let status = req.status();

    let Some(edit) = plan_update(&current, req) else {
        let outcome = ReleaseOutcome::new(ReleaseAction::Unchanged, current);
        info!("{outcome}");
        return Ok(outcome);
    };

    let edited = Release {
        id: edit.id,
        tag_name: edit.tag_name.clone(),
        name: edit.name.clone(),
        body: edit.body.clone(),
        draft: edit.draft,
        prerelease: edit.prerelease,
    };

    let resp = forge
        .update_release(&req.repo, edit)
        .await
        .map_err(|e| {
            GhrelError::remote(format!(
                "Unable to update {status} '{}'. {e}",
                current.tag_name
            ))
        })?;

    let release = expect_status(resp, StatusCode::OK, || {
        format!("Unable to update the {status} '{}'", current.tag_name)
    })?
    .unwrap_or(edited);

    let outcome = ReleaseOutcome::new(ReleaseAction::Updated, release);
    info!("{outcome}");

    Ok(outcome)
}

/// Delete a previously fetched release. The forge must answer 200.
pub async fn delete_release(
    forge: &ForgeManager,
    repo: &RepoRef,
    release: Option<Release>,
) -> Result<ReleaseOutcome> {
    let release = release.ok_or_else(|| GhrelError::internal(MISSING_RELEASE))?;
    let status = ReleaseStatus::from_flags(release.draft, release.prerelease);

    let resp = forge
        .delete_release(repo, release.id)
        .await
        .map_err(|e| {
            GhrelError::remote(format!(
                "Unable to delete {status} '{}'. {e}",
                release.tag_name
            ))
        })?;

    expect_status(resp, StatusCode::OK, || {
        format!("Unable to delete the {status} '{}'", release.tag_name)
    })?;

    let outcome = ReleaseOutcome::new(ReleaseAction::Deleted, release);
    info!("{outcome}");

    Ok(outcome)
}
