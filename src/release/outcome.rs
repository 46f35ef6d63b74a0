use std::fmt;

use crate::{forge::types::Release, release::status::ReleaseStatus};

/// What a release operation did on the forge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseAction {
    Created,
    Updated,
    Unchanged,
    Deleted,
}

/// Result of a release operation with the release as last seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseOutcome {
    pub action: ReleaseAction,
    pub release: Release,
}

impl ReleaseOutcome {
    pub fn new(action: ReleaseAction, release: Release) -> Self {
        Self { action, release }
    }

    pub fn status(&self) -> ReleaseStatus {
        ReleaseStatus::from_flags(self.release.draft, self.release.prerelease)
    }
}

impl fmt::Display for ReleaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self.status();
        let tag = &self.release.tag_name;
        let id = self.release.id;

        match self.action {
            ReleaseAction::Created => write!(
                f,
                "{} '{tag}' created with ID '{id}'.",
                status.capitalized()
            ),
            ReleaseAction::Updated => {
                write!(f, "{} '{tag}({id})' updated.", status.capitalized())
            }
            ReleaseAction::Unchanged => write!(f, "No change on {status} '{tag}'."),
            ReleaseAction::Deleted => {
                write!(f, "{} '{tag}' ({id}) deleted.", status.capitalized())
            }
        }
    }
}
