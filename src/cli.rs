//! CLI argument parsing and connection configuration.
use clap::{Parser, Subcommand};
use secrecy::SecretString;
use std::env;

use crate::{
    GhrelError, Result,
    forge::config::{Connection, DEFAULT_API_URL, RepoRef},
    release::request::ReleaseRequest,
};

/// Environment variable consulted when no token flag is given.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";
/// Environment variable consulted when no API url flag is given.
pub const API_URL_ENV_VAR: &str = "GITHUB_API_URL";

/// Manage GitHub releases for a tag: verify, create or update, delete.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = "", global = true)]
    /// GitHub personal access token. Falls back to GITHUB_TOKEN env var.
    pub token: String,

    #[arg(long, default_value = "", global = true)]
    /// GitHub API url. Falls back to GITHUB_API_URL env var, then
    /// https://api.github.com. Set this for GitHub Enterprise.
    pub api_url: String,

    #[arg(long, default_value = "", global = true)]
    /// Organization or user owning the repository.
    pub org: String,

    #[arg(long, default_value = "", global = true)]
    /// Repository name.
    pub repo: String,

    #[arg(long, default_value_t = false, global = true)]
    /// Log write calls instead of sending them.
    pub dry_run: bool,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Release operation subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Verify a tag exists in the repository.
    TagExists(TagArgs),

    /// Create the release for a tag, or update it if it already exists.
    Manage(ManageArgs),

    /// Delete the release for a tag.
    Delete(TagArgs),

    /// Print the release for a tag as JSON.
    Show(TagArgs),
}

/// Arguments for subcommands that only target a tag.
#[derive(clap::Args, Debug)]
pub struct TagArgs {
    #[arg(long)]
    /// Tag name the release is anchored to.
    pub tag: String,
}

/// Arguments describing the desired release.
#[derive(clap::Args, Debug)]
pub struct ManageArgs {
    #[arg(long)]
    /// Tag name the release is anchored to.
    pub tag: String,

    #[arg(long, default_value = "")]
    /// Release name. Defaults to the tag name on creation.
    pub name: String,

    #[arg(long, default_value = "")]
    /// Release notes.
    pub description: String,

    #[arg(long, default_value_t = false)]
    /// Keep the release unpublished. Overrides --prerelease.
    pub draft: bool,

    #[arg(long, default_value_t = false)]
    /// Flag the release as not production ready.
    pub prerelease: bool,
}

impl Args {
    /// Resolve token and API url from flags, then environment.
    pub fn get_connection(&self) -> Result<Connection> {
        resolve_connection(
            &self.token,
            &self.api_url,
            env::var(TOKEN_ENV_VAR).ok(),
            env::var(API_URL_ENV_VAR).ok(),
        )
    }

    /// Target repository for `tag`.
    pub fn repo_ref(&self, tag: &str) -> Result<RepoRef> {
        if self.org.is_empty() {
            return Err(GhrelError::InvalidArgs("must set --org".into()));
        }

        if self.repo.is_empty() {
            return Err(GhrelError::InvalidArgs("must set --repo".into()));
        }

        if tag.is_empty() {
            return Err(GhrelError::InvalidArgs("must set --tag".into()));
        }

        Ok(RepoRef::new(&self.org, &self.repo, tag))
    }
}

impl ManageArgs {
    pub fn to_request(&self, repo: RepoRef) -> Result<ReleaseRequest> {
        ReleaseRequest::builder()
            .repo(repo)
            .name(self.name.as_str())
            .body(self.description.as_str())
            .draft(self.draft)
            .prerelease(self.prerelease)
            .build()
    }
}

fn resolve_connection(
    token_flag: &str,
    api_url_flag: &str,
    env_token: Option<String>,
    env_api_url: Option<String>,
) -> Result<Connection> {
    let mut token = token_flag.to_string();

    if token.is_empty()
        && let Some(env_var_token) = env_token
    {
        token = env_var_token;
    }

    if token.is_empty() {
        return Err(GhrelError::InvalidArgs(format!(
            "must set --token or {TOKEN_ENV_VAR}"
        )));
    }

    let mut api_url = api_url_flag.to_string();

    if api_url.is_empty()
        && let Some(env_var_url) = env_api_url
    {
        api_url = env_var_url;
    }

    if api_url.is_empty() {
        api_url = DEFAULT_API_URL.to_string();
    }

    Ok(Connection {
        token: SecretString::from(token),
        api_url,
    })
}
