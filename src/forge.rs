//! Interface to the remote forge hosting the repository.
//!
//! Provides token-based authentication, tag and release listing, and release
//! create/edit/delete calls through a common trait.

/// Connection settings and repository references.
pub mod config;

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Dry-run aware wrapper around a forge implementation.
pub mod manager;

/// Payloads sent to the forge.
pub mod request;

/// Common traits for forge platform abstraction.
pub mod traits;

/// Data types returned by the forge.
pub mod types;
