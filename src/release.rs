//! Release lookup and mutation keyed by tag name.

/// Tag and release lookups.
pub mod finder;

/// Find-or-create orchestration.
pub mod manager;

/// Create, update and delete operations.
pub mod mutator;

/// Outcome of an operation and its confirmation message.
pub mod outcome;

/// Caller supplied release description.
pub mod request;

/// Draft / prerelease / release classification.
pub mod status;
