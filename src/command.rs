//! Command implementations, one per operation selector.
//!
//! Each command runs against an already connected [`ForgeManager`] and
//! performs exactly one logical operation.
//!
//! [`ForgeManager`]: crate::forge::manager::ForgeManager

/// Delete the release anchored to a tag.
pub mod delete;

/// Create or update the release anchored to a tag.
pub mod manage;

/// Print the release anchored to a tag as JSON.
pub mod show;

/// Confirm a tag exists.
pub mod tag_exists;
