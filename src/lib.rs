pub mod cli;
pub mod command;
pub mod connector;
mod error;
pub mod forge;
pub mod release;

pub use error::{GhrelError, Result};
