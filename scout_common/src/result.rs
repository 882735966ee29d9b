//! Result type alias shared across the workspace.
//!
//! Defaults the error type to the common `ScoutError`, so functions can simply
//! return `Result<T>`.
use crate::error::ScoutError;

/// Workspace-wide `Result` alias with `ScoutError` as the default error.
pub type Result<T, E = ScoutError> = std::result::Result<T, E>;
