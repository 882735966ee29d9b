//! Error types shared between the library and the command-line client.
//!
//! `ScoutError` covers the failures that are *not* presented to the spreadsheet
//! user as a message: transport problems, serialization and I/O. Bad cell input
//! is reported through [`crate::lookup::InvalidInput`] instead.
use std::io;

use thiserror::Error;

/// Unified error type for the workspace.
#[derive(Error, Debug)]
pub enum ScoutError {
    /// I/O error originating from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/configuration error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Outbound HTTP call failed: connection, timeout, or a non-2xx status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
